use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::TransactionTable;
use crate::report::PeriodPair;
use crate::types::Period;

/// Headline metrics for the overview.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Kpis {
    pub net: PeriodPair<Decimal>,
    pub transactions: PeriodPair<u64>,
    /// Distinct non-blank first names.
    pub guests: PeriodPair<u64>
}

pub fn kpis(table: &TransactionTable) -> Kpis {
    let mut net = PeriodPair::<Decimal>::default();
    let mut transactions = PeriodPair::<u64>::default();
    let mut guests = PeriodPair::<u64>::default();

    for period in Period::ALL {
        let mut names = HashSet::new();

        for record in table.period(period) {
            net.accumulate(period, record.net_amount);
            transactions.accumulate(period, 1);

            if let Some(name) = record.first_name.as_deref().map(str::trim).filter(|name| !name.is_empty()) {
                names.insert(name);
            }
        }

        *guests.get_mut(period) = names.len() as u64;
    }

    Kpis { net, transactions, guests }
}
