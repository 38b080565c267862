use std::cmp::Ordering;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::Transaction;
use crate::types::{percent_change, Period};

/// A measure split by period.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PeriodPair<T> {
    pub jan_2025: T,
    pub jan_2026: T
}

impl<T: Copy> PeriodPair<T> {
    pub fn get(&self, period: Period) -> T {
        match period {
            Period::Jan2025 => self.jan_2025,
            Period::Jan2026 => self.jan_2026
        }
    }

    pub fn get_mut(&mut self, period: Period) -> &mut T {
        match period {
            Period::Jan2025 => &mut self.jan_2025,
            Period::Jan2026 => &mut self.jan_2026
        }
    }
}

/// A summable measure. Sums clamp at the type's bounds instead of panicking.
pub trait Measure: Copy {
    fn checked_sum(self, rhs: Self) -> Option<Self>;
    fn saturating_sum(self, rhs: Self) -> Self;
}

impl Measure for Decimal {
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs)
    }

    fn saturating_sum(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl Measure for u64 {
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs)
    }

    fn saturating_sum(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

/// Adds `value` into `slot`, clamping and logging on overflow.
pub fn accumulate_into<T: Measure>(slot: &mut T, value: T, period: Period) {
    *slot = match slot.checked_sum(value) {
        Some(sum) => sum,
        None => {
            warn!("Sum for period [{period}] overflowed, clamping to the representable bound");
            slot.saturating_sum(value)
        }
    };
}

impl<T: Measure> PeriodPair<T> {
    /// Combined value across both periods.
    pub fn total(&self) -> T {
        self.jan_2025.saturating_sum(self.jan_2026)
    }

    pub fn accumulate(&mut self, period: Period, value: T) {
        accumulate_into(self.get_mut(period), value, period);
    }
}

impl<T: Copy + Into<Decimal>> PeriodPair<T> {
    /// Percent change from 2025 to 2026, `None` when 2025 is zero.
    pub fn change(&self) -> Option<Decimal> {
        percent_change(self.jan_2025.into(), self.jan_2026.into())
    }
}

/// Net amount of one category in both periods.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Comparison {
    pub key: String,
    pub net: PeriodPair<Decimal>
}

impl Comparison {
    pub fn change(&self) -> Option<Decimal> {
        self.net.change()
    }
}

/// Sums net amount per category and period, ordered by category.
///
/// Records for which `key` returns `None` are left out.
pub fn compare_by<'a, I, F>(records: I, key: F) -> Vec<Comparison>
where
    I: IntoIterator<Item = &'a Transaction>,
    F: Fn(&Transaction) -> Option<String>,
{
    let mut groups = BTreeMap::<String, PeriodPair<Decimal>>::new();

    for record in records {
        if let Some(category) = key(record) {
            groups.entry(category).or_default().accumulate(record.period, record.net_amount);
        }
    }

    groups.into_iter()
        .map(|(key, net)| Comparison { key, net })
        .collect()
}

/// Keeps the `top_n` categories with the largest combined net, largest first.
///
/// The sort is stable, so ties keep category order.
pub fn top_n_by_total(mut rows: Vec<Comparison>, top_n: usize) -> Vec<Comparison> {
    rows.sort_by(|left, right| descending(left.net.total(), right.net.total()));
    rows.truncate(top_n);
    rows
}

/// Keeps the first `limit` categories ranked by their net in `period`.
pub fn top_n_by_period(mut rows: Vec<Comparison>, period: Period, limit: usize) -> Vec<Comparison> {
    rows.sort_by(|left, right| descending(left.net.get(period), right.net.get(period)));
    rows.truncate(limit);
    rows
}

fn descending(left: Decimal, right: Decimal) -> Ordering {
    right.cmp(&left)
}
