use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{is_mix_excluded, TransactionTable};
use crate::report::aggregate::{accumulate_into, compare_by, top_n_by_period, top_n_by_total};
use crate::report::Comparison;
use crate::types::Period;

/// Room codes left out of the room chart unless asked otherwise.
pub const EXCLUDED_ROOM_CODES: [&str; 2] = ["PF", "PM"];

/// Net amount of one calendar day within one period.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DailyNet {
    pub date: NaiveDate,
    pub period: Period,
    pub net: Decimal
}

/// Share of one group label within a single period.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GroupShare {
    pub label: String,
    pub net: Decimal
}

/// Guest ranking together with the period it is sorted by.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GuestRanking {
    pub sort_period: Period,
    pub rows: Vec<Comparison>
}

/// Net per calendar date and period, ordered by date.
pub fn daily_net(table: &TransactionTable) -> Vec<DailyNet> {
    let mut days = BTreeMap::<(NaiveDate, Period), Decimal>::new();

    for record in table.records() {
        if let Some(date) = record.date() {
            accumulate_into(days.entry((date, record.period)).or_default(), record.net_amount, record.period);
        }
    }

    days.into_iter()
        .map(|((date, period), net)| DailyNet { date, period, net })
        .collect()
}

pub fn net_by_country(table: &TransactionTable, top_n: usize) -> Vec<Comparison> {
    let rows = compare_by(table.records(), |record| Some(record.country.clone()));
    top_n_by_total(rows, top_n)
}

/// Country comparison for the table view: ranked by 2026 net, twice the top-N rows.
pub fn country_table(table: &TransactionTable, top_n: usize) -> Vec<Comparison> {
    let rows = compare_by(table.records(), |record| Some(record.country.clone()));
    top_n_by_period(rows, Period::Jan2026, top_n * 2)
}

pub fn net_by_group(table: &TransactionTable) -> Vec<Comparison> {
    compare_by(table.records(), |record| Some(record.group_label()))
}

/// Group comparison without the VAT and Service groups.
pub fn revenue_mix(table: &TransactionTable) -> Vec<Comparison> {
    compare_by(table.records(), |record| {
        Some(record.group_label()).filter(|label| !is_mix_excluded(label))
    })
}

/// Net per group label inside one period.
pub fn group_mix(table: &TransactionTable, period: Period) -> Vec<GroupShare> {
    compare_by(table.period(period), |record| Some(record.group_label()))
        .into_iter()
        .map(|row| GroupShare { label: row.key, net: row.net.get(period) })
        .collect()
}

/// Room chart data. Blank rooms are always skipped; `exclude_codes` also drops
/// `EXCLUDED_ROOM_CODES`.
pub fn net_by_room_type(table: &TransactionTable, top_n: usize, exclude_codes: bool) -> Vec<Comparison> {
    let column = table.room_column();
    let rows = compare_by(table.records(), |record| {
        let room = record.room(column).trim();

        if room.is_empty() || (exclude_codes && EXCLUDED_ROOM_CODES.contains(&room)) {
            return None;
        }

        Some(room.to_string())
    });

    top_n_by_total(rows, top_n)
}

/// Room comparison for the table view: every room value, ranked by 2026 net.
pub fn room_table(table: &TransactionTable, top_n: usize) -> Vec<Comparison> {
    let column = table.room_column();
    let rows = compare_by(table.records(), |record| Some(record.room(column).to_string()));
    top_n_by_period(rows, Period::Jan2026, top_n)
}

pub fn top_descriptions(table: &TransactionTable, top_n: usize) -> Vec<Comparison> {
    let rows = compare_by(table.records(), |record| record.description.clone());
    top_n_by_total(rows, top_n)
}

/// Guests ranked by the most recent period present in `table`.
pub fn top_guests(table: &TransactionTable, top_n: usize) -> GuestRanking {
    let sort_period = if table.has_period(Period::Jan2026) {
        Period::Jan2026
    } else {
        Period::Jan2025
    };

    let rows = compare_by(table.records(), |record| Some(record.guest()));

    GuestRanking {
        sort_period,
        rows: top_n_by_period(rows, sort_period, top_n)
    }
}
