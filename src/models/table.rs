use std::collections::BTreeSet;

use crate::models::Transaction;
use crate::types::Period;

/// Which column of the export identifies the room.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RoomColumn {
    RoomType,
    RoomClass
}

/// The unified, read-only table of both periods.
#[derive(Debug, Clone)]
pub struct TransactionTable {
    records: Vec<Transaction>,
    room_column: RoomColumn
}

impl TransactionTable {
    pub fn new(records: Vec<Transaction>, room_column: RoomColumn) -> Self {
        Self { records, room_column }
    }

    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn room_column(&self) -> RoomColumn {
        self.room_column
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn period(&self, period: Period) -> impl Iterator<Item = &Transaction> {
        self.records.iter().filter(move |record| record.period == period)
    }

    pub fn has_period(&self, period: Period) -> bool {
        self.period(period).next().is_some()
    }

    /// Drops rows whose transaction date could not be parsed.
    pub fn dated(&self) -> TransactionTable {
        self.retain(|record| record.transaction_date.is_some())
    }

    /// Sorted distinct countries, the choices offered by the country filter.
    pub fn countries(&self) -> Vec<String> {
        self.records.iter()
            .map(|record| record.country.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Keeps only the selected countries. An empty selection keeps everything.
    pub fn filter_countries(&self, countries: &[String]) -> TransactionTable {
        if countries.is_empty() {
            return self.clone();
        }

        self.retain(|record| countries.contains(&record.country))
    }

    fn retain<F>(&self, predicate: F) -> TransactionTable
    where
        F: Fn(&Transaction) -> bool,
    {
        let records = self.records.iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();

        TransactionTable::new(records, self.room_column)
    }
}
