use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::types::Period;

/// Builds a normalized record with sensible defaults for tests.
pub fn create_transaction(period: Period, day: u32, net_amount: i64, country: &str) -> Transaction {
    Transaction {
        period,
        transaction_date: january(period, day),
        net_amount: Decimal::from(net_amount),
        gross_amount: Decimal::from(net_amount),
        country: country.to_string(),
        group_code: Some(Decimal::from(10)),
        description: Some("Room Charge".to_string()),
        room_type: "DLX".to_string(),
        room_class: "DELUXE".to_string(),
        room_class_variant: String::new(),
        first_name: Some("Anna".to_string())
    }
}

fn january(period: Period, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(period.year() as i32, 1, day)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
}

pub trait TransactionExt {
    fn with_group(self, code: i64) -> Self;
    fn with_description(self, description: &str) -> Self;
    fn with_room_type(self, room_type: &str) -> Self;
    fn with_first_name(self, first_name: Option<&str>) -> Self;
    fn without_date(self) -> Self;
}

impl TransactionExt for Transaction {
    fn with_group(mut self, code: i64) -> Self {
        self.group_code = Some(Decimal::from(code));
        self
    }

    fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    fn with_room_type(mut self, room_type: &str) -> Self {
        self.room_type = room_type.to_string();
        self
    }

    fn with_first_name(mut self, first_name: Option<&str>) -> Self {
        self.first_name = first_name.map(str::to_string);
        self
    }

    fn without_date(mut self) -> Self {
        self.transaction_date = None;
        self
    }
}
