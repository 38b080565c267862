use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::group::group_label;
use crate::models::RoomColumn;
use crate::types::Period;

/// One normalized row of a source export.
///
/// Every field has already been coerced at load time: amounts are never missing,
/// the country is never blank and room columns are empty strings rather than
/// absent. Only the date, the group code, the description and the first name
/// can still be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Which source file the row came from.
    pub period: Period,
    /// `None` when the source cell could not be read as a date.
    pub transaction_date: Option<NaiveDateTime>,
    pub net_amount: Decimal,
    pub gross_amount: Decimal,
    /// Source value, or `N/A` when blank.
    pub country: String,
    /// Numeric transaction code group (10 = Room, 20 = F&B, ...).
    pub group_code: Option<Decimal>,
    pub description: Option<String>,
    pub room_type: String,
    pub room_class: String,
    /// Second `Room Class` column some exports carry.
    pub room_class_variant: String,
    pub first_name: Option<String>
}

impl Transaction {
    pub fn date(&self) -> Option<NaiveDate> {
        self.transaction_date.map(|timestamp| timestamp.date())
    }

    pub fn group_label(&self) -> String {
        group_label(self.group_code)
    }

    pub fn room(&self, column: RoomColumn) -> &str {
        match column {
            RoomColumn::RoomType => &self.room_type,
            RoomColumn::RoomClass => &self.room_class
        }
    }

    /// Guest identity used for ranking: `First Name (Country)`.
    pub fn guest(&self) -> String {
        format!("{} ({})", self.first_name.as_deref().unwrap_or_default(), self.country)
    }
}
