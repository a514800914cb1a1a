use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a revenue event, e.g. the sale of a finished unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sale {
    pub id: Uuid,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
}

impl Sale {
    pub fn new(amount: Decimal, date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            date,
            description: description.into(),
        }
    }
}
