use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a partner who contributes capital and holds proportional ownership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    pub investment_amount: Decimal,
}

impl Partner {
    pub fn new(name: impl Into<String>, investment_amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            investment_amount,
        }
    }
}
