use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a money transfer that reduces an expense's outstanding balance.
///
/// A payment is funded either by a partner (`partner_id` set) or by sale
/// proceeds (`from_sales` set) — never both, never neither. The invariant is
/// enforced by [`CrowdfundingProject::add_payment`], the only creation path.
///
/// [`CrowdfundingProject::add_payment`]: crate::project::CrowdfundingProject::add_payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    pub id: Uuid,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub partner_id: Option<Uuid>,
    #[serde(default)]
    pub expense_id: Option<Uuid>,
    #[serde(default)]
    pub from_sales: bool,
}

impl Payment {
    pub(crate) fn new(
        amount: Decimal,
        date: NaiveDate,
        partner_id: Option<Uuid>,
        expense_id: Option<Uuid>,
        from_sales: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            date,
            partner_id,
            expense_id,
            from_sales,
        }
    }
}
