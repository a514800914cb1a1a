use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Enumerates how much of an expense has been settled by payments.
///
/// The status is never stored; it is recomputed from `paid` vs `total` on
/// every summary query. `remaining == 0` wins over `paid == 0`, so a
/// zero-amount expense with no payments reports [`PaymentStatus::FullyPaid`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Unpaid,
    PartiallyPaid,
    FullyPaid,
}

impl PaymentStatus {
    /// Derives the status from the paid and remaining amounts of an expense.
    pub fn from_amounts(paid: Decimal, remaining: Decimal) -> Self {
        if remaining.is_zero() {
            PaymentStatus::FullyPaid
        } else if paid.is_zero() {
            PaymentStatus::Unpaid
        } else {
            PaymentStatus::PartiallyPaid
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::PartiallyPaid => "Partially Paid",
            PaymentStatus::FullyPaid => "Fully Paid",
        };
        f.write_str(label)
    }
}
