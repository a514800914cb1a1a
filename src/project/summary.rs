//! Derived summary records handed to the presentation layer.
//!
//! Summaries are ordered lists keyed by entity id; display strings ride
//! along as attributes so duplicate names cannot collapse rows.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::PaymentStatus;

/// Source label reported for payments funded from sale proceeds.
pub const SALES_REVENUE_LABEL: &str = "Sales Revenue";

/// A partner's share of total investment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OwnershipStake {
    pub partner_id: Uuid,
    pub name: String,
    pub percentage: Decimal,
}

/// Aggregated investment and payment totals for a single partner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartnerSummary {
    pub partner_id: Uuid,
    pub name: String,
    pub investment: Decimal,
    pub ownership_percentage: Decimal,
    pub total_payments: Decimal,
    pub investment_balance: Decimal,
    pub net_sales_share: Decimal,
}

/// Settlement progress for a single expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseSummary {
    pub expense_id: Uuid,
    pub description: String,
    pub date: NaiveDate,
    pub total: Decimal,
    pub paid: Decimal,
    pub remaining: Decimal,
    pub status: PaymentStatus,
}

/// One payment row, reported in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentSummary {
    pub payment_id: Uuid,
    pub date: NaiveDate,
    pub source_label: String,
    pub from_sales: bool,
    pub amount: Decimal,
    pub expense_description: Option<String>,
    pub percentage_of_expense: Decimal,
}

/// Totals for a single sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleSummary {
    pub sale_id: Uuid,
    pub description: String,
    pub date: NaiveDate,
    pub total: Decimal,
}

/// Headline figures for the whole project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectOverview {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub target_amount: Decimal,
    pub total_investments: Decimal,
    pub total_expenses: Decimal,
    pub total_payments: Decimal,
    pub gross_sales: Decimal,
    pub sales_reinvestments: Decimal,
    pub net_sales: Decimal,
    pub project_balance: Decimal,
    pub remaining_expenses: Decimal,
}
