//! Typed model of the declarative project file.
//!
//! Amount fields are kept as raw JSON values because they accept either a
//! number or an additive expression string; [`AmountEvaluator`] resolves
//! them during validation and project building.
//!
//! [`AmountEvaluator`]: crate::eval::AmountEvaluator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project: ProjectDecl,
    pub partners: Vec<PartnerDecl>,
    pub expenses: Vec<ExpenseDecl>,
    pub payments: Vec<PaymentDecl>,
    #[serde(default)]
    pub sales: Vec<SaleDecl>,
}

/// `project` section: identity and the tracked date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDecl {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerDecl {
    pub name: String,
    pub investment_amount: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseDecl {
    pub description: String,
    pub amount: Value,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDecl {
    pub amount: Value,
    pub date: NaiveDate,
    pub description: String,
}

/// A payment declaration references its partner by name and its expense by
/// description. `partner` is omitted exactly when `from_sales` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDecl {
    pub amount: Value,
    pub date: NaiveDate,
    #[serde(default)]
    pub partner: Option<String>,
    pub expense: String,
    #[serde(default)]
    pub from_sales: bool,
}
