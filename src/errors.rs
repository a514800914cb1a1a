use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Error type that captures ledger invariant violations.
///
/// Every variant is raised synchronously, before any mutation, so a
/// rejected operation leaves the project unchanged.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("payment amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Decimal },
    #[error("payment funded from sales cannot reference a partner")]
    ConflictingSource,
    #[error("payment must reference a partner unless it is funded from sales")]
    MissingSource,
    #[error("unknown partner reference: {0}")]
    UnknownPartner(Uuid),
    #[error("unknown expense reference: {0}")]
    UnknownExpense(Uuid),
    #[error(
        "payment of {attempted} would overpay expense `{description}`: \
         total {total}, already paid {paid}, remaining {remaining}"
    )]
    OverPayment {
        description: String,
        total: Decimal,
        paid: Decimal,
        remaining: Decimal,
        attempted: Decimal,
    },
}

/// Error type raised when an amount expression cannot be evaluated.
#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error(
        "invalid characters in expression `{0}`; only digits, decimal points, \
         plus signs, and spaces are allowed"
    )]
    InvalidCharacters(String),
    #[error("malformed expression `{0}`; operators cannot be consecutive or lead/trail")]
    MalformedOperators(String),
    #[error("no numeric terms found in expression `{0}`")]
    NoNumbers(String),
    #[error("mismatched terms in expression `{0}`")]
    MalformedStructure(String),
    #[error("failed to parse numeric term `{term}` in expression `{expression}`")]
    InvalidNumber { expression: String, term: String },
    #[error("unsupported value type for amount: {0}")]
    UnsupportedValue(&'static str),
}

/// Error type for loading and validating declarative project files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration syntax: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project end_date must be after start_date")]
    InvalidDateRange,
    #[error("at least one {0} is required")]
    EmptySection(&'static str),
    #[error("duplicate partner name: {0}")]
    DuplicatePartner(String),
    #[error("duplicate expense description: {0}")]
    DuplicateExpense(String),
    #[error("{entity} amount error: {source}")]
    InvalidAmount {
        entity: String,
        #[source]
        source: ExpressionError,
    },
    #[error("{entity} amount must be positive")]
    NonPositiveAmount { entity: String },
    #[error("payment {index} references unknown partner: {name}")]
    UnknownPartnerRef { index: usize, name: String },
    #[error("payment {index} references unknown expense: {description}")]
    UnknownExpenseRef { index: usize, description: String },
    #[error("payment {index} is funded from sales and cannot also name a partner")]
    ConflictingPaymentSource { index: usize },
    #[error("payment {index} must name a partner unless it is funded from sales")]
    MissingPaymentSource { index: usize },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
