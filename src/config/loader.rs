//! Loading and validation of declarative project files.

use std::{collections::HashSet, fs, path::Path};

use rust_decimal::Decimal;
use serde_json::Value;

use crate::{errors::ConfigError, eval::AmountEvaluator};

use super::model::{ExpenseDecl, PartnerDecl, ProjectConfig, SaleDecl};

/// Loads project files and enforces the schema rules the in-memory API
/// does not re-check: the date range, section presence, name uniqueness,
/// amount positivity, and payment cross-references.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates a project file.
    pub fn load(path: impl AsRef<Path>) -> Result<ProjectConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        let config: ProjectConfig = serde_json::from_str(&data)?;
        Self::validate(&config)?;
        tracing::info!(project = %config.project.name, "configuration loaded");
        Ok(config)
    }

    /// Validates an already-parsed configuration.
    pub fn validate(config: &ProjectConfig) -> Result<(), ConfigError> {
        if config.project.end_date <= config.project.start_date {
            return Err(ConfigError::InvalidDateRange);
        }
        Self::validate_partners(&config.partners)?;
        Self::validate_expenses(&config.expenses)?;
        Self::validate_sales(&config.sales)?;
        Self::validate_payments(config)?;
        Ok(())
    }

    fn validate_partners(partners: &[PartnerDecl]) -> Result<(), ConfigError> {
        if partners.is_empty() {
            return Err(ConfigError::EmptySection("partner"));
        }
        let mut seen = HashSet::new();
        for partner in partners {
            if !seen.insert(partner.name.as_str()) {
                return Err(ConfigError::DuplicatePartner(partner.name.clone()));
            }
            evaluate_positive(&partner.investment_amount, || {
                format!("partner `{}` investment_amount", partner.name)
            })?;
        }
        Ok(())
    }

    fn validate_expenses(expenses: &[ExpenseDecl]) -> Result<(), ConfigError> {
        if expenses.is_empty() {
            return Err(ConfigError::EmptySection("expense"));
        }
        let mut seen = HashSet::new();
        for expense in expenses {
            if !seen.insert(expense.description.as_str()) {
                return Err(ConfigError::DuplicateExpense(expense.description.clone()));
            }
            evaluate_positive(&expense.amount, || {
                format!("expense `{}`", expense.description)
            })?;
        }
        Ok(())
    }

    fn validate_sales(sales: &[SaleDecl]) -> Result<(), ConfigError> {
        for sale in sales {
            evaluate_positive(&sale.amount, || format!("sale `{}`", sale.description))?;
        }
        Ok(())
    }

    fn validate_payments(config: &ProjectConfig) -> Result<(), ConfigError> {
        if config.payments.is_empty() {
            return Err(ConfigError::EmptySection("payment"));
        }
        let partner_names: HashSet<&str> = config
            .partners
            .iter()
            .map(|partner| partner.name.as_str())
            .collect();
        let expense_descriptions: HashSet<&str> = config
            .expenses
            .iter()
            .map(|expense| expense.description.as_str())
            .collect();

        for (position, payment) in config.payments.iter().enumerate() {
            let index = position + 1;
            evaluate_positive(&payment.amount, || format!("payment {index}"))?;
            match (&payment.partner, payment.from_sales) {
                (Some(_), true) => {
                    return Err(ConfigError::ConflictingPaymentSource { index });
                }
                (None, false) => {
                    return Err(ConfigError::MissingPaymentSource { index });
                }
                _ => {}
            }
            if let Some(name) = &payment.partner {
                if !partner_names.contains(name.as_str()) {
                    return Err(ConfigError::UnknownPartnerRef {
                        index,
                        name: name.clone(),
                    });
                }
            }
            if !expense_descriptions.contains(payment.expense.as_str()) {
                return Err(ConfigError::UnknownExpenseRef {
                    index,
                    description: payment.expense.clone(),
                });
            }
        }
        Ok(())
    }
}

fn evaluate_positive(
    value: &Value,
    entity: impl Fn() -> String,
) -> Result<Decimal, ConfigError> {
    let amount = AmountEvaluator::evaluate(value).map_err(|source| ConfigError::InvalidAmount {
        entity: entity(),
        source,
    })?;
    if amount <= Decimal::ZERO {
        return Err(ConfigError::NonPositiveAmount { entity: entity() });
    }
    Ok(amount)
}
