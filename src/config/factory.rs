//! Builds a populated project from a declarative configuration.

use std::{collections::HashMap, path::Path};

use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::{errors::ConfigError, eval::AmountEvaluator, project::CrowdfundingProject};

use super::{loader::ConfigLoader, model::ProjectConfig};

/// Turns a validated [`ProjectConfig`] into a [`CrowdfundingProject`],
/// resolving name references to entity ids and amount expressions to
/// decimals along the way.
pub struct ProjectFactory;

impl ProjectFactory {
    /// Loads, validates, and builds a project in one step.
    pub fn from_path(path: impl AsRef<Path>) -> Result<CrowdfundingProject, ConfigError> {
        let config = ConfigLoader::load(path)?;
        Self::build(&config)
    }

    /// Builds a project from an already-validated configuration.
    ///
    /// Ledger-level rejections (e.g. an over-payment only visible once the
    /// payments are applied in order) surface as [`ConfigError::Ledger`].
    pub fn build(config: &ProjectConfig) -> Result<CrowdfundingProject, ConfigError> {
        let mut project = CrowdfundingProject::new(
            config.project.name.clone(),
            config.project.start_date,
            config.project.end_date,
        );

        let mut partners: HashMap<&str, Uuid> = HashMap::new();
        for decl in &config.partners {
            let amount = evaluate(&decl.investment_amount, || {
                format!("partner `{}` investment_amount", decl.name)
            })?;
            let id = project.add_partner(decl.name.clone(), amount);
            partners.insert(decl.name.as_str(), id);
        }

        let mut expenses: HashMap<&str, Uuid> = HashMap::new();
        for decl in &config.expenses {
            let amount = evaluate(&decl.amount, || format!("expense `{}`", decl.description))?;
            let id = project.add_expense(decl.description.clone(), amount, decl.date);
            expenses.insert(decl.description.as_str(), id);
        }

        for decl in &config.sales {
            let amount = evaluate(&decl.amount, || format!("sale `{}`", decl.description))?;
            project.add_sale(amount, decl.date, decl.description.clone());
        }

        for (position, decl) in config.payments.iter().enumerate() {
            let index = position + 1;
            let amount = evaluate(&decl.amount, || format!("payment {index}"))?;
            let partner = match &decl.partner {
                Some(name) => Some(*partners.get(name.as_str()).ok_or_else(|| {
                    ConfigError::UnknownPartnerRef {
                        index,
                        name: name.clone(),
                    }
                })?),
                None => None,
            };
            let expense = expenses.get(decl.expense.as_str()).copied().ok_or_else(|| {
                ConfigError::UnknownExpenseRef {
                    index,
                    description: decl.expense.clone(),
                }
            })?;
            project.add_payment(amount, decl.date, partner, Some(expense), decl.from_sales)?;
        }

        tracing::info!(
            project = %project.name,
            partners = project.partners.len(),
            expenses = project.expenses.len(),
            payments = project.payments.len(),
            sales = project.sales.len(),
            "project built from configuration"
        );
        Ok(project)
    }
}

fn evaluate(value: &Value, entity: impl Fn() -> String) -> Result<Decimal, ConfigError> {
    AmountEvaluator::evaluate(value).map_err(|source| ConfigError::InvalidAmount {
        entity: entity(),
        source,
    })
}
