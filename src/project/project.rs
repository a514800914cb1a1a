//! The crowdfunding project aggregate.
//!
//! Single source of truth for a project's financial state: owns the entity
//! collections, exposes append-style creation operations with validation,
//! and derives every metric by full re-scan of the collections.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::{
    expense::Expense,
    partner::Partner,
    payment::Payment,
    sale::Sale,
    status::PaymentStatus,
    summary::{
        ExpenseSummary, OwnershipStake, PartnerSummary, PaymentSummary, ProjectOverview,
        SaleSummary, SALES_REVENUE_LABEL,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdfundingProject {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub sales: Vec<Sale>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CrowdfundingProject {
    /// Creates an empty project. The date range is taken as given; the
    /// config loader is responsible for rejecting `end_date <= start_date`.
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date,
            end_date,
            partners: Vec::new(),
            expenses: Vec::new(),
            payments: Vec::new(),
            sales: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a partner and returns its id.
    ///
    /// A zero investment is legitimate. Name uniqueness is enforced by the
    /// config loader; direct callers are trusted not to create duplicates.
    pub fn add_partner(&mut self, name: impl Into<String>, investment_amount: Decimal) -> Uuid {
        let partner = Partner::new(name, investment_amount);
        let id = partner.id;
        tracing::debug!(partner = %partner.name, %investment_amount, "adding partner");
        self.partners.push(partner);
        self.touch();
        id
    }

    /// Appends an expense and returns its id.
    pub fn add_expense(
        &mut self,
        description: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Uuid {
        let expense = Expense::new(description, amount, date);
        let id = expense.id;
        tracing::debug!(expense = %expense.description, %amount, "adding expense");
        self.expenses.push(expense);
        self.touch();
        id
    }

    /// Appends a sale and returns its id.
    pub fn add_sale(
        &mut self,
        amount: Decimal,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Uuid {
        let sale = Sale::new(amount, date, description);
        let id = sale.id;
        tracing::debug!(sale = %sale.description, %amount, "adding sale");
        self.sales.push(sale);
        self.touch();
        id
    }

    /// Validates and appends a payment, returning its id.
    ///
    /// A payment is funded by exactly one source: a partner, or sale
    /// proceeds when `from_sales` is set. When an expense is referenced the
    /// payment may not push the expense past its original amount; partner
    /// payments and reinvestments share that cap. On any rejection the
    /// ledger is left unchanged.
    pub fn add_payment(
        &mut self,
        amount: Decimal,
        date: NaiveDate,
        partner: Option<Uuid>,
        expense: Option<Uuid>,
        from_sales: bool,
    ) -> Result<Uuid, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount { amount });
        }
        match (partner, from_sales) {
            (Some(_), true) => return Err(LedgerError::ConflictingSource),
            (None, false) => return Err(LedgerError::MissingSource),
            _ => {}
        }
        if let Some(partner_id) = partner {
            if self.partner(partner_id).is_none() {
                return Err(LedgerError::UnknownPartner(partner_id));
            }
        }
        if let Some(expense_id) = expense {
            let expense = self
                .expense(expense_id)
                .ok_or(LedgerError::UnknownExpense(expense_id))?;
            let paid = self.paid_towards(expense_id);
            if paid + amount > expense.amount {
                return Err(LedgerError::OverPayment {
                    description: expense.description.clone(),
                    total: expense.amount,
                    paid,
                    remaining: expense.amount - paid,
                    attempted: amount,
                });
            }
        }
        let payment = Payment::new(amount, date, partner, expense, from_sales);
        let id = payment.id;
        tracing::debug!(%amount, %date, from_sales, "adding payment");
        self.payments.push(payment);
        self.touch();
        Ok(id)
    }

    pub fn partner(&self, id: Uuid) -> Option<&Partner> {
        self.partners.iter().find(|partner| partner.id == id)
    }

    pub fn partner_by_name(&self, name: &str) -> Option<&Partner> {
        self.partners.iter().find(|partner| partner.name == name)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_by_description(&self, description: &str) -> Option<&Expense> {
        self.expenses
            .iter()
            .find(|expense| expense.description == description)
    }

    pub fn sale(&self, id: Uuid) -> Option<&Sale> {
        self.sales.iter().find(|sale| sale.id == id)
    }

    pub fn payment(&self, id: Uuid) -> Option<&Payment> {
        self.payments.iter().find(|payment| payment.id == id)
    }

    pub fn payment_count(&self) -> usize {
        self.payments.len()
    }

    pub fn total_expenses(&self) -> Decimal {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn total_payments(&self) -> Decimal {
        self.payments.iter().map(|payment| payment.amount).sum()
    }

    pub fn total_investments(&self) -> Decimal {
        self.partners
            .iter()
            .map(|partner| partner.investment_amount)
            .sum()
    }

    /// The funding target, i.e. the sum of all expenses.
    pub fn target_amount(&self) -> Decimal {
        self.total_expenses()
    }

    /// Sum of sale amounts, optionally restricted to `date >= since`.
    pub fn total_gross_sales(&self, since: Option<NaiveDate>) -> Decimal {
        self.sales
            .iter()
            .filter(|sale| since.map_or(true, |cutoff| sale.date >= cutoff))
            .map(|sale| sale.amount)
            .sum()
    }

    /// Sum of payments funded from sale proceeds, optionally date-filtered.
    pub fn total_sales_reinvestments(&self, since: Option<NaiveDate>) -> Decimal {
        self.payments
            .iter()
            .filter(|payment| payment.from_sales)
            .filter(|payment| since.map_or(true, |cutoff| payment.date >= cutoff))
            .map(|payment| payment.amount)
            .sum()
    }

    /// Gross sales minus reinvestments. Negative when reinvestments exceed
    /// gross sales; that is a representable debt state, not an error.
    pub fn total_net_sales(&self, since: Option<NaiveDate>) -> Decimal {
        self.total_gross_sales(since) - self.total_sales_reinvestments(since)
    }

    /// Net sales minus all partner-funded payments.
    pub fn project_balance(&self) -> Decimal {
        let partner_funded: Decimal = self
            .payments
            .iter()
            .filter(|payment| !payment.from_sales)
            .map(|payment| payment.amount)
            .sum();
        self.total_net_sales(None) - partner_funded
    }

    pub fn remaining_expenses(&self) -> Decimal {
        self.total_expenses() - self.total_payments()
    }

    /// Sum of payments linked to an expense, regardless of funding source.
    pub fn paid_towards(&self, expense_id: Uuid) -> Decimal {
        self.payments
            .iter()
            .filter(|payment| payment.expense_id == Some(expense_id))
            .map(|payment| payment.amount)
            .sum()
    }

    /// Each partner's share of total investment, in insertion order.
    ///
    /// When total investment is zero every known partner reports a zero
    /// stake; the list is empty only when there are no partners.
    pub fn ownership_percentages(&self) -> Vec<OwnershipStake> {
        let total = self.total_investments();
        self.partners
            .iter()
            .map(|partner| OwnershipStake {
                partner_id: partner.id,
                name: partner.name.clone(),
                percentage: Self::percentage_of(partner.investment_amount, total),
            })
            .collect()
    }

    pub fn partner_summary(&self) -> Vec<PartnerSummary> {
        let total_investment = self.total_investments();
        let net_sales = self.total_net_sales(None);
        self.partners
            .iter()
            .map(|partner| {
                let ownership_percentage =
                    Self::percentage_of(partner.investment_amount, total_investment);
                let paid: Decimal = self
                    .payments
                    .iter()
                    .filter(|payment| payment.partner_id == Some(partner.id))
                    .map(|payment| payment.amount)
                    .sum();
                PartnerSummary {
                    partner_id: partner.id,
                    name: partner.name.clone(),
                    investment: partner.investment_amount,
                    ownership_percentage,
                    total_payments: paid,
                    investment_balance: partner.investment_amount - paid,
                    net_sales_share: net_sales * ownership_percentage / Decimal::ONE_HUNDRED,
                }
            })
            .collect()
    }

    pub fn expense_summary(&self) -> Vec<ExpenseSummary> {
        self.expenses
            .iter()
            .map(|expense| {
                let paid = self.paid_towards(expense.id);
                let remaining = expense.amount - paid;
                ExpenseSummary {
                    expense_id: expense.id,
                    description: expense.description.clone(),
                    date: expense.date,
                    total: expense.amount,
                    paid,
                    remaining,
                    status: PaymentStatus::from_amounts(paid, remaining),
                }
            })
            .collect()
    }

    pub fn payment_summary(&self) -> Vec<PaymentSummary> {
        self.payments
            .iter()
            .map(|payment| {
                let source_label = if payment.from_sales {
                    SALES_REVENUE_LABEL.to_string()
                } else {
                    payment
                        .partner_id
                        .and_then(|id| self.partner(id))
                        .map(|partner| partner.name.clone())
                        .unwrap_or_default()
                };
                let expense = payment.expense_id.and_then(|id| self.expense(id));
                let percentage_of_expense = match expense {
                    Some(expense) => Self::percentage_of(payment.amount, expense.amount),
                    None => Decimal::ZERO,
                };
                PaymentSummary {
                    payment_id: payment.id,
                    date: payment.date,
                    source_label,
                    from_sales: payment.from_sales,
                    amount: payment.amount,
                    expense_description: expense.map(|expense| expense.description.clone()),
                    percentage_of_expense,
                }
            })
            .collect()
    }

    pub fn sale_summary(&self) -> Vec<SaleSummary> {
        self.sales
            .iter()
            .map(|sale| SaleSummary {
                sale_id: sale.id,
                description: sale.description.clone(),
                date: sale.date,
                total: sale.amount,
            })
            .collect()
    }

    pub fn overview(&self) -> ProjectOverview {
        ProjectOverview {
            name: self.name.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            target_amount: self.target_amount(),
            total_investments: self.total_investments(),
            total_expenses: self.total_expenses(),
            total_payments: self.total_payments(),
            gross_sales: self.total_gross_sales(None),
            sales_reinvestments: self.total_sales_reinvestments(None),
            net_sales: self.total_net_sales(None),
            project_balance: self.project_balance(),
            remaining_expenses: self.remaining_expenses(),
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
        if whole.is_zero() {
            Decimal::ZERO
        } else {
            part / whole * Decimal::ONE_HUNDRED
        }
    }
}
