//! Report renderers: each takes the project (plus an injected `today`
//! where relative dates appear) and returns the rendered text.

use chrono::NaiveDate;

use crate::project::CrowdfundingProject;

use super::{
    dates::format_relative_date,
    format::{format_currency, format_date, format_percent},
    style::ReportStyle,
    table::{Table, TableColumn, TableRenderer},
};

pub fn render_partner_summary(project: &CrowdfundingProject, style: &ReportStyle) -> String {
    let mut table = Table::new(
        Some("Partner Summary"),
        vec![
            TableColumn::new("Partner", 24),
            TableColumn::new("Investment", 18),
            TableColumn::new("Ownership", 10),
            TableColumn::new("Payments", 18),
            TableColumn::new("Balance", 18),
            TableColumn::new("Net Sales Share", 18),
        ],
    );
    for row in project.partner_summary() {
        table.add_row(vec![
            row.name,
            format_currency(row.investment, &style.currency),
            format_percent(row.ownership_percentage),
            format_currency(row.total_payments, &style.currency),
            format_currency(row.investment_balance, &style.currency),
            format_currency(row.net_sales_share, &style.currency),
        ]);
    }
    TableRenderer::render(&table, style)
}

pub fn render_expense_summary(project: &CrowdfundingProject, style: &ReportStyle) -> String {
    let mut table = Table::new(
        Some("Expense Summary"),
        vec![
            TableColumn::new("Expense", 40),
            TableColumn::new("Date", 12),
            TableColumn::new("Total", 18),
            TableColumn::new("Paid", 18),
            TableColumn::new("Remaining", 18),
            TableColumn::new("Status", 14),
        ],
    );
    for row in project.expense_summary() {
        table.add_row(vec![
            row.description,
            format_date(row.date),
            format_currency(row.total, &style.currency),
            format_currency(row.paid, &style.currency),
            format_currency(row.remaining, &style.currency),
            row.status.to_string(),
        ]);
    }
    TableRenderer::render(&table, style)
}

pub fn render_payment_summary(
    project: &CrowdfundingProject,
    style: &ReportStyle,
    today: NaiveDate,
) -> String {
    let mut table = Table::new(
        Some("Payment Summary"),
        vec![
            TableColumn::new("#", 4),
            TableColumn::new("Date", 12),
            TableColumn::new("When", 14),
            TableColumn::new("Source", 24),
            TableColumn::new("Amount", 18),
            TableColumn::new("Expense", 40),
            TableColumn::new("Share", 8),
        ],
    );
    for (position, row) in project.payment_summary().into_iter().enumerate() {
        table.add_row(vec![
            format!("#{}", position + 1),
            format_date(row.date),
            format_relative_date(row.date, today),
            row.source_label,
            format_currency(row.amount, &style.currency),
            row.expense_description.unwrap_or_default(),
            format_percent(row.percentage_of_expense),
        ]);
    }
    TableRenderer::render(&table, style)
}

pub fn render_sale_summary(project: &CrowdfundingProject, style: &ReportStyle) -> String {
    let mut table = Table::new(
        Some("Sale Summary"),
        vec![
            TableColumn::new("Sale", 40),
            TableColumn::new("Date", 12),
            TableColumn::new("Amount", 18),
        ],
    );
    for row in project.sale_summary() {
        table.add_row(vec![
            row.description,
            format_date(row.date),
            format_currency(row.total, &style.currency),
        ]);
    }
    TableRenderer::render(&table, style)
}

/// The headline project card, mirroring the classic overview block.
pub fn render_overview(project: &CrowdfundingProject, style: &ReportStyle) -> String {
    let overview = project.overview();
    let currency = style.currency.as_str();
    let prefix = if style.use_icons { "🏗️ " } else { "" };
    let title = format!("{prefix}Crowdfunding Project: {}", overview.name);

    let mut out = String::new();
    out.push_str(&style.apply_header_style(&title));
    out.push('\n');
    if !style.plain_mode {
        out.push_str(&style.horizontal_line(40));
        out.push('\n');
    }
    let lines = [
        ("Target Amount", format_currency(overview.target_amount, currency)),
        ("Start Date", format_date(overview.start_date)),
        ("End Date", format_date(overview.end_date)),
        (
            "Total Investments Plan",
            format_currency(overview.total_investments, currency),
        ),
        (
            "Total Expenses",
            format_currency(overview.total_expenses, currency),
        ),
        (
            "Total Payments",
            format_currency(overview.total_payments, currency),
        ),
        ("Gross Sales", format_currency(overview.gross_sales, currency)),
        (
            "Sales Reinvestments",
            format_currency(overview.sales_reinvestments, currency),
        ),
        ("Net Sales", format_currency(overview.net_sales, currency)),
        (
            "Current Balance",
            format_currency(overview.project_balance, currency),
        ),
        (
            "Remaining Total Expenses",
            format_currency(overview.remaining_expenses, currency),
        ),
    ];
    for (label, value) in lines {
        out.push_str(&format!("{label}: {value}\n"));
    }
    out
}
