//! Command-line interface: argument parsing and report dispatch.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};

use crate::{
    config::ProjectFactory,
    errors::ConfigError,
    reports::{
        render_expense_summary, render_overview, render_partner_summary, render_payment_summary,
        render_sale_summary, style::DEFAULT_CURRENCY, ReportStyle,
    },
};

#[derive(Debug, Parser)]
#[command(
    name = "crowdfund_cli",
    about = "Render financial reports for a crowdfunding project",
    version
)]
pub struct Cli {
    /// Path to the project configuration file.
    pub config: PathBuf,

    /// Reports to render; defaults to all of them.
    #[arg(long = "report", value_enum)]
    pub reports: Vec<ReportKind>,

    /// Reference date for relative-date labels (YYYY-MM-DD); defaults to
    /// the current day.
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Disable colors and icons.
    #[arg(long)]
    pub plain: bool,

    /// Currency code used for display.
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Partners,
    Expenses,
    Payments,
    Sales,
    Overview,
}

const ALL_REPORTS: [ReportKind; 5] = [
    ReportKind::Partners,
    ReportKind::Expenses,
    ReportKind::Payments,
    ReportKind::Sales,
    ReportKind::Overview,
];

/// Parses arguments from the environment and runs the command.
pub fn run_cli() -> Result<(), ConfigError> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<(), ConfigError> {
    let project = ProjectFactory::from_path(&cli.config)?;
    let style = if cli.plain {
        ReportStyle::plain()
    } else {
        ReportStyle::detect()
    }
    .with_currency(&cli.currency);
    let today = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    let selected: &[ReportKind] = if cli.reports.is_empty() {
        &ALL_REPORTS
    } else {
        &cli.reports
    };
    for kind in selected {
        let rendered = match kind {
            ReportKind::Partners => render_partner_summary(&project, &style),
            ReportKind::Expenses => render_expense_summary(&project, &style),
            ReportKind::Payments => render_payment_summary(&project, &style, today),
            ReportKind::Sales => render_sale_summary(&project, &style),
            ReportKind::Overview => render_overview(&project, &style),
        };
        println!("{rendered}");
    }
    Ok(())
}
