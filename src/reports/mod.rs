//! Presentation layer: styling, tables, and report renderers.
//!
//! Everything here consumes the summary records produced by the ledger;
//! nothing feeds back into it.

pub mod dates;
pub mod format;
pub mod render;
pub mod style;
pub mod table;

pub use render::{
    render_expense_summary, render_overview, render_partner_summary, render_payment_summary,
    render_sale_summary,
};
pub use style::ReportStyle;
