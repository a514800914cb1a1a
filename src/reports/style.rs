//! Visual styling for terminal reports.

use std::io::IsTerminal;

use colored::{Color, Colorize};

/// Controls how reports are decorated: colors, icons, and the currency
/// code used for money columns.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub horizontal: char,
    pub use_color: bool,
    pub use_icons: bool,
    pub plain_mode: bool,
    pub color_header: Option<Color>,
    pub currency: String,
}

impl ReportStyle {
    /// Detects terminal capabilities, honoring `NO_COLOR`.
    pub fn detect() -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::styled(stdout_tty && !no_color)
    }

    /// Undecorated output for piping and tests.
    pub fn plain() -> Self {
        Self {
            horizontal: '-',
            use_color: false,
            use_icons: false,
            plain_mode: true,
            color_header: None,
            currency: DEFAULT_CURRENCY.into(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    fn styled(use_color: bool) -> Self {
        Self {
            horizontal: '─',
            use_color,
            use_icons: true,
            plain_mode: false,
            color_header: if use_color {
                Some(Color::BrightBlue)
            } else {
                None
            },
            currency: DEFAULT_CURRENCY.into(),
        }
    }

    pub fn horizontal_line(&self, width: usize) -> String {
        self.horizontal.to_string().repeat(width.max(40))
    }

    pub fn apply_header_style(&self, text: &str) -> String {
        if self.use_color {
            match self.color_header {
                Some(color) => text.color(color).bold().to_string(),
                None => text.bold().to_string(),
            }
        } else {
            text.to_string()
        }
    }
}

/// Currency code of the source data set.
pub const DEFAULT_CURRENCY: &str = "SAR";
