//! Relative-date labels for report rows.
//!
//! `today` is always injected by the caller; wall-clock time only enters
//! at the CLI boundary so reports stay deterministic under test.

use chrono::NaiveDate;

/// Human label for `date` relative to `today`, e.g. `3 days ago`.
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();
    if days == 0 {
        return "today".into();
    }
    if days == 1 {
        return "yesterday".into();
    }
    if days == -1 {
        return "tomorrow".into();
    }
    if days > 0 {
        match days {
            2..=29 => format!("{days} days ago"),
            30..=364 => plural(days / 30, "month", "ago"),
            _ => plural(days / 365, "year", "ago"),
        }
    } else {
        let ahead = -days;
        match ahead {
            2..=29 => format!("in {ahead} days"),
            30..=364 => format!("in {}", plural_bare(ahead / 30, "month")),
            _ => format!("in {}", plural_bare(ahead / 365, "year")),
        }
    }
}

fn plural(count: i64, unit: &str, suffix: &str) -> String {
    format!("{} {suffix}", plural_bare(count, unit))
}

fn plural_bare(count: i64, unit: &str) -> String {
    format!("{count} {unit}{}", if count == 1 { "" } else { "s" })
}
