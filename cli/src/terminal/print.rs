use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 56;

/// Prints a centered `⟦ … ⟧` section header padded with dashes.
pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let msg_width: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_width);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    println!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.color(colors::HEADER),
        "─".repeat(right).color(colors::SEPARATOR),
    );
}

/// Prints key/value details as right-aligned rows.
///
/// Keys are padded before coloring so ANSI escapes never skew the
/// alignment.
pub fn as_rows(details: &[(String, ColoredString)]) {
    let key_width: usize = details
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    for (key, value) in details {
        let padded: String = format!("{key:>key_width$}");
        println!("  {}  {}", padded.color(colors::KEY), value);
    }
}
