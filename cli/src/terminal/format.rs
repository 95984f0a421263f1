use colored::*;

use crate::terminal::colors;
use ipcast_core::{Notation, OctetQuadruple};

/// Regroups a flat 32-digit binary string into the dotted 4x8 display
/// form. Display-only; the engine always emits and accepts the flat form.
pub fn dot_binary(flat: &str) -> String {
    flat.as_bytes()
        .chunks(8)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<&str>>()
        .join(".")
}

/// One display row per notation: label, rendered value, and whether the
/// row echoes the (normalized) source input.
pub fn notation_rows(source: Notation, octets: &OctetQuadruple) -> Vec<(&'static str, String, bool)> {
    Notation::all()
        .iter()
        .map(|notation| {
            let rendered = match notation {
                Notation::Binary => dot_binary(&notation.render(octets)),
                _ => notation.render(octets),
            };
            (row_label(notation), rendered, *notation == source)
        })
        .collect()
}

/// Colors the rows, highlighting the source notation so the echoed input
/// stands out.
pub fn notation_details(
    source: Notation,
    octets: &OctetQuadruple,
) -> Vec<(String, ColoredString)> {
    notation_rows(source, octets)
        .into_iter()
        .map(|(label, rendered, is_source)| {
            let value = if is_source {
                rendered.color(colors::SOURCE_VALUE).bold()
            } else {
                rendered.color(colors::VALUE)
            };
            (label.to_string(), value)
        })
        .collect()
}

fn row_label(notation: &Notation) -> &'static str {
    match notation {
        Notation::DottedDecimal => "Dotted",
        Notation::Binary => "Binary",
        Notation::Hex => "Hex",
        Notation::Octal => "Octal",
        Notation::Decimal => "Decimal",
    }
}
