//! # Format Codecs
//!
//! One parse/format pair per supported notation. Each codec translates
//! between its textual form and the canonical [`OctetQuadruple`]; none of
//! them knows about any other notation.
//!
//! The shared helpers here enforce the dotted-form invariants (exactly
//! four non-empty fields, radix-checked digits, octets in [0,255]) so the
//! per-notation modules stay small.

pub mod binary;
pub mod decimal;
pub mod dotted_decimal;
pub mod hex;
pub mod octal;

use std::str::FromStr;

use crate::error::{ConvertError, Result};
use crate::octets::OctetQuadruple;

/// Identifies which textual form a string is in.
///
/// Used by callers to select a codec at runtime; implements [`FromStr`]
/// so it can sit directly in a clap argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    DottedDecimal,
    Binary,
    Hex,
    Octal,
    Decimal,
}

impl Notation {
    pub fn all() -> [Notation; 5] {
        [
            Notation::DottedDecimal,
            Notation::Binary,
            Notation::Hex,
            Notation::Octal,
            Notation::Decimal,
        ]
    }

    /// Human-readable notation name, also used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Notation::DottedDecimal => dotted_decimal::NOTATION,
            Notation::Binary => binary::NOTATION,
            Notation::Hex => hex::NOTATION,
            Notation::Octal => octal::NOTATION,
            Notation::Decimal => decimal::NOTATION,
        }
    }

    /// Parses `input` with the codec this tag selects.
    pub fn parse_octets(&self, input: &str) -> Result<OctetQuadruple> {
        match self {
            Notation::DottedDecimal => dotted_decimal::parse(input),
            Notation::Binary => binary::parse(input),
            Notation::Hex => hex::parse(input),
            Notation::Octal => octal::parse(input),
            Notation::Decimal => decimal::parse(input),
        }
    }

    /// Formats `quad` with the codec this tag selects.
    pub fn render(&self, quad: &OctetQuadruple) -> String {
        match self {
            Notation::DottedDecimal => dotted_decimal::format(quad),
            Notation::Binary => binary::format(quad),
            Notation::Hex => hex::format(quad),
            Notation::Octal => octal::format(quad),
            Notation::Decimal => decimal::format(quad),
        }
    }
}

impl FromStr for Notation {
    type Err = String;

    /// Accepts the full notation names and their short aliases
    /// (case-insensitive).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dotted" | "dotted-decimal" | "dd" => Ok(Notation::DottedDecimal),
            "binary" | "bin" | "b" => Ok(Notation::Binary),
            "hex" | "hexadecimal" | "x" => Ok(Notation::Hex),
            "octal" | "oct" | "o" => Ok(Notation::Octal),
            "decimal" | "dec" | "d" => Ok(Notation::Decimal),
            _ => Err(format!("unknown notation: {s}")),
        }
    }
}

/// Splits a dotted string into exactly four non-empty fields.
pub(crate) fn split_quad<'a>(input: &'a str, notation: &'static str) -> Result<[&'a str; 4]> {
    let fields: Vec<&str> = input.split('.').collect();
    if fields.len() != 4 {
        return Err(ConvertError::format(
            notation,
            format!("expected 4 dot-separated fields, got {}", fields.len()),
        ));
    }
    if let Some(position) = fields.iter().position(|field| field.is_empty()) {
        return Err(ConvertError::format(
            notation,
            format!("field {} is empty", position + 1),
        ));
    }
    Ok([fields[0], fields[1], fields[2], fields[3]])
}

/// Parses one dotted field as an octet in the given radix.
///
/// Any character outside the radix digit set ('+', '-', whitespace,
/// underscores included) is a `Format` error; a lexically valid numeral
/// above 255 is `Range`.
pub(crate) fn parse_octet(field: &str, radix: u32, notation: &'static str) -> Result<u8> {
    if !field.chars().all(|c| c.is_digit(radix)) {
        return Err(ConvertError::format(
            notation,
            format!("'{field}' is not a base-{radix} numeral"),
        ));
    }

    let value = u32::from_str_radix(field, radix).map_err(|_| {
        ConvertError::range(notation, format!("octet '{field}' is outside [0,255]"))
    })?;

    if value > u32::from(u8::MAX) {
        return Err(ConvertError::range(
            notation,
            format!("octet '{field}' is outside [0,255]"),
        ));
    }

    Ok(value as u8)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
