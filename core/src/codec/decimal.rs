//! Decimal-integer codec: the whole address as one base-10 number
//! ("3232235777").

use crate::error::{ConvertError, Result};
use crate::octets::OctetQuadruple;

pub(crate) const NOTATION: &str = "decimal";

/// Parses an unsigned integer in [0, 4294967295] and decomposes it into
/// four octets, most significant first.
///
/// The whole string must be ASCII digits; signs, whitespace and
/// underscores are rejected.
pub fn parse(input: &str) -> Result<OctetQuadruple> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConvertError::format(
            NOTATION,
            format!("'{input}' is not an unsigned integer literal"),
        ));
    }

    // The digit check above passed, so a parse failure can only be
    // overflow past u32::MAX.
    let value: u32 = input.parse().map_err(|_| {
        ConvertError::range(NOTATION, format!("'{input}' exceeds {}", u32::MAX))
    })?;

    Ok(OctetQuadruple::from(value))
}

/// Renders the 32-bit integer value as a decimal numeral.
pub fn format(quad: &OctetQuadruple) -> String {
    quad.to_u32().to_string()
}
