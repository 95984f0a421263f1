//! Binary codec, the bit-level notation every other one is a view of.
//!
//! Accepts both the flat 32-digit form ("110000001010…") and the dotted
//! display grouping ("11000000.10101000.00000001.00000001"). Output is
//! always the flat canonical form; regrouping for display is a caller
//! concern.

use crate::codec::parse_octet;
use crate::error::{ConvertError, Result};
use crate::octets::OctetQuadruple;

pub(crate) const NOTATION: &str = "binary";

const BIT_COUNT: usize = 32;

/// Parses a 32-bit binary string, with or without octet-group dots.
///
/// Dots are stripped first; what remains must be exactly 32 characters,
/// each '0' or '1'.
pub fn parse(input: &str) -> Result<OctetQuadruple> {
    let flat: String = input.chars().filter(|c| *c != '.').collect();

    if flat.len() != BIT_COUNT {
        return Err(ConvertError::format(
            NOTATION,
            format!("expected {BIT_COUNT} binary digits, got {}", flat.len()),
        ));
    }
    if let Some(bad) = flat.chars().find(|c| *c != '0' && *c != '1') {
        return Err(ConvertError::format(
            NOTATION,
            format!("'{bad}' is not a binary digit"),
        ));
    }

    let mut octets = [0u8; 4];
    for (idx, group) in flat.as_bytes().chunks(8).enumerate() {
        // Validated above, the group is pure ASCII '0'/'1'.
        let group = std::str::from_utf8(group)
            .map_err(|_| ConvertError::format(NOTATION, "non-ASCII input"))?;
        octets[idx] = parse_octet(group, 2, NOTATION)?;
    }

    let [a, b, c, d] = octets;
    Ok(OctetQuadruple::new(a, b, c, d))
}

/// Produces the flat 32-digit canonical form.
pub fn format(quad: &OctetQuadruple) -> String {
    quad.to_binary_flat()
}
