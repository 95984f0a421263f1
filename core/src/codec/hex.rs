//! Dotted-hexadecimal codec ("c0.a8.01.01").

use crate::codec::{parse_octet, split_quad};
use crate::error::{ConvertError, Result};
use crate::octets::OctetQuadruple;

pub(crate) const NOTATION: &str = "hexadecimal";

/// Parses four dot-separated hex octets of 1-2 digits each,
/// case-insensitive.
pub fn parse(input: &str) -> Result<OctetQuadruple> {
    let fields = split_quad(input, NOTATION)?;

    let mut octets = [0u8; 4];
    for (idx, field) in fields.iter().enumerate() {
        // Two hex digits cap the value at 0xff, so length is the only
        // range gate needed here.
        if field.len() > 2 {
            return Err(ConvertError::format(
                NOTATION,
                format!("'{field}' has more than 2 hex digits"),
            ));
        }
        octets[idx] = parse_octet(field, 16, NOTATION)?;
    }

    let [a, b, c, d] = octets;
    Ok(OctetQuadruple::new(a, b, c, d))
}

/// Joins four 2-digit, zero-padded, lowercase hex octets with '.'.
pub fn format(quad: &OctetQuadruple) -> String {
    let [a, b, c, d] = quad.octets();
    format!("{a:02x}.{b:02x}.{c:02x}.{d:02x}")
}
