//! Dotted-decimal codec ("192.168.1.1").

use crate::codec::{parse_octet, split_quad};
use crate::error::Result;
use crate::octets::OctetQuadruple;

pub(crate) const NOTATION: &str = "dotted-decimal";

/// Parses four dot-separated base-10 octets.
///
/// Fields must be non-empty ASCII digits in [0,255]; leading zeros are
/// accepted ("010" is 10). Signs, whitespace and underscores are rejected.
pub fn parse(input: &str) -> Result<OctetQuadruple> {
    let [a, b, c, d] = split_quad(input, NOTATION)?;
    Ok(OctetQuadruple::new(
        parse_octet(a, 10, NOTATION)?,
        parse_octet(b, 10, NOTATION)?,
        parse_octet(c, 10, NOTATION)?,
        parse_octet(d, 10, NOTATION)?,
    ))
}

/// Joins the four octets with '.' in the familiar unpadded form.
pub fn format(quad: &OctetQuadruple) -> String {
    quad.to_string()
}
