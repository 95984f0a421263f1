//! Dotted-octal codec ("300.250.001.001").

use crate::codec::{parse_octet, split_quad};
use crate::error::Result;
use crate::octets::OctetQuadruple;

pub(crate) const NOTATION: &str = "octal";

/// Parses four dot-separated base-8 octets.
///
/// Fields may only contain digits 0-7 and must stay within [0,255]
/// ("377" is the largest valid field, "400" overflows).
pub fn parse(input: &str) -> Result<OctetQuadruple> {
    let [a, b, c, d] = split_quad(input, NOTATION)?;
    Ok(OctetQuadruple::new(
        parse_octet(a, 8, NOTATION)?,
        parse_octet(b, 8, NOTATION)?,
        parse_octet(c, 8, NOTATION)?,
        parse_octet(d, 8, NOTATION)?,
    ))
}

/// Joins four 3-digit, zero-padded octal octets with '.'.
pub fn format(quad: &OctetQuadruple) -> String {
    let [a, b, c, d] = quad.octets();
    format!("{a:03o}.{b:03o}.{c:03o}.{d:03o}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    #[test]
    fn test_parse_valid() {
        assert_eq!(
            parse("300.250.001.001"),
            Ok(OctetQuadruple::new(192, 168, 1, 1))
        );
        assert_eq!(
            parse("377.377.377.377"),
            Ok(OctetQuadruple::new(255, 255, 255, 255))
        );
        // Unpadded fields parse too.
        assert_eq!(parse("0.7.10.377"), Ok(OctetQuadruple::new(0, 7, 8, 255)));
    }

    #[test]
    fn test_parse_rejects_bad_digits() {
        assert!(matches!(
            parse("378.0.0.0"),
            Err(ConvertError::Format { .. })
        ));
        assert!(matches!(
            parse("300.250.001"),
            Err(ConvertError::Format { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(matches!(
            parse("400.0.0.0"),
            Err(ConvertError::Range { .. })
        ));
    }

    #[test]
    fn test_format_round_trip() {
        let quad = OctetQuadruple::new(192, 168, 1, 1);
        assert_eq!(format(&quad), "300.250.001.001");
        assert_eq!(parse(&format(&quad)), Ok(quad));
    }
}
