//! # Conversion Facade
//!
//! Public parse-then-format entry points, one per notation pair callers
//! need. Every operation is exactly `target::format(&source::parse(s)?)`;
//! none carries conversion logic of its own, so a new notation costs one
//! codec module, not a new row of pairwise functions.
//!
//! Binary output is always the flat 32-digit canonical form; the dotted
//! display grouping is left to the caller.

use tracing::trace;

use crate::codec::{binary, decimal, dotted_decimal, hex, octal};
use crate::error::Result;

/// "192.168.1.1" -> "11000000101010000000000100000001"
pub fn dotted_decimal_to_binary(input: &str) -> Result<String> {
    trace!(input, "converting dotted-decimal to binary");
    Ok(binary::format(&dotted_decimal::parse(input)?))
}

/// "c0.a8.01.01" -> "11000000101010000000000100000001"
pub fn hex_to_binary(input: &str) -> Result<String> {
    trace!(input, "converting hexadecimal to binary");
    Ok(binary::format(&hex::parse(input)?))
}

/// "3232235777" -> "11000000101010000000000100000001"
pub fn decimal_to_binary(input: &str) -> Result<String> {
    trace!(input, "converting decimal to binary");
    Ok(binary::format(&decimal::parse(input)?))
}

/// "300.250.001.001" -> "11000000101010000000000100000001"
pub fn octal_to_binary(input: &str) -> Result<String> {
    trace!(input, "converting octal to binary");
    Ok(binary::format(&octal::parse(input)?))
}

/// "11000000101010000000000100000001" -> "c0.a8.01.01"
pub fn binary_to_hex(input: &str) -> Result<String> {
    trace!(input, "converting binary to hexadecimal");
    Ok(hex::format(&binary::parse(input)?))
}

/// "11000000101010000000000100000001" -> "3232235777"
pub fn binary_to_decimal(input: &str) -> Result<String> {
    trace!(input, "converting binary to decimal");
    Ok(decimal::format(&binary::parse(input)?))
}

/// "11000000101010000000000100000001" -> "300.250.001.001"
pub fn binary_to_octal(input: &str) -> Result<String> {
    trace!(input, "converting binary to octal");
    Ok(octal::format(&binary::parse(input)?))
}

/// "11000000101010000000000100000001" -> "192.168.1.1"
pub fn binary_to_dotted_decimal(input: &str) -> Result<String> {
    trace!(input, "converting binary to dotted-decimal");
    Ok(dotted_decimal::format(&binary::parse(input)?))
}
