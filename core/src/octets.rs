//! # Octet Model
//!
//! [`OctetQuadruple`] is the canonical intermediate form of the engine:
//! four 8-bit unsigned values, most significant first. Every codec parses
//! into it and formats out of it, so adding a notation never touches the
//! other notations.

use std::fmt;
use std::net::Ipv4Addr;

/// An IPv4 address as its four octets, in network order.
///
/// The `u8` fields make the [0,255] octet invariant unrepresentable to
/// violate; range checks happen at the parse sites that produce them.
/// Values are immutable, every parse builds a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OctetQuadruple {
    octets: [u8; 4],
}

impl OctetQuadruple {
    pub fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            octets: [a, b, c, d],
        }
    }

    /// The four octets, most significant first.
    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// The canonical bit-level form: each octet as exactly 8 zero-padded
    /// binary digits, concatenated in order. Always 32 characters, no
    /// separators.
    pub fn to_binary_flat(&self) -> String {
        let [a, b, c, d] = self.octets;
        format!("{a:08b}{b:08b}{c:08b}{d:08b}")
    }

    /// The whole address as one unsigned 32-bit integer
    /// (`a·2²⁴ + b·2¹⁶ + c·2⁸ + d`).
    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }
}

impl From<u32> for OctetQuadruple {
    fn from(value: u32) -> Self {
        Self {
            octets: value.to_be_bytes(),
        }
    }
}

impl From<Ipv4Addr> for OctetQuadruple {
    fn from(addr: Ipv4Addr) -> Self {
        Self {
            octets: addr.octets(),
        }
    }
}

impl From<OctetQuadruple> for Ipv4Addr {
    fn from(quad: OctetQuadruple) -> Self {
        Ipv4Addr::from(quad.octets)
    }
}

impl fmt::Display for OctetQuadruple {
    /// Renders the familiar dotted-decimal form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}
