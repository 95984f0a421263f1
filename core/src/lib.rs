//! # ipcast-core
//!
//! Pure conversion engine for rewriting an IPv4 address between its five
//! textual notations: dotted-decimal, binary (flat or octet-grouped),
//! dotted-hexadecimal, dotted-octal, and the plain 32-bit decimal integer.
//!
//! The crate is layered leaves-first:
//!
//! * **[`octets`]**: the canonical [`octets::OctetQuadruple`] every codec
//!   converts through.
//! * **[`codec`]**: one parse/format module per notation, plus the
//!   [`codec::Notation`] tag that selects one at runtime.
//! * **[`convert`]**: the public pairwise entry points, each a plain
//!   parse-then-format composition.
//!
//! Everything here is synchronous and side-effect-free; a conversion is a
//! pure function of its input string.

pub mod codec;
pub mod convert;
pub mod error;
pub mod octets;

pub use codec::Notation;
pub use error::{ConvertError, Result};
pub use octets::OctetQuadruple;
