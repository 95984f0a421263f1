//! Shared fixtures for the integration tests.

use ipcast_core::OctetQuadruple;

/// Quadruples exercising corner octets (zero, max, mixed) alongside
/// everyday addresses.
pub fn sample_quads() -> Vec<OctetQuadruple> {
    vec![
        OctetQuadruple::new(0, 0, 0, 0),
        OctetQuadruple::new(255, 255, 255, 255),
        OctetQuadruple::new(192, 168, 1, 1),
        OctetQuadruple::new(10, 0, 0, 1),
        OctetQuadruple::new(172, 16, 254, 3),
        OctetQuadruple::new(127, 0, 0, 1),
        OctetQuadruple::new(1, 2, 3, 4),
        OctetQuadruple::new(8, 8, 8, 8),
        OctetQuadruple::new(0, 255, 0, 255),
        OctetQuadruple::new(100, 64, 0, 200),
    ]
}
