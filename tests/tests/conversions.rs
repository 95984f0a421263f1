//! End-to-end coverage of the conversion facade: round-trips through
//! every codec, cross-notation chains, boundary addresses and the
//! rejection policy.

use ipcast_core::codec::{binary, decimal, dotted_decimal, hex, octal};
use ipcast_core::{ConvertError, Notation, convert};
use ipcast_integration_tests::sample_quads;

#[test]
fn every_codec_round_trips() {
    for quad in sample_quads() {
        assert_eq!(dotted_decimal::parse(&dotted_decimal::format(&quad)), Ok(quad));
        assert_eq!(binary::parse(&binary::format(&quad)), Ok(quad));
        assert_eq!(hex::parse(&hex::format(&quad)), Ok(quad));
        assert_eq!(octal::parse(&octal::format(&quad)), Ok(quad));
        assert_eq!(decimal::parse(&decimal::format(&quad)), Ok(quad));
    }
}

#[test]
fn cross_notation_chain_preserves_the_address() -> anyhow::Result<()> {
    for quad in sample_quads() {
        let dotted = dotted_decimal::format(&quad);

        // dotted-decimal -> binary -> hex -> binary -> dotted-decimal
        let bin = convert::dotted_decimal_to_binary(&dotted)?;
        let hex_form = convert::binary_to_hex(&bin)?;
        let bin_again = convert::hex_to_binary(&hex_form)?;
        let dotted_again = convert::binary_to_dotted_decimal(&bin_again)?;

        assert_eq!(dotted_again, dotted);
    }
    Ok(())
}

#[test]
fn boundary_addresses() -> anyhow::Result<()> {
    assert_eq!(
        convert::dotted_decimal_to_binary("0.0.0.0")?,
        "0".repeat(32)
    );

    let all_ones = convert::dotted_decimal_to_binary("255.255.255.255")?;
    assert_eq!(all_ones, "1".repeat(32));
    assert_eq!(convert::binary_to_decimal(&all_ones)?, "4294967295");

    Ok(())
}

#[test]
fn canonical_example_reaches_every_notation() -> anyhow::Result<()> {
    let bin = convert::dotted_decimal_to_binary("192.168.1.1")?;
    assert_eq!(bin, "11000000101010000000000100000001");

    assert_eq!(convert::binary_to_hex(&bin)?, "c0.a8.01.01");
    assert_eq!(convert::binary_to_decimal(&bin)?, "3232235777");
    assert_eq!(convert::binary_to_octal(&bin)?, "300.250.001.001");
    assert_eq!(convert::binary_to_dotted_decimal(&bin)?, "192.168.1.1");

    // Each notation leads back to the same bits.
    assert_eq!(convert::hex_to_binary("c0.a8.01.01")?, bin);
    assert_eq!(convert::decimal_to_binary("3232235777")?, bin);
    assert_eq!(convert::octal_to_binary("300.250.001.001")?, bin);

    Ok(())
}

#[test]
fn displayed_values_feed_back_in_unchanged() -> anyhow::Result<()> {
    // The CLI shows binary in its dotted grouping; the parser takes it
    // straight back.
    let dotted_display = "11000000.10101000.00000001.00000001";
    assert_eq!(
        convert::binary_to_dotted_decimal(dotted_display)?,
        "192.168.1.1"
    );
    Ok(())
}

#[test]
fn rejection_policy() {
    assert!(matches!(
        convert::dotted_decimal_to_binary("256.0.0.1"),
        Err(ConvertError::Range { .. })
    ));
    assert!(matches!(
        convert::dotted_decimal_to_binary("1.2.3"),
        Err(ConvertError::Format { .. })
    ));
    assert!(matches!(
        convert::binary_to_hex(&"1".repeat(31)),
        Err(ConvertError::Format { .. })
    ));
    assert!(matches!(
        convert::binary_to_hex(&"1".repeat(33)),
        Err(ConvertError::Format { .. })
    ));
    assert!(matches!(
        convert::decimal_to_binary("4294967296"),
        Err(ConvertError::Range { .. })
    ));
    assert!(matches!(
        convert::octal_to_binary("400.0.0.1"),
        Err(ConvertError::Range { .. })
    ));
}

#[test]
fn hex_parsing_ignores_case() {
    let upper = Notation::Hex.parse_octets("C0.A8.01.01");
    let lower = Notation::Hex.parse_octets("c0.a8.01.01");
    assert!(upper.is_ok());
    assert_eq!(upper, lower);
}

#[test]
fn notation_tag_matches_the_codecs() {
    for quad in sample_quads() {
        for notation in Notation::all() {
            let rendered = notation.render(&quad);
            assert_eq!(notation.parse_octets(&rendered), Ok(quad));
        }
    }
}
