use anyhow::Context;
use colored::ColoredString;
use tracing::info;

use crate::terminal::{format, print};
use ipcast_core::{Notation, OctetQuadruple};

type Detail = (String, ColoredString);

/// Parses `value` in the source notation and prints every notation of the
/// address, the source row highlighted.
///
/// On a parse failure nothing is written to the panel; the error
/// propagates out of `main` so no partial or default value ever shows up.
pub fn run(notation: Notation, value: &str) -> anyhow::Result<()> {
    let octets: OctetQuadruple = notation
        .parse_octets(value)
        .with_context(|| format!("cannot read '{value}' as {}", notation.label()))?;

    info!("parsed {} input successfully", notation.label());

    let details: Vec<Detail> = format::notation_details(notation, &octets);
    print::as_rows(&details);

    Ok(())
}
