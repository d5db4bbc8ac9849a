use iplookup::view::memory::MemoryDocument;
use iplookup::view::surface::{ERROR, ERROR_MESSAGE, LOADING, RESULTS, RESULT_FIELDS};
use std::io::Write;

/// Name of the row of a result field, `None` for the ones printed without a label.
fn label(id: &str) -> Option<&'static str> {
    match id {
        "result-ip" => Some("IP"),
        "result-country" => Some("Country"),
        "result-iso-code" => Some("ISO code"),
        "result-in-eu" => Some("In EU"),
        "result-city" => Some("City"),
        "result-region" => Some("Region"),
        "result-latitude" => Some("Latitude"),
        "result-longitude" => Some("Longitude"),
        "result-timezone" => Some("Timezone"),
        "result-asn" => Some("ASN"),
        "result-organization" => Some("Organization"),
        "result-attribution" => None,
        other => {
            tracing::warn!("no label for element {other:?}");
            None
        }
    }
}

/// Writes the region currently visible in the document.
pub fn print_page<W: Write>(document: &MemoryDocument, out: &mut W) -> std::io::Result<()> {
    if document.is_visible(RESULTS) {
        let width = RESULT_FIELDS
            .iter()
            .filter_map(|id| label(id))
            .map(str::len)
            .max()
            .unwrap_or_default();
        for id in RESULT_FIELDS {
            let text = document.text(id).unwrap_or_default();
            match label(id) {
                Some(name) => writeln!(out, "{name:<width$}  {text}")?,
                // the attribution goes under the table, as is
                None => writeln!(out, "\n{text}")?,
            }
        }
    } else if document.is_visible(ERROR) {
        let message = document.text(ERROR_MESSAGE).unwrap_or_default();
        writeln!(out, "error: {message}")?;
    } else if document.is_visible(LOADING) {
        writeln!(out, "loading...")?;
    }
    out.flush()
}
