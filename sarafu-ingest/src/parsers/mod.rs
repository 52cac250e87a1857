//! Family-specific ledger segmenters.

pub mod mobile_money;
pub mod bank_ledger;

use anyhow::{bail, Result};

use crate::types::{DocumentKind, RawTransaction};

/// Segment statement text into raw transactions for the given family.
///
/// Zero transactions is a valid empty result, distinct from `Err`; errors are
/// reserved for structurally fatal input (empty text, or a kind that has no
/// ledger protocol).
pub fn segment_ledger(text: &str, kind: DocumentKind) -> Result<Vec<RawTransaction>> {
    if text.trim().is_empty() {
        bail!("document text is empty");
    }

    match kind {
        DocumentKind::MobileMoney => mobile_money::segment_text(text),
        DocumentKind::Bank => bank_ledger::segment_text(text),
        DocumentKind::Bureau | DocumentKind::Unknown => {
            bail!("not a ledger document kind: {kind}")
        }
    }
}
