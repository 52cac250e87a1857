//! Document-kind detection from filename and content hints.

use crate::types::DocumentKind;

/// Decide which pipeline applies to an uploaded document.
///
/// The mobile-money platform stamps its name on export filenames, so the
/// filename is checked first; content markers decide the rest. Never fails:
/// callers surface `Unknown` as a per-document warning, not a batch failure.
pub fn classify_document(filename: &str, text: &str) -> DocumentKind {
    if filename.to_lowercase().contains("mpesa") {
        return DocumentKind::MobileMoney;
    }

    let lower = text.to_lowercase();
    if lower.contains("statement") || lower.contains("ledger balance") {
        return DocumentKind::Bank;
    }

    if text.contains("REPORTED NAMES:") || text.contains("Metro-Score") {
        return DocumentKind::Bureau;
    }

    DocumentKind::Unknown
}
