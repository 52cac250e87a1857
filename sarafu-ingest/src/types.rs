use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Statement family detected for an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    #[serde(rename = "mobile-money")]
    MobileMoney,
    #[serde(rename = "bank")]
    Bank,
    #[serde(rename = "bureau")]
    Bureau,
    #[serde(rename = "unknown")]
    Unknown,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::MobileMoney => "mobile-money",
            DocumentKind::Bank => "bank",
            DocumentKind::Bureau => "bureau",
            DocumentKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Normalized output of ledger segmenters (family-agnostic), before
/// categorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Narration window joined into one line.
    pub description: String,
    /// Signed source amount: positive means inflow, negative means outflow.
    pub signed_amount: f64,
    /// Posting date (bank ledgers carry one; mobile-money records do not).
    pub date: Option<NaiveDate>,
}
