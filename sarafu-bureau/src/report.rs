//! Typed bureau-report fields with explicit "not found" sentinels.
//!
//! Every field a report may or may not carry resolves to a defined default
//! (`None`, "N/A", or zero) so downstream consumers can branch
//! deterministically instead of probing for missing keys.

use serde::{Deserialize, Serialize};

/// Sentinel for absent free-text fields.
pub const NOT_FOUND: &str = "N/A";

/// Identity block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioData {
    /// Reported full name; `None` when the report carries no name line.
    pub name: Option<String>,
    /// National ID digits, or "N/A".
    pub national_id: String,
}

impl Default for BioData {
    fn default() -> Self {
        Self {
            name: None,
            national_id: NOT_FOUND.to_string(),
        }
    }
}

/// Employment block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    pub employer: String,
    /// Monthly salary with separators and currency prefix stripped.
    pub salary: Option<f64>,
    pub department: String,
}

impl Default for Employment {
    fn default() -> Self {
        Self {
            employer: NOT_FOUND.to_string(),
            salary: None,
            department: NOT_FOUND.to_string(),
        }
    }
}

/// Score triple plus its narrative interpretation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreditScores {
    pub metro_score: Option<u32>,
    /// Repayment-performance code, M1 (best) through M9.
    pub ppi: Option<String>,
    /// Percentage string as printed in the report, e.g. "23%".
    pub probability_of_default: Option<String>,
    /// Risk narrative; empty when neither score sub-value was found.
    pub interpretation: String,
}

/// Account-history counts and outstanding balance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountSummary {
    pub total_accounts: u32,
    pub non_performing_accounts: u32,
    pub performing_with_default_history: u32,
    pub performing_without_default_history: u32,
    pub total_outstanding_balance: f64,
}

/// Everything extracted from one bureau report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BureauReport {
    pub bio_data: BioData,
    pub employment: Employment,
    pub credit_scores: CreditScores,
    pub account_summary: AccountSummary,
}
