//! Best-effort field extraction from bureau-report text.
//!
//! Report layout shifts across vendors and report versions, so each field is
//! pulled by an ordered chain of patterns tried in sequence, resolving to a
//! value or its sentinel, never an error. Fields resolve independently: a
//! missing score block does not block identity, employment, or account
//! extraction.

use anyhow::{bail, Result};
use regex::{Regex, RegexBuilder};
use sarafu_core::normalize_text;

use crate::report::{AccountSummary, BioData, BureauReport, CreditScores, Employment, NOT_FOUND};
use crate::risk::interpret_risk;

/// Extract a bureau report from decoded text.
///
/// `Err` only for empty input; every field otherwise defaults to its
/// sentinel.
pub fn extract_bureau_report(text: &str) -> Result<BureauReport> {
    if text.trim().is_empty() {
        bail!("bureau report text is empty");
    }
    let text = normalize_text(text);

    Ok(BureauReport {
        bio_data: extract_bio(&text)?,
        employment: extract_employment(&text)?,
        credit_scores: extract_scores(&text)?,
        account_summary: extract_accounts(&text)?,
    })
}

/// Try an ordered list of patterns; the first one whose first capture group
/// matches wins.
fn first_capture(text: &str, patterns: &[&str]) -> Result<Option<String>> {
    for pattern in patterns {
        let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        if let Some(m) = re.captures(text).and_then(|caps| caps.get(1)) {
            return Ok(Some(m.as_str().trim().to_string()));
        }
    }
    Ok(None)
}

fn extract_bio(text: &str) -> Result<BioData> {
    let name = first_capture(text, &[r"REPORTED NAMES:\s*(.*)"])?;
    let national_id = first_capture(
        text,
        &[r"NATIONAL ID\s*:\s*(\d+)", r"NATIONAL ID\s+(\d+)"],
    )?;

    Ok(BioData {
        name,
        national_id: national_id.unwrap_or_else(|| NOT_FOUND.to_string()),
    })
}

fn extract_employment(text: &str) -> Result<Employment> {
    let employer = first_capture(text, &[r"Employer\s*:\s*(.+)"])?;
    let department = first_capture(text, &[r"Department\s*:\s*(.+)"])?;
    let salary_raw = first_capture(
        text,
        &[r"Salary\s*:\s*(?:KES|KSH|K)?\s*([\d,]+(?:\.\d+)?)"],
    )?;
    let salary = salary_raw.and_then(|s| s.replace(',', "").parse::<f64>().ok());

    Ok(Employment {
        employer: employer.unwrap_or_else(|| NOT_FOUND.to_string()),
        salary,
        department: department.unwrap_or_else(|| NOT_FOUND.to_string()),
    })
}

fn extract_scores(text: &str) -> Result<CreditScores> {
    // Primary: the three values as bare tokens on consecutive lines, the
    // layout most vendors produce after text extraction.
    let triple_re = Regex::new(r"\n\s*(\d+)\s*\n\s*(M\d)\s*\n\s*(\d+\s?%)")?;

    let (metro, ppi, pd) = match triple_re.captures(text) {
        Some(caps) => (
            Some(caps[1].to_string()),
            Some(caps[2].to_string()),
            Some(caps[3].trim().to_string()),
        ),
        // Fallback: three independent labeled fields, each tolerating
        // whitespace or a line break between label and value.
        None => (
            first_capture(text, &[r"Metro-Score©?\s*\n?\s*(\d+)"])?,
            first_capture(text, &[r"PPI©?\s*\n?\s*(M\d)"])?,
            first_capture(text, &[r"Probability Of Default©?\s*\n?\s*(\d+\s?%)"])?,
        ),
    };

    let mut scores = CreditScores {
        metro_score: metro.and_then(|m| m.parse().ok()),
        ppi,
        probability_of_default: pd,
        interpretation: String::new(),
    };
    scores.interpretation = interpret_risk(&scores);

    Ok(scores)
}

fn extract_accounts(text: &str) -> Result<AccountSummary> {
    let counts_re = Regex::new(r"Total\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)")?;

    let mut summary = AccountSummary::default();
    if let Some(caps) = counts_re.captures(text) {
        summary.total_accounts = caps[1].parse().unwrap_or(0);
        summary.non_performing_accounts = caps[2].parse().unwrap_or(0);
        summary.performing_with_default_history = caps[3].parse().unwrap_or(0);
        summary.performing_without_default_history = caps[4].parse().unwrap_or(0);
    }

    // The balance figure may follow its label directly, or sit below the
    // column-header pair some vendors insert between the two.
    let balance = first_capture(
        text,
        &[
            r"Total Outstanding Balance\s*\n\s*Total Accounts\s*\n\s*([\d,]+\.\d+)",
            r"Total Outstanding Balance\s+([\d,]+\.\d+)",
        ],
    )?;
    summary.total_outstanding_balance = balance
        .and_then(|b| b.replace(',', "").parse().ok())
        .unwrap_or(0.0);

    Ok(summary)
}
