//! Mobile-money ledger segmenter (extracted text and CSV export).
//!
//! Expected extracted-text shape, one record per status marker line:
//!   TJ7X9K2L4M 12/03/2024 14:22 Merchant Payment Completed -1,200.00
//!   SHELL WESTLANDS
//!   Fuel purchase
//!   TJ7X9K2L4N 12/03/2024 16:40 Funds received Completed 500.00
//!
//! A record's narration runs from its marker line to the next marker line,
//! however many lines that is; narrations are not a fixed number of lines.

use anyhow::Result;
use regex::Regex;

use crate::types::RawTransaction;

/// Line token that opens a transaction record.
const STATUS_MARKER: &str = "Completed";

/// Segment mobile-money statement text into raw transactions.
///
/// The amount sits on the marker line or spills onto the next; a record whose
/// amount never parses is skipped without aborting the scan.
pub fn segment_text(text: &str) -> Result<Vec<RawTransaction>> {
    // The gap is lazy so a leading minus binds to the amount, not the gap.
    let marker_amount_re = Regex::new(r"Completed[\s-]*?(-?\d{1,3}(?:,\d{3})*\.\d{2})")?;
    let amount_re = Regex::new(r"-?\d{1,3}(?:,\d{3})*\.\d{2}")?;

    let lines: Vec<&str> = text.lines().collect();
    let mut out = Vec::new();

    for (i, line) in lines.iter().copied().enumerate() {
        if !line.contains(STATUS_MARKER) {
            continue;
        }

        let amount_str = marker_amount_re
            .captures(line)
            .map(|caps| caps[1].to_string())
            .or_else(|| {
                lines
                    .get(i + 1)
                    .and_then(|next| amount_re.find(next))
                    .map(|m| m.as_str().to_string())
            });

        let amount_str = match amount_str {
            Some(s) => s,
            None => continue,
        };
        let signed_amount: f64 = match amount_str.replace(',', "").parse() {
            Ok(v) => v,
            Err(_) => continue,
        };

        let mut window: Vec<&str> = vec![line];
        for next in lines[i + 1..].iter().copied() {
            if next.contains(STATUS_MARKER) {
                break;
            }
            window.push(next);
        }

        out.push(RawTransaction {
            description: window.join(" ").trim().to_string(),
            signed_amount,
            date: None,
        });
    }

    Ok(out)
}

/// Parse the platform's CSV export.
///
/// Exports carry preamble rows before the header, so the header row is
/// scanned for rather than assumed first. Only completed rows are kept; the
/// signed amount is paid-in when present, otherwise negated withdrawn, and
/// rows where both are zero are dropped.
pub fn segment_csv<R: std::io::Read>(reader: R) -> Result<Vec<RawTransaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut out = Vec::new();
    let mut columns: Option<Columns> = None;

    for result in rdr.records() {
        let record = result?;

        let cols = match &columns {
            Some(cols) => cols,
            None => {
                columns = Columns::from_header(&record);
                continue;
            }
        };

        let status = record.get(cols.status).unwrap_or("").trim();
        if !status.eq_ignore_ascii_case("completed") {
            continue;
        }

        let paid_in = parse_amount(record.get(cols.paid_in).unwrap_or(""));
        let withdrawn = parse_amount(record.get(cols.withdrawn).unwrap_or(""));
        let signed_amount = if paid_in > 0.0 { paid_in } else { -withdrawn };
        if signed_amount == 0.0 {
            continue;
        }

        out.push(RawTransaction {
            description: record.get(cols.details).unwrap_or("").trim().to_string(),
            signed_amount,
            date: None,
        });
    }

    Ok(out)
}

struct Columns {
    status: usize,
    details: usize,
    paid_in: usize,
    withdrawn: usize,
}

impl Columns {
    fn from_header(record: &csv::StringRecord) -> Option<Self> {
        let find = |name: &str| {
            record
                .iter()
                .position(|field| field.trim().eq_ignore_ascii_case(name))
        };
        Some(Self {
            status: find("Transaction Status")?,
            details: find("Details")?,
            paid_in: find("Paid In")?,
            withdrawn: find("Withdrawn")?,
        })
    }
}

fn parse_amount(field: &str) -> f64 {
    field.trim().replace(',', "").parse().unwrap_or(0.0)
}
