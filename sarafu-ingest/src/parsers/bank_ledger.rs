//! Bank ledger statement segmenter (extracted text).
//!
//! Expected extracted-text shape: a record opens at a DD/MM/YYYY date line,
//! narration lines follow, and a totals line closes it:
//!   01/01/2024 SALARY PAYMENT
//!   ACME LTD JAN PAYROLL
//!   01/01/2024 -2,500.00 10,000.00CR 7,500.00CR
//!
//! The closing line carries the transaction amount and two running balances
//! with CR/DR suffixes.

use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;

use crate::types::RawTransaction;

fn parse_dd_mm_yyyy(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

/// Segment bank-ledger statement text into raw transactions.
///
/// A record that never reaches its closing amount line is discarded rather
/// than emitted half-filled; lines with malformed dates or amounts are
/// skipped and the scan continues.
pub fn segment_text(text: &str) -> Result<Vec<RawTransaction>> {
    let open_re = Regex::new(r"^\s*(\d{2}/\d{2}/\d{4})\b")?;
    let close_re = Regex::new(concat!(
        r"^\s*(?P<date>\d{2}/\d{2}/\d{4})\s+",
        r"(?P<amount>-?\d{1,3}(?:,\d{3})*\.\d{2})\s+",
        r"\d{1,3}(?:,\d{3})*\.\d{2}(?:CR|DR)\s+",
        r"\d{1,3}(?:,\d{3})*\.\d{2}(?:CR|DR)\s*$"
    ))?;

    let mut out = Vec::new();
    let mut window: Option<Vec<String>> = None;

    for line in text.lines() {
        if let Some(caps) = close_re.captures(line) {
            let Some(narration) = window.take() else {
                continue; // bare totals line with no open record
            };

            let signed_amount: f64 = match caps["amount"].replace(',', "").parse() {
                Ok(v) => v,
                Err(_) => continue,
            };

            out.push(RawTransaction {
                description: narration.join(" ").trim().to_string(),
                signed_amount,
                date: parse_dd_mm_yyyy(&caps["date"]),
            });
            continue;
        }

        let opens = open_re
            .captures(line)
            .is_some_and(|caps| parse_dd_mm_yyyy(&caps[1]).is_some());
        if opens {
            // A new record opens; an unclosed predecessor is dropped.
            window = Some(vec![line.trim().to_string()]);
        } else if let Some(narration) = window.as_mut() {
            narration.push(line.trim().to_string());
        }
    }

    Ok(out)
}
