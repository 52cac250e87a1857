//! Per-document pipeline: classify, segment, categorize, and aggregate for
//! ledgers; extract and interpret for bureau reports.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use sarafu_bureau::{extract_bureau_report, BureauReport};
use sarafu_core::{
    aggregate, classify_transactions, normalize_text, LedgerSummary, RuleTable, Transaction,
};
use sarafu_ingest::{classify_document, parsers, segment_ledger, DocumentKind};

/// One analyzed document, ready for rendering as text or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentAnalysis {
    pub path: String,
    pub kind: DocumentKind,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Outcome {
    Ledger {
        transactions: Vec<Transaction>,
        summary: LedgerSummary,
    },
    Bureau {
        report: BureauReport,
    },
    /// The classifier could not recognize the document. Surfaced as a
    /// per-document warning, never a batch failure.
    Unrecognized,
}

/// Run the full pipeline for one file. Stages run strictly in sequence;
/// parallelism lives across documents, not inside one.
pub async fn analyze_path(
    path: &Path,
    forced: Option<DocumentKind>,
    table: &RuleTable,
) -> Result<DocumentAnalysis> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let kind = forced.unwrap_or_else(|| classify_document(&filename, &text));
    let analysis = analyze_text(&filename, &text, kind, table)?;

    Ok(DocumentAnalysis {
        path: path.display().to_string(),
        ..analysis
    })
}

/// Pipeline over already-decoded text. Split out from the file wrapper so
/// tests and other front-ends can drive it directly.
pub fn analyze_text(
    filename: &str,
    text: &str,
    kind: DocumentKind,
    table: &RuleTable,
) -> Result<DocumentAnalysis> {
    let outcome = match kind {
        DocumentKind::MobileMoney | DocumentKind::Bank => {
            let raws = if kind == DocumentKind::MobileMoney && is_csv(filename) {
                parsers::mobile_money::segment_csv(text.as_bytes())?
            } else {
                segment_ledger(&normalize_text(text), kind)?
            };

            let transactions = classify_transactions(
                raws.into_iter().map(|r| (r.description, r.signed_amount)),
                table,
            );
            let summary = aggregate(&transactions);
            Outcome::Ledger {
                transactions,
                summary,
            }
        }
        DocumentKind::Bureau => Outcome::Bureau {
            report: extract_bureau_report(text)?,
        },
        DocumentKind::Unknown => Outcome::Unrecognized,
    };

    Ok(DocumentAnalysis {
        path: filename.to_string(),
        kind,
        outcome,
    })
}

fn is_csv(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Print one document's report in the plain-text layout.
pub fn render_text(doc: &DocumentAnalysis) {
    println!("== {} [{}]", doc.path, doc.kind);

    match &doc.outcome {
        Outcome::Ledger {
            transactions,
            summary,
        } => {
            println!("{} transactions", transactions.len());
            for s in &summary.summaries {
                println!("  {:<20} {:>14.2}  x{}", s.label, s.total_amount, s.count);
            }
            println!("  {:<20} {:>14.2}", "Total", summary.grand_total);
        }

        Outcome::Bureau { report } => {
            let name = report.bio_data.name.as_deref().unwrap_or("N/A");
            println!("Name:       {}", name);
            println!("National ID: {}", report.bio_data.national_id);
            println!(
                "Employer:   {} ({})",
                report.employment.employer, report.employment.department
            );
            match report.employment.salary {
                Some(salary) => println!("Salary:     {:.2}", salary),
                None => println!("Salary:     N/A"),
            }

            let scores = &report.credit_scores;
            println!(
                "Scores:     metro={} ppi={} default-probability={}",
                scores
                    .metro_score
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                scores.ppi.as_deref().unwrap_or("N/A"),
                scores.probability_of_default.as_deref().unwrap_or("N/A"),
            );
            if !scores.interpretation.is_empty() {
                for line in scores.interpretation.lines() {
                    println!("  {}", line);
                }
            }

            let accounts = &report.account_summary;
            println!(
                "Accounts:   {} total, {} non-performing, {} performing w/ defaults, {} clean",
                accounts.total_accounts,
                accounts.non_performing_accounts,
                accounts.performing_with_default_history,
                accounts.performing_without_default_history,
            );
            println!(
                "Outstanding: {:.2}",
                accounts.total_outstanding_balance
            );
        }

        Outcome::Unrecognized => {
            println!("  document type not recognized");
        }
    }
}
