use sarafu_bureau::{extract_bureau_report, interpret_risk};
use sarafu_core::{aggregate, classify_transactions, normalize_text, Direction, RuleTable};
use sarafu_ingest::{classify_document, segment_ledger, DocumentKind};

const MPESA_TEXT: &str = "\
TJ7X9K2L4M 12/03/2024 14:22 Merchant Payment Completed -1,200.00
SHELL WESTLANDS
fuel station shell
TJ7X9K2L4N 12/03/2024 16:40 Funds received Completed 500.00
unbranded narration";

const BANK_TEXT: &str = "\
ACCOUNT STATEMENT
01/01/2024 POS PURCHASE
NAIVAS SUPERMARKET LTD
01/01/2024 -2,500.00 10,000.00CR 7,500.00CR";

const CRB_TEXT: &str = "\
REPORTED NAMES: JOHN DOE
NATIONAL ID : 12345678
Metro-Score©   PPI©   Probability Of Default©
750
M3
23%";

/// Full mobile-money pipeline: classify, segment, categorize, aggregate.
#[test]
fn test_mobile_money_pipeline() {
    let kind = classify_document("MPESA_statement.txt", MPESA_TEXT);
    assert_eq!(kind, DocumentKind::MobileMoney);

    let raws = segment_ledger(&normalize_text(MPESA_TEXT), kind).unwrap();
    let table = RuleTable::default_table();
    let txns = classify_transactions(
        raws.into_iter().map(|r| (r.description, r.signed_amount)),
        &table,
    );

    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].amount, 1200.00);
    assert_eq!(txns[0].direction, Direction::Outflow);
    assert_eq!(txns[0].category_label(), "Fuel");
    assert_eq!(txns[1].amount, 500.00);
    assert_eq!(txns[1].direction, Direction::Inflow);
    assert_eq!(txns[1].category_label(), "Other (Inflow)");

    let summary = aggregate(&txns);
    let bucket_total: f64 = summary.summaries.iter().map(|s| s.total_amount).sum();
    let bucket_count: usize = summary.summaries.iter().map(|s| s.count).sum();
    assert_eq!(bucket_total, 1700.00);
    assert_eq!(bucket_count, 2);
    assert_eq!(summary.grand_total, 1700.00);
}

/// Bank pipeline: the statement marker classifies it, the totals line closes
/// the record, and the narration drives the category.
#[test]
fn test_bank_pipeline() {
    let kind = classify_document("january.txt", BANK_TEXT);
    assert_eq!(kind, DocumentKind::Bank);

    let raws = segment_ledger(&normalize_text(BANK_TEXT), kind).unwrap();
    assert_eq!(raws.len(), 1);

    let table = RuleTable::default_table();
    let txns = classify_transactions(
        raws.into_iter().map(|r| (r.description, r.signed_amount)),
        &table,
    );
    assert_eq!(txns[0].amount, 2500.00);
    assert_eq!(txns[0].direction, Direction::Outflow);
    assert_eq!(txns[0].category_label(), "Shopping");
}

/// Bureau pipeline: extraction plus the interpreted narrative.
#[test]
fn test_bureau_pipeline() {
    let kind = classify_document("crb_report.txt", CRB_TEXT);
    assert_eq!(kind, DocumentKind::Bureau);

    let report = extract_bureau_report(CRB_TEXT).unwrap();
    assert_eq!(report.bio_data.name.as_deref(), Some("JOHN DOE"));
    assert_eq!(report.credit_scores.metro_score, Some(750));
    assert_eq!(report.credit_scores.ppi.as_deref(), Some("M3"));
    assert_eq!(
        report.credit_scores.probability_of_default.as_deref(),
        Some("23%")
    );

    let narrative = interpret_risk(&report.credit_scores);
    assert!(narrative.contains("Low Risk: Good credit standing."));
    assert!(narrative.contains("Watch for occasional delays."));
    assert_eq!(narrative, report.credit_scores.interpretation);
}

/// Unknown documents surface as a distinct kind, not an error, so one bad
/// upload cannot fail a batch.
#[test]
fn test_unknown_document_kind() {
    let kind = classify_document("notes.txt", "nothing financial here");
    assert_eq!(kind, DocumentKind::Unknown);
}

/// Re-running the pipeline on identical text yields identical structured
/// output.
#[test]
fn test_pipeline_is_deterministic() {
    let table = RuleTable::default_table();

    let run = || {
        let raws = segment_ledger(&normalize_text(MPESA_TEXT), DocumentKind::MobileMoney).unwrap();
        let txns = classify_transactions(
            raws.into_iter().map(|r| (r.description, r.signed_amount)),
            &table,
        );
        let summary = aggregate(&txns);
        serde_json::to_string(&(txns, summary)).unwrap()
    };

    assert_eq!(run(), run());

    let bureau = || serde_json::to_string(&extract_bureau_report(CRB_TEXT).unwrap()).unwrap();
    assert_eq!(bureau(), bureau());
}

/// A ledger with no parseable records is a valid empty result, distinct from
/// an error.
#[test]
fn test_empty_result_is_not_an_error() {
    let raws = segment_ledger("no records in this text", DocumentKind::MobileMoney).unwrap();
    assert!(raws.is_empty());

    let txns = classify_transactions(
        raws.into_iter().map(|r| (r.description, r.signed_amount)),
        &RuleTable::default_table(),
    );
    let summary = aggregate(&txns);
    assert!(summary.summaries.is_empty());
    assert_eq!(summary.grand_total, 0.0);
}
