//! Per-category aggregation of classified transactions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Sum and count for one category bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub label: String,
    pub total_amount: f64,
    pub count: usize,
}

/// Aggregated view of one document's transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub summaries: Vec<CategorySummary>,
    pub grand_total: f64,
}

/// Group transactions by display label, summing amounts and counting.
///
/// Grouping is order-independent and the output is sorted by label, so
/// repeated runs over the same input produce identical results.
pub fn aggregate(transactions: &[Transaction]) -> LedgerSummary {
    let mut buckets: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for txn in transactions {
        let entry = buckets.entry(txn.category_label()).or_insert((0.0, 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let grand_total = transactions.iter().map(|t| t.amount).sum();
    let summaries = buckets
        .into_iter()
        .map(|(label, (total_amount, count))| CategorySummary {
            label,
            total_amount,
            count,
        })
        .collect();

    LedgerSummary {
        summaries,
        grand_total,
    }
}
