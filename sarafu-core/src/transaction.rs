//! Classified transaction records shared across the statement pipeline.

use serde::{Deserialize, Serialize};

use crate::rules::RuleTable;

/// Whether money moved into or out of the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "inflow")]
    Inflow,
    #[serde(rename = "outflow")]
    Outflow,
}

/// Fixed category taxonomy for transaction narrations.
///
/// Matching priority lives in the rule table, not here; the enum is closed so
/// summaries and rules files agree on the same set of labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "fuel")]
    Fuel,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "utilities")]
    Utilities,
    #[serde(rename = "airtime-data")]
    AirtimeData,
    #[serde(rename = "betting")]
    Betting,
    #[serde(rename = "pay-bill")]
    PayBill,
    #[serde(rename = "buy-goods")]
    BuyGoods,
    #[serde(rename = "agent-withdrawal")]
    AgentWithdrawal,
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "loan-repayment")]
    LoanRepayment,
    #[serde(rename = "credit")]
    Credit,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    /// Bare category name as shown in summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Fuel => "Fuel",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::AirtimeData => "Airtime/Data",
            Category::Betting => "Betting",
            Category::PayBill => "Pay Bill",
            Category::BuyGoods => "Buy Goods",
            Category::AgentWithdrawal => "Agent Withdrawal",
            Category::Income => "Income",
            Category::LoanRepayment => "Loan Repayment",
            Category::Credit => "Credit",
            Category::Other => "Other",
        }
    }

    /// Display label. "Other" is qualified with the transaction direction so
    /// unclassified inflow and outflow never merge into one bucket.
    pub fn label(&self, direction: Direction) -> String {
        match self {
            Category::Other => match direction {
                Direction::Inflow => "Other (Inflow)".to_string(),
                Direction::Outflow => "Other (Outflow)".to_string(),
            },
            named => named.name().to_string(),
        }
    }
}

/// A classified ledger transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Narration window joined into one line.
    pub description: String,
    /// Non-negative magnitude; the sign lives in `direction`.
    pub amount: f64,
    pub direction: Direction,
    pub category: Category,
}

impl Transaction {
    /// Build a classified transaction from a raw signed record.
    ///
    /// Direction is fixed here from the source sign and never re-derived
    /// afterwards.
    pub fn from_signed(
        description: impl Into<String>,
        signed_amount: f64,
        table: &RuleTable,
    ) -> Self {
        let description = description.into();
        let direction = if signed_amount > 0.0 {
            Direction::Inflow
        } else {
            Direction::Outflow
        };
        let category = table.categorize(&description);

        Self {
            description,
            amount: signed_amount.abs(),
            direction,
            category,
        }
    }

    /// Direction-qualified display label for this transaction's category.
    pub fn category_label(&self) -> String {
        self.category.label(self.direction)
    }
}

/// Classify a batch of (description, signed amount) records in order.
pub fn classify_transactions<I, S>(raws: I, table: &RuleTable) -> Vec<Transaction>
where
    I: IntoIterator<Item = (S, f64)>,
    S: Into<String>,
{
    raws.into_iter()
        .map(|(description, signed)| Transaction::from_signed(description, signed, table))
        .collect()
}
