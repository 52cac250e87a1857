//! sarafu-core: transaction taxonomy, categorization rules, and aggregation.

pub mod transaction;
pub mod rules;
pub mod aggregate;
pub mod normalize;

pub use transaction::{Transaction, Direction, Category, classify_transactions};
pub use rules::{RuleTable, RuleTableSpec, RuleSpec, default_spec};
pub use aggregate::{aggregate, CategorySummary, LedgerSummary};
pub use normalize::normalize_text;
