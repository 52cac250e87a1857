//! Ordered categorization rules mapping narration text to the category
//! taxonomy.
//!
//! The table is data, not code: an ordered list of {category, pattern} pairs
//! compiled to case-insensitive regexes. First match wins, so rule order is a
//! correctness decision: a fuel-station paybill must classify as Fuel, not
//! Pay Bill. The serializable spec form lets callers load an alternative
//! table from a file and test precedence without touching code.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::transaction::Category;

/// One ordered rule as written in a rules file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub category: Category,
    pub pattern: String,
}

/// Serializable form of a rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTableSpec {
    pub version: u32,
    pub rules: Vec<RuleSpec>,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    category: Category,
    pattern: String,
    regex: Regex,
}

/// Compiled, priority-ordered rule table.
#[derive(Debug, Clone)]
pub struct RuleTable {
    version: u32,
    rules: Vec<CompiledRule>,
}

impl RuleTable {
    /// Compile a spec into a usable table. Patterns compile case-insensitive;
    /// a pattern that fails to compile is an error, not a skipped rule.
    pub fn from_spec(spec: &RuleTableSpec) -> Result<Self> {
        let mut rules = Vec::with_capacity(spec.rules.len());
        for rule in &spec.rules {
            let regex = RegexBuilder::new(&rule.pattern)
                .case_insensitive(true)
                .build()
                .with_context(|| {
                    format!("compiling rule pattern for {:?}: {}", rule.category, rule.pattern)
                })?;
            rules.push(CompiledRule {
                category: rule.category,
                pattern: rule.pattern.clone(),
                regex,
            });
        }

        Ok(Self {
            version: spec.version,
            rules,
        })
    }

    /// Built-in table with the curated keyword sets.
    pub fn default_table() -> Self {
        Self::from_spec(&default_spec()).expect("built-in rule patterns compile")
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Serializable view of this table, preserving order and the original
    /// pattern strings.
    pub fn spec(&self) -> RuleTableSpec {
        RuleTableSpec {
            version: self.version,
            rules: self
                .rules
                .iter()
                .map(|r| RuleSpec {
                    category: r.category,
                    pattern: r.pattern.clone(),
                })
                .collect(),
        }
    }

    /// Classify one narration window. First matching rule in table order
    /// wins; no scoring, no ties. Empty or whitespace-only input falls
    /// through to `Other`.
    pub fn categorize(&self, description: &str) -> Category {
        let text = description.trim().to_lowercase();
        if text.is_empty() {
            return Category::Other;
        }

        for rule in &self.rules {
            if rule.regex.is_match(&text) {
                return rule.category;
            }
        }

        Category::Other
    }
}

/// Built-in rule data, priority order. Keyword sets are curated from real
/// mobile-money and bank narrations: named retailers sit next to generic
/// tokens so a branded fuel stop classifies as Fuel before its paybill
/// wording can match.
pub fn default_spec() -> RuleTableSpec {
    let rules: &[(Category, &str)] = &[
        (
            Category::Fuel,
            r"fuel|petroleum|gas|diesel|oil|petrol|shell|totalenergies|rubis|ola energy|kobil|kenolkobil|astrol|lake oil",
        ),
        (
            Category::Shopping,
            r"supermarket|quickmart|naivas|chandarana|tuskys|carrefour|magunas|clean shelf",
        ),
        (Category::Utilities, r"kplc|electric|prepaid|expressway|water"),
        (Category::AirtimeData, r"\bairtime\b|\bbundles?\b"),
        (Category::Betting, r"betika|sportpesa|odibet|jackpot"),
        (Category::PayBill, r"pay bill|paybill"),
        (Category::BuyGoods, r"buy goods|merchant payment|\btill\b"),
        (Category::AgentWithdrawal, r"withdraw|agent"),
        (
            Category::Income,
            r"\bpayment from\b|salary payment|business payment",
        ),
        (
            Category::LoanRepayment,
            r"mpesa overdraw|od loan repayment|overdraft",
        ),
        (Category::Credit, r"watu credit|platinum|\bmogo\b|momentum"),
    ];

    RuleTableSpec {
        version: 1,
        rules: rules
            .iter()
            .map(|(category, pattern)| RuleSpec {
                category: *category,
                pattern: (*pattern).to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_beats_pay_bill() {
        let table = RuleTable::default_table();
        // Matches both the Fuel and Pay Bill keyword sets; priority decides.
        let category = table.categorize("Pay Bill to SHELL WESTLANDS fuel station");
        assert_eq!(category, Category::Fuel);
    }

    #[test]
    fn test_empty_description_is_other() {
        let table = RuleTable::default_table();
        assert_eq!(table.categorize(""), Category::Other);
        assert_eq!(table.categorize("   "), Category::Other);
    }

    #[test]
    fn test_case_insensitive_match() {
        let table = RuleTable::default_table();
        assert_eq!(table.categorize("NAIVAS SUPERMARKET LTD"), Category::Shopping);
        assert_eq!(table.categorize("betika deposit"), Category::Betting);
    }

    #[test]
    fn test_loan_tokens_always_repayment() {
        let table = RuleTable::default_table();
        // Direction does not change the category; the taxonomy has a single
        // loan bucket.
        assert_eq!(table.categorize("OD Loan Repayment"), Category::LoanRepayment);
        assert_eq!(table.categorize("MPESA Overdraw"), Category::LoanRepayment);
        assert_eq!(table.categorize("overdraft interest"), Category::LoanRepayment);
    }

    #[test]
    fn test_custom_table_reorders_priority() {
        let spec = RuleTableSpec {
            version: 2,
            rules: vec![
                RuleSpec {
                    category: Category::PayBill,
                    pattern: "pay bill".to_string(),
                },
                RuleSpec {
                    category: Category::Fuel,
                    pattern: "fuel".to_string(),
                },
            ],
        };
        let table = RuleTable::from_spec(&spec).unwrap();
        assert_eq!(table.version(), 2);
        assert_eq!(table.categorize("pay bill fuel station"), Category::PayBill);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let spec = RuleTableSpec {
            version: 1,
            rules: vec![RuleSpec {
                category: Category::Fuel,
                pattern: "fuel(".to_string(),
            }],
        };
        assert!(RuleTable::from_spec(&spec).is_err());
    }

    #[test]
    fn test_spec_round_trips_through_json() {
        let spec = default_spec();
        let json = serde_json::to_string(&spec).unwrap();
        let back: RuleTableSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
        // And the round-tripped spec still compiles.
        let table = RuleTable::from_spec(&back).unwrap();
        assert_eq!(table.categorize("diesel top-up"), Category::Fuel);
    }
}
