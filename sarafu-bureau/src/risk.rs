//! Risk narrative derived from the extracted score fields.

use crate::report::CreditScores;

/// Render a two-clause narrative from the score triple.
///
/// The score clause bins on [0,400), [400,600), [600,∞); the repayment
/// clause maps the M-code. Either clause is skipped when its source value
/// was not found; both missing yields an empty narrative, not an error.
pub fn interpret_risk(scores: &CreditScores) -> String {
    let mut narrative = String::new();

    if let Some(score) = scores.metro_score {
        if score < 400 {
            narrative.push_str("High Risk: Credit score indicates possible defaults.\n");
        } else if score < 600 {
            narrative.push_str("Medium Risk: Caution advised.\n");
        } else {
            narrative.push_str("Low Risk: Good credit standing.\n");
        }
    }

    if let Some(ppi) = scores.ppi.as_deref() {
        match ppi {
            "M1" | "M2" => narrative.push_str("Probable positive repayment behavior."),
            "M3" | "M4" | "M5" => narrative.push_str("Watch for occasional delays."),
            _ => narrative.push_str("Probable poor repayment trend."),
        }
    }

    narrative
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(metro: Option<u32>, ppi: Option<&str>) -> CreditScores {
        CreditScores {
            metro_score: metro,
            ppi: ppi.map(str::to_string),
            probability_of_default: None,
            interpretation: String::new(),
        }
    }

    #[test]
    fn test_score_bins_are_half_open() {
        assert!(interpret_risk(&scores(Some(399), None)).contains("High Risk"));
        assert!(interpret_risk(&scores(Some(400), None)).contains("Medium Risk"));
        assert!(interpret_risk(&scores(Some(599), None)).contains("Medium Risk"));
        assert!(interpret_risk(&scores(Some(600), None)).contains("Low Risk"));
    }

    #[test]
    fn test_ppi_clauses() {
        assert!(interpret_risk(&scores(None, Some("M2")))
            .contains("Probable positive repayment behavior."));
        assert!(interpret_risk(&scores(None, Some("M4")))
            .contains("Watch for occasional delays."));
        assert!(interpret_risk(&scores(None, Some("M8")))
            .contains("Probable poor repayment trend."));
    }

    #[test]
    fn test_both_clauses_concatenate() {
        let narrative = interpret_risk(&scores(Some(750), Some("M3")));
        assert_eq!(
            narrative,
            "Low Risk: Good credit standing.\nWatch for occasional delays."
        );
    }

    #[test]
    fn test_nothing_found_is_empty() {
        assert_eq!(interpret_risk(&scores(None, None)), "");
    }
}
