//! Rendering of scored hands for the terminal and for JSON output

use crate::card::Hand;
use crate::scoring::BestResult;
use serde::Serialize;
use std::fmt;

const RULE_WIDTH: usize = 40;

/// Flat, serializable view of one scored hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandReport {
    pub hand: Hand,
    pub used_variant: Hand,
    pub swapped: bool,
    pub has_result: bool,
    pub score: Option<u8>,
    pub is_double: bool,
    pub trio: Option<[u8; 3]>,
    pub pair: Option<[u8; 2]>,
}

impl HandReport {
    pub fn new(hand: &Hand, best: &BestResult) -> Self {
        HandReport {
            hand: *hand,
            used_variant: best.used_variant,
            swapped: best.is_swapped(hand),
            has_result: best.has_result(),
            score: best.outcome.map(|o| o.score),
            is_double: best.outcome.is_some_and(|o| o.is_double),
            trio: best.outcome.map(|o| o.trio),
            pair: best.outcome.map(|o| o.pair),
        }
    }
}

/// Decorated text block describing the result for one hand
pub struct Rendered<'a> {
    hand: &'a Hand,
    best: &'a BestResult,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "  Hand: {}", self.hand)?;
        if self.best.is_swapped(self.hand) {
            writeln!(f, "  Used (3↔6 swap): {}", self.best.used_variant)?;
        }
        writeln!(f, "{}", rule)?;

        let Some(outcome) = &self.best.outcome else {
            return writeln!(f, "  ✗ No valid combination (No Niu)");
        };

        writeln!(f, "  ✓ Valid Niu combo found!")?;
        writeln!(
            f,
            "  Group of 3 (multiple of 10): {:?}  →  sum = {}",
            outcome.trio,
            outcome.trio_sum()
        )?;
        writeln!(
            f,
            "  Remaining pair:              {:?}  →  sum = {}",
            outcome.pair,
            outcome.pair_sum()
        )?;
        if outcome.is_double {
            writeln!(
                f,
                "  Double pair! ({} = {})  →  2× earning!",
                outcome.pair[0], outcome.pair[1]
            )?;
        }
        if outcome.is_niu_niu() {
            writeln!(f, "  Score: {}  (Niu Niu! Best possible!)", outcome.score)
        } else {
            writeln!(f, "  Score: {}", outcome.score)
        }
    }
}

pub fn render<'a>(hand: &'a Hand, best: &'a BestResult) -> Rendered<'a> {
    Rendered { hand, best }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::solve;

    fn hand(values: [u8; 5]) -> Hand {
        Hand::new(values).unwrap()
    }

    #[test]
    fn test_render_niu_niu_double() {
        let h = hand([10, 10, 10, 5, 5]);
        let text = render(&h, &solve(&h)).to_string();
        assert!(text.contains("Hand: [10, 10, 10, 5, 5]"));
        assert!(text.contains("[10, 10, 10]  →  sum = 30"));
        assert!(text.contains("[5, 5]  →  sum = 10"));
        assert!(text.contains("Double pair! (5 = 5)"));
        assert!(text.contains("Score: 10  (Niu Niu!"));
        assert!(!text.contains("swap"), "No swap line without substitution");
    }

    #[test]
    fn test_render_mentions_swap() {
        let h = hand([1, 1, 1, 3, 8]);
        let text = render(&h, &solve(&h)).to_string();
        assert!(text.contains("Used (3↔6 swap): [1, 1, 1, 6, 8]"));
        assert!(text.contains("Score: 7"));
        assert!(!text.contains("Double pair"));
    }

    #[test]
    fn test_render_no_niu() {
        let h = hand([1, 1, 1, 1, 1]);
        let text = render(&h, &solve(&h)).to_string();
        assert!(text.contains("No valid combination"));
        assert!(!text.contains("Score"));
        assert!(!text.contains("swap"));
    }

    #[test]
    fn test_report_json_fields() {
        let h = hand([1, 2, 3, 4, 6]);
        let report = HandReport::new(&h, &solve(&h));
        assert!(report.has_result);
        assert!(!report.swapped);
        assert_eq!(report.score, Some(6));
        assert_eq!(report.trio, Some([1, 3, 6]));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["hand"], serde_json::json!([1, 2, 3, 4, 6]));
        assert_eq!(json["pair"], serde_json::json!([2, 4]));
        assert_eq!(json["is_double"], serde_json::json!(false));
    }

    #[test]
    fn test_report_without_result() {
        let h = hand([1, 1, 1, 1, 1]);
        let report = HandReport::new(&h, &solve(&h));
        assert!(!report.has_result);
        assert_eq!(report.score, None);
        assert_eq!(report.used_variant, h);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["trio"].is_null());
    }
}
