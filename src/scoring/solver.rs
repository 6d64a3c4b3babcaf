use crate::card::Hand;
use crate::scoring::outcome::BestResult;
use crate::scoring::selector::select_best;
use crate::scoring::split::evaluate_hand;
use crate::scoring::variants::generate_variants;
use rayon::prelude::*;
use tracing::debug;

/// Find the best Niu Niu outcome for a hand, trying every 3/6 substitution
///
/// Never fails: a hand with no qualifying trio in any variant comes back with
/// `outcome: None` and the input hand as `used_variant`.
pub fn solve(hand: &Hand) -> BestResult {
    let scored = generate_variants(hand).map(|variant| {
        let outcome = evaluate_hand(&variant);
        if let Some(o) = &outcome {
            debug!(%variant, score = o.score, is_double = o.is_double, "variant qualifies");
        }
        (variant, outcome)
    });

    match select_best(scored, |(_, outcome)| outcome.as_ref()) {
        Some((variant, outcome)) => {
            debug!(%hand, used = %variant, "best variant selected");
            BestResult {
                outcome,
                used_variant: variant,
            }
        }
        None => BestResult {
            outcome: None,
            used_variant: *hand,
        },
    }
}

/// Score many hands in parallel; results keep the input order
pub fn solve_many(hands: &[Hand]) -> Vec<BestResult> {
    hands.par_iter().map(solve).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(values: [u8; 5]) -> Hand {
        Hand::new(values).unwrap()
    }

    #[test]
    fn test_no_substitution_needed() {
        let h = hand([10, 10, 10, 5, 5]);
        let best = solve(&h);
        let outcome = best.outcome.expect("Should have a result");
        assert_eq!(outcome.score, 10);
        assert!(outcome.is_double);
        assert_eq!(best.used_variant, h);
    }

    #[test]
    fn test_tie_keeps_identity_variant() {
        let h = hand([1, 2, 3, 4, 6]);
        let best = solve(&h);
        let outcome = best.outcome.unwrap();
        assert_eq!(outcome.score, 6);
        assert!(!outcome.is_double);
        assert_eq!(outcome.trio, [1, 3, 6]);
        assert_eq!(outcome.pair, [2, 4]);
        assert_eq!(best.used_variant, h);
        assert!(!best.is_swapped(&h));
    }

    #[test]
    fn test_no_niu_returns_original() {
        let h = hand([1, 1, 1, 1, 1]);
        let best = solve(&h);
        assert!(!best.has_result());
        assert_eq!(best.used_variant, h);
    }

    #[test]
    fn test_swap_unlocks_result() {
        // 1+1+3+3 never makes ten, 1+3+6 does
        let h = hand([1, 1, 1, 3, 3]);
        let best = solve(&h);
        let outcome = best.outcome.expect("Swapping a 3 should give a trio");
        assert_eq!(outcome.trio, [1, 3, 6]);
        assert_eq!(outcome.pair, [1, 1]);
        assert!(outcome.is_double);
        assert_eq!(outcome.score, 2);
        assert!(best.is_swapped(&h));
        assert_eq!(best.used_variant.values(), &[1, 1, 1, 3, 6]);
    }

    #[test]
    fn test_swap_raises_score() {
        let h = hand([1, 1, 1, 3, 8]);
        let best = solve(&h);
        let outcome = best.outcome.unwrap();
        assert_eq!(outcome.score, 7);
        assert!(!outcome.is_double);
        assert_eq!(outcome.pair, [1, 6]);
        assert_eq!(best.used_variant.values(), &[1, 1, 1, 6, 8]);
    }

    #[test]
    fn test_double_variant_beats_higher_identity() {
        // Unswapped scores 9 with (3,6); swapping the 6 gives a (3,3) double worth 6
        let h = hand([1, 1, 3, 6, 8]);
        let identity = evaluate_hand(&h).unwrap();
        assert_eq!(identity.score, 9);
        assert!(!identity.is_double);

        let best = solve(&h);
        let outcome = best.outcome.unwrap();
        assert_eq!(outcome.score, 6);
        assert!(outcome.is_double);
        assert_eq!(outcome.pair, [3, 3]);
        assert_eq!(best.used_variant.values(), &[1, 1, 3, 3, 8]);
    }

    #[test]
    fn test_solve_many_keeps_order() {
        let hands = vec![
            hand([1, 1, 1, 1, 1]),
            hand([10, 10, 10, 5, 5]),
            hand([1, 2, 3, 4, 6]),
        ];
        let results = solve_many(&hands);
        assert_eq!(results.len(), 3);
        for (h, r) in hands.iter().zip(&results) {
            assert_eq!(*r, solve(h));
        }
    }
}
