use crate::card::Hand;
use crate::scoring::outcome::{Outcome, Split, NIU_NIU};
use crate::scoring::selector::select_best;
use tracing::trace;

/// All C(5,3) ways to choose the trio, in lexicographic order
pub const SPLITS: [Split; 10] = [
    Split { trio: [0, 1, 2], pair: [3, 4] },
    Split { trio: [0, 1, 3], pair: [2, 4] },
    Split { trio: [0, 1, 4], pair: [2, 3] },
    Split { trio: [0, 2, 3], pair: [1, 4] },
    Split { trio: [0, 2, 4], pair: [1, 3] },
    Split { trio: [0, 3, 4], pair: [1, 2] },
    Split { trio: [1, 2, 3], pair: [0, 4] },
    Split { trio: [1, 2, 4], pair: [0, 3] },
    Split { trio: [1, 3, 4], pair: [0, 2] },
    Split { trio: [2, 3, 4], pair: [0, 1] },
];

/// Rank of a pair: its sum mod 10, with 0 promoted to Niu Niu
pub fn pair_score(pair_sum: u32) -> u8 {
    match (pair_sum % 10) as u8 {
        0 => NIU_NIU,
        score => score,
    }
}

/// Score one split, or None when the trio is not a multiple of ten
pub fn score_split(hand: &Hand, split: &Split) -> Option<Outcome> {
    let trio = split.trio.map(|i| hand.value(i));
    let pair = split.pair.map(|i| hand.value(i));

    let trio_sum: u32 = trio.iter().map(|&v| u32::from(v)).sum();
    if trio_sum % 10 != 0 {
        return None;
    }

    let pair_sum: u32 = pair.iter().map(|&v| u32::from(v)).sum();
    Some(Outcome {
        score: pair_score(pair_sum),
        is_double: pair[0] == pair[1],
        trio,
        pair,
        split: *split,
    })
}

/// Best split of a single concrete hand (no 3/6 substitution)
pub fn evaluate_hand(hand: &Hand) -> Option<Outcome> {
    let qualifying = SPLITS.iter().filter_map(|split| {
        let outcome = score_split(hand, split)?;
        trace!(
            hand = %hand,
            trio = ?outcome.trio,
            pair = ?outcome.pair,
            score = outcome.score,
            "qualifying split"
        );
        Some(outcome)
    });
    select_best(qualifying, |o| Some(o))
}
