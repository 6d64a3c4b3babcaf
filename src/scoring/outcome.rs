use crate::card::Hand;
use serde::Serialize;

/// Rank awarded when the pair sums to a multiple of ten
pub const NIU_NIU: u8 = 10;

/// Positions of one 3-vs-2 partition of a hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Split {
    pub trio: [usize; 3],
    pub pair: [usize; 2],
}

/// Best qualifying split of one concrete hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Rank in [1, 10], 10 being Niu Niu
    pub score: u8,
    /// Both pair cards have the same value (pays double)
    pub is_double: bool,
    pub trio: [u8; 3],
    pub pair: [u8; 2],
    #[serde(skip)]
    pub split: Split,
}

impl Outcome {
    pub fn trio_sum(&self) -> u32 {
        self.trio.iter().map(|&v| u32::from(v)).sum()
    }

    pub fn pair_sum(&self) -> u32 {
        self.pair.iter().map(|&v| u32::from(v)).sum()
    }

    pub fn is_niu_niu(&self) -> bool {
        self.score == NIU_NIU
    }
}

/// Final answer for one input hand across every 3/6 substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestResult {
    /// None when no variant has a trio summing to a multiple of ten
    pub outcome: Option<Outcome>,
    /// Variant that produced the outcome, or the input hand when there is none
    pub used_variant: Hand,
}

impl BestResult {
    pub fn has_result(&self) -> bool {
        self.outcome.is_some()
    }

    /// True when the winning variant differs from the hand that was scored
    pub fn is_swapped(&self, original: &Hand) -> bool {
        self.has_result() && self.used_variant != *original
    }
}
