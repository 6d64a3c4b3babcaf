//! Rank distribution over every distinct hand
//!
//! A distinct hand is a multiset of five values in [1, 10], listed in
//! non-decreasing order. Order never changes a hand's score, so these
//! 2002 hands cover every possible deal.

use crate::card::{Hand, HAND_SIZE, MAX_VALUE, MIN_VALUE};
use crate::scoring::{BestResult, NIU_NIU};
use std::collections::HashMap;
use std::fmt;

/// Bucket a scored hand falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RankBucket {
    NoNiu,
    Points(u8),
    NiuNiu,
}

impl RankBucket {
    pub fn of(result: &BestResult) -> Self {
        match result.outcome {
            None => RankBucket::NoNiu,
            Some(o) if o.score == NIU_NIU => RankBucket::NiuNiu,
            Some(o) => RankBucket::Points(o.score),
        }
    }
}

impl fmt::Display for RankBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoNiu => write!(f, "No Niu"),
            Self::Points(n) => write!(f, "Niu {}", n),
            Self::NiuNiu => write!(f, "Niu Niu"),
        }
    }
}

/// Aggregate counts over a set of scored hands
#[derive(Debug, Default)]
pub struct DistributionResults {
    pub counts: HashMap<RankBucket, usize>,
    pub doubles: usize,
    pub swapped: usize,
    pub total: usize,
}

impl DistributionResults {
    /// Buckets sorted from worst to best
    pub fn sorted(&self) -> Vec<(RankBucket, usize)> {
        let mut buckets: Vec<_> = self.counts.iter().map(|(b, c)| (*b, *c)).collect();
        buckets.sort_by_key(|(b, _)| *b);
        buckets
    }
}

/// Every non-decreasing hand of five values in [1, 10]
pub fn all_hands() -> Vec<Hand> {
    fn extend(start: u8, current: &mut Vec<u8>, out: &mut Vec<Hand>) {
        if current.len() == HAND_SIZE {
            let mut values = [0u8; HAND_SIZE];
            values.copy_from_slice(current);
            out.push(Hand::from_valid(values));
            return;
        }
        for value in start..=MAX_VALUE {
            current.push(value);
            extend(value, current, out);
            current.pop();
        }
    }

    let mut hands = Vec::new();
    extend(MIN_VALUE, &mut Vec::with_capacity(HAND_SIZE), &mut hands);
    hands
}

/// Tally scored hands into rank buckets
pub fn aggregate_results(hands: &[Hand], results: &[BestResult]) -> DistributionResults {
    let mut dist = DistributionResults::default();

    for (hand, result) in hands.iter().zip(results) {
        *dist.counts.entry(RankBucket::of(result)).or_insert(0) += 1;
        if result.outcome.is_some_and(|o| o.is_double) {
            dist.doubles += 1;
        }
        if result.is_swapped(hand) {
            dist.swapped += 1;
        }
        dist.total += 1;
    }

    dist
}
