use crate::card::{Hand, HAND_SIZE};
use std::collections::HashSet;

/// Values that may stand in for each other
pub const WILDCARDS: (u8, u8) = (3, 6);

/// Choices for one position, the card's own value first
fn options(value: u8) -> Vec<u8> {
    let (a, b) = WILDCARDS;
    if value == a {
        vec![a, b]
    } else if value == b {
        vec![b, a]
    } else {
        vec![value]
    }
}

/// Lazy Cartesian product of the per-position 3/6 choices
///
/// Positions are varied like an odometer, the last position fastest, so the
/// unmodified hand is always produced first. Already emitted hands are skipped.
pub struct Variants {
    options: [Vec<u8>; HAND_SIZE],
    cursor: [usize; HAND_SIZE],
    seen: HashSet<[u8; HAND_SIZE]>,
    done: bool,
}

impl Variants {
    pub fn new(hand: &Hand) -> Self {
        Variants {
            options: (*hand.values()).map(options),
            cursor: [0; HAND_SIZE],
            seen: HashSet::new(),
            done: false,
        }
    }

    fn current(&self) -> [u8; HAND_SIZE] {
        std::array::from_fn(|i| self.options[i][self.cursor[i]])
    }

    fn advance(&mut self) {
        for i in (0..HAND_SIZE).rev() {
            self.cursor[i] += 1;
            if self.cursor[i] < self.options[i].len() {
                return;
            }
            self.cursor[i] = 0;
        }
        self.done = true;
    }
}

impl Iterator for Variants {
    type Item = Hand;

    fn next(&mut self) -> Option<Hand> {
        while !self.done {
            let combo = self.current();
            self.advance();
            if self.seen.insert(combo) {
                return Some(Hand::from_valid(combo));
            }
        }
        None
    }
}

/// Every distinct hand reachable by swapping 3s and 6s, identity first
pub fn generate_variants(hand: &Hand) -> Variants {
    Variants::new(hand)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(values: [u8; 5]) -> Hand {
        Hand::new(values).unwrap()
    }

    #[test]
    fn test_no_wildcards_yields_identity_only() {
        let h = hand([10, 10, 10, 5, 5]);
        let variants: Vec<_> = generate_variants(&h).collect();
        assert_eq!(variants, vec![h]);
    }

    #[test]
    fn test_identity_comes_first() {
        let h = hand([6, 1, 3, 2, 6]);
        let first = generate_variants(&h).next();
        assert_eq!(first, Some(h));
    }

    #[test]
    fn test_product_order() {
        let h = hand([3, 1, 6, 2, 2]);
        let variants: Vec<_> = generate_variants(&h).map(|v| *v.values()).collect();
        assert_eq!(
            variants,
            vec![
                [3, 1, 6, 2, 2],
                [3, 1, 3, 2, 2],
                [6, 1, 6, 2, 2],
                [6, 1, 3, 2, 2],
            ]
        );
    }

    #[test]
    fn test_variant_count_and_uniqueness() {
        let h = hand([3, 3, 6, 6, 3]);
        let variants: Vec<_> = generate_variants(&h).collect();
        assert_eq!(variants.len(), 32);

        let unique: HashSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len(), "Variants should not repeat");
    }

    #[test]
    fn test_other_values_untouched() {
        let h = hand([3, 7, 6, 1, 10]);
        for v in generate_variants(&h) {
            assert_eq!(v.value(1), 7);
            assert_eq!(v.value(3), 1);
            assert_eq!(v.value(4), 10);
            assert!(matches!(v.value(0), 3 | 6));
            assert!(matches!(v.value(2), 3 | 6));
        }
    }
}
