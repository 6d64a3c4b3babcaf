use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of cards in a hand
pub const HAND_SIZE: usize = 5;

/// Lowest card value (Ace)
pub const MIN_VALUE: u8 = 1;

/// Highest card value (10, J, Q, K)
pub const MAX_VALUE: u8 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("Expected {expected} cards, but got {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("Invalid card '{0}': use numbers (1-10) or letters (K, J, Q, A)")]
    InvalidToken(String),
    #[error("Card value {0} is out of range (1-10)")]
    OutOfRange(i64),
}

/// Five card values, each in [1, 10]
///
/// Face cards and aces are already resolved to numbers; position only matters
/// for reporting which cards formed the trio and the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Hand([u8; HAND_SIZE]);

impl Hand {
    /// Build a hand, rejecting values outside [1, 10]
    pub fn new(values: [u8; HAND_SIZE]) -> Result<Self, HandError> {
        if let Some(&bad) = values.iter().find(|v| !(MIN_VALUE..=MAX_VALUE).contains(*v)) {
            return Err(HandError::OutOfRange(i64::from(bad)));
        }
        Ok(Hand(values))
    }

    /// Values already known to be in range (3/6 substitutions of a valid hand)
    pub(crate) fn from_valid(values: [u8; HAND_SIZE]) -> Self {
        debug_assert!(values.iter().all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));
        Hand(values)
    }

    pub fn values(&self) -> &[u8; HAND_SIZE] {
        &self.0
    }

    pub fn value(&self, position: usize) -> u8 {
        self.0[position]
    }
}

impl TryFrom<Vec<u8>> for Hand {
    type Error = HandError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        let found = values.len();
        let values: [u8; HAND_SIZE] = values.try_into().map_err(|_| HandError::WrongCount {
            expected: HAND_SIZE,
            found,
        })?;
        Hand::new(values)
    }
}

impl From<Hand> for Vec<u8> {
    fn from(hand: Hand) -> Self {
        hand.0.to_vec()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
