use crate::card::types::{Hand, HandError, HAND_SIZE, MAX_VALUE, MIN_VALUE};

/// Face letters and their values (case-insensitive)
pub const FACE_CARDS: &[(&str, u8)] = &[("k", 10), ("q", 10), ("j", 10), ("a", 1)];

/// Parse a single card token into its numeric value
/// K/Q/J count as 10, A counts as 1, anything else must be an integer in [1, 10]
pub fn parse_card(token: &str) -> Result<u8, HandError> {
    let lower = token.to_ascii_lowercase();
    if let Some(&(_, value)) = FACE_CARDS.iter().find(|(face, _)| *face == lower) {
        return Ok(value);
    }

    let value: i64 = token
        .parse()
        .map_err(|_| HandError::InvalidToken(token.to_string()))?;

    if value < i64::from(MIN_VALUE) || value > i64::from(MAX_VALUE) {
        return Err(HandError::OutOfRange(value));
    }
    Ok(value as u8)
}

/// Parse a whitespace-separated line of exactly five card tokens
pub fn parse_hand(line: &str) -> Result<Hand, HandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    parse_tokens(&tokens)
}

/// Parse already-split card tokens into a hand
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Hand, HandError> {
    if tokens.len() != HAND_SIZE {
        return Err(HandError::WrongCount {
            expected: HAND_SIZE,
            found: tokens.len(),
        });
    }

    let mut values = [0u8; HAND_SIZE];
    for (slot, token) in values.iter_mut().zip(tokens) {
        *slot = parse_card(token.as_ref())?;
    }
    Hand::new(values)
}
