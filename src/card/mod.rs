pub mod parse;
pub mod types;

pub use parse::{parse_card, parse_hand, parse_tokens, FACE_CARDS};
pub use types::{Hand, HandError, HAND_SIZE, MAX_VALUE, MIN_VALUE};
