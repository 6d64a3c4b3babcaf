use crate::card::{parse_hand, Hand, HandError, HAND_SIZE};
use crate::report::render;
use crate::scoring::solve;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Invalid hand at line {line}: {source}")]
    InvalidHand { line: usize, source: HandError },
}

const BANNER: &str = "\
╔══════════════════════════════════════╗
║         Niu Niu Calculator           ║
║     (3 ↔ 6 are interchangeable)      ║
║   K/J/Q = 10 · A = 1 · quit = exit   ║
╚══════════════════════════════════════╝
";

const PROMPT: &str = "Enter 5 cards separated by spaces (or 'quit' to exit): ";

/// Prompt for hands until `quit` or end of input, scoring each one
pub fn run_interactive<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{}", BANNER)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") {
            writeln!(output, "Goodbye!")?;
            return Ok(());
        }

        match parse_hand(trimmed) {
            Ok(hand) => {
                let best = solve(&hand);
                writeln!(output, "{}", render(&hand, &best))?;
            }
            Err(HandError::WrongCount { found, .. }) => {
                writeln!(
                    output,
                    "⚠  Expected {} cards, but got {}. Try again.\n",
                    HAND_SIZE, found
                )?;
            }
            Err(e) => {
                debug!(input = trimmed, error = %e, "rejected hand");
                writeln!(
                    output,
                    "⚠  Invalid input. Use numbers (1-10) or letters (K, J, Q, A).\n"
                )?;
            }
        }
    }
}

/// Parse hands from text, one per line
/// Blank lines and lines starting with # or // are skipped
pub fn parse_hand_lines(content: &str) -> Result<Vec<Hand>, BatchError> {
    let mut hands = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }

        let hand = parse_hand(trimmed).map_err(|source| BatchError::InvalidHand {
            line: line_num + 1,
            source,
        })?;
        hands.push(hand);
    }

    Ok(hands)
}

/// Read a hand file (see [`parse_hand_lines`] for the format)
pub fn read_hand_file(path: &str) -> Result<Vec<Hand>, BatchError> {
    let content = std::fs::read_to_string(path)?;
    parse_hand_lines(&content)
}
