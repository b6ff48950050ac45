//! Rover Input Parser
//!
//! Strict validation of the line-oriented input format:
//!
//! ```text
//! <max_x> <max_y>
//! <x> <y> <heading>
//! <orders>
//! ...
//! ```
//!
//! Any malformed line aborts parsing with a [`FormatError`] naming the line.

pub mod lexer;
pub mod line;

use std::fs;
use std::path::Path;

use log::{debug, warn};

pub use lexer::{Token, TokenKind, tokenize_line};
pub use line::{parse_order_sequence, parse_plateau_bounds, parse_rover_position};

use crate::error::{FormatError, FormatErrorKind};
use crate::rover::{Command, PlateauBounds};

/// Knobs for whole-input parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject input that holds only the plateau line
    pub require_rovers: bool,
}

/// Validated contents of an input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub bounds: PlateauBounds,
    pub commands: Vec<Command>,
}

/// Pair up position and orders lines, in input order
pub fn parse_commands(lines: &[&str]) -> Result<Vec<Command>, FormatError> {
    parse_commands_from(lines, 1)
}

/// Same as [`parse_commands`] but numbering errors from `first_line`
fn parse_commands_from(lines: &[&str], first_line: usize) -> Result<Vec<Command>, FormatError> {
    if lines.len() % 2 != 0 {
        return Err(FormatError::new(FormatErrorKind::UnpairedCommandLines {
            count: lines.len(),
        }));
    }

    let mut commands = Vec::with_capacity(lines.len() / 2);

    for (pair_idx, pair) in lines.chunks_exact(2).enumerate() {
        let position_line = first_line + pair_idx * 2;

        let start = parse_rover_position(pair[0]).map_err(|e| e.at_line(position_line))?;
        let orders = parse_order_sequence(pair[1]).map_err(|e| e.at_line(position_line + 1))?;

        debug!(
            "Parsed rover {}: start {}, {} orders",
            pair_idx + 1,
            start,
            orders.len()
        );
        commands.push(Command::new(start, orders));
    }

    Ok(commands)
}

/// Parse full input text with default options
pub fn parse_input(text: &str) -> Result<ParsedInput, FormatError> {
    parse_input_with(text, &ParseOptions::default())
}

/// Parse full input text: a bounds line followed by position/orders pairs
pub fn parse_input_with(text: &str, options: &ParseOptions) -> Result<ParsedInput, FormatError> {
    let lines: Vec<&str> = text.lines().collect();

    if lines.is_empty() {
        return Err(FormatError::new(FormatErrorKind::EmptyInput));
    }
    if lines.len() % 2 == 0 {
        return Err(FormatError::new(FormatErrorKind::EvenLineCount {
            count: lines.len(),
        }));
    }

    let bounds = parse_plateau_bounds(lines[0]).map_err(|e| e.at_line(1))?;
    let commands = parse_commands_from(&lines[1..], 2)?;

    if commands.is_empty() {
        if options.require_rovers {
            return Err(FormatError::new(FormatErrorKind::NoRovers).at_line(1));
        }
        warn!("Input describes plateau {} but no rovers", bounds);
    }

    Ok(ParsedInput { bounds, commands })
}

/// Read and parse an input file
pub fn read_input(path: &Path, options: &ParseOptions) -> Result<ParsedInput, FormatError> {
    let text = fs::read_to_string(path).map_err(|e| {
        FormatError::new(FormatErrorKind::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })?;

    debug!("Read {} bytes from {}", text.len(), path.display());
    parse_input_with(&text, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rover::{Heading, RoverState};

    const SAMPLE: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n";

    #[test]
    fn test_parse_commands_pairs_lines() {
        let commands = parse_commands(&["1 2 N", "LMLMLMLMM", "3 3 E", "MMRMMRMRRM"]).unwrap();

        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].start, RoverState::new(1, 2, Heading::North));
        assert_eq!(commands[0].orders.to_string(), "LMLMLMLMM");
        assert_eq!(commands[1].start, RoverState::new(3, 3, Heading::East));
        assert_eq!(commands[1].orders.to_string(), "MMRMMRMRRM");
    }

    #[test]
    fn test_parse_commands_rejects_odd_count() {
        let err = parse_commands(&["1 2 N"]).unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::UnpairedCommandLines { count: 1 });
    }

    #[test]
    fn test_parse_input_sample() {
        let parsed = parse_input(SAMPLE).unwrap();
        assert_eq!(parsed.bounds, PlateauBounds::new(5, 5));
        assert_eq!(parsed.commands.len(), 2);
    }

    #[test]
    fn test_parse_input_empty() {
        let err = parse_input("").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::EmptyInput);
    }

    #[test]
    fn test_parse_input_even_line_count() {
        let err = parse_input("5 5\n1 2 N\n").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::EvenLineCount { count: 2 });
    }

    #[test]
    fn test_parse_input_empty_orders_line() {
        let parsed = parse_input("5 5\n0 0 N\n\n").unwrap();
        assert_eq!(parsed.commands.len(), 1);
        assert!(parsed.commands[0].orders.is_empty());
    }

    #[test]
    fn test_parse_input_reports_line_numbers() {
        let err = parse_input("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMD\n").unwrap_err();
        assert_eq!(err.line, Some(5));
        assert_eq!(err.kind, FormatErrorKind::InvalidOrder { ch: 'D', column: 5 });

        let err = parse_input("5 5\n1 2 Q\nM\n").unwrap_err();
        assert_eq!(err.line, Some(2));

        let err = parse_input("5.5\n1 2 N\nM\n").unwrap_err();
        assert_eq!(err.line, Some(1));
    }

    #[test]
    fn test_zero_rovers() {
        let parsed = parse_input("5 5\n").unwrap();
        assert!(parsed.commands.is_empty());

        let strict = ParseOptions {
            require_rovers: true,
        };
        let err = parse_input_with("5 5\n", &strict).unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::NoRovers);
    }

    #[test]
    fn test_parse_input_accepts_crlf() {
        let parsed = parse_input("5 5\r\n1 2 N\r\nM\r\n").unwrap();
        assert_eq!(parsed.commands[0].orders.to_string(), "M");
    }
}
