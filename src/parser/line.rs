//! Line Parsers
//!
//! One strict parser per line type. Errors carry no line number here;
//! the whole-input parser attaches it.

use crate::error::{FormatError, FormatErrorKind};
use crate::parser::lexer::{Token, TokenKind, tokenize_line, tokenize_spaced};
use crate::rover::{Heading, Order, OrderSequence, PlateauBounds, RoverState};

/// Parse the plateau line, e.g. "5 5" (exactly one space between the values)
pub fn parse_plateau_bounds(line: &str) -> Result<PlateauBounds, FormatError> {
    let tokens = expect_tokens(line, tokenize_spaced(line), 2)?;

    let max_x = parse_bound(&tokens[0])?;
    let max_y = parse_bound(&tokens[1])?;

    Ok(PlateauBounds::new(max_x, max_y))
}

/// Parse a rover position line, e.g. "1 2 N" (heading is case-insensitive)
pub fn parse_rover_position(line: &str) -> Result<RoverState, FormatError> {
    let tokens = expect_tokens(line, tokenize_line(line), 3)?;

    let x = parse_coordinate(&tokens[0])?;
    let y = parse_coordinate(&tokens[1])?;
    let heading: Heading = tokens[2].text.parse()?;

    Ok(RoverState::new(x, y, heading))
}

/// Parse an orders line, e.g. "LMLMM"; an empty line is zero orders
pub fn parse_order_sequence(line: &str) -> Result<OrderSequence, FormatError> {
    line.chars()
        .enumerate()
        .map(|(idx, c)| {
            Order::try_from(c).map_err(|ch| {
                FormatError::new(FormatErrorKind::InvalidOrder {
                    ch,
                    column: idx + 1,
                })
            })
        })
        .collect()
}

fn expect_tokens<'a>(
    line: &str,
    tokens: Vec<Token<'a>>,
    expected: usize,
) -> Result<Vec<Token<'a>>, FormatError> {
    if line.trim().is_empty() {
        return Err(FormatError::new(FormatErrorKind::EmptyLine));
    }
    if tokens.len() != expected {
        return Err(FormatError::new(FormatErrorKind::TokenCount {
            expected,
            found: tokens.len(),
        }));
    }

    Ok(tokens)
}

fn parse_coordinate(token: &Token<'_>) -> Result<i64, FormatError> {
    let invalid = || {
        FormatError::new(FormatErrorKind::InvalidInteger {
            token: token.text.to_string(),
        })
    };

    if token.kind != TokenKind::Integer {
        return Err(invalid());
    }
    token.text.parse().map_err(|_| invalid())
}

fn parse_bound(token: &Token<'_>) -> Result<u32, FormatError> {
    let value = parse_coordinate(token)?;
    u32::try_from(value).map_err(|_| {
        FormatError::new(FormatErrorKind::NegativeBound {
            token: token.text.to_string(),
        })
    })
}
