//! Error Types
//!
//! Two distinguishable failure kinds: malformed input and bounds violations.

use std::fmt::{self, Display};
use std::path::PathBuf;

use crate::rover::{Heading, Order};

/// What exactly was wrong with the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// A line that must hold tokens was empty or whitespace only
    EmptyLine,
    /// Wrong number of whitespace-separated tokens
    TokenCount { expected: usize, found: usize },
    /// A token that should be an integer is not
    InvalidInteger { token: String },
    /// A plateau bound was negative or too large
    NegativeBound { token: String },
    /// Heading token is not one of N, E, S, W
    InvalidHeading { token: String },
    /// Order character is not one of L, R, M (column is 1-based)
    InvalidOrder { ch: char, column: usize },
    /// The input file had no lines
    EmptyInput,
    /// The input must have an odd number of lines
    EvenLineCount { count: usize },
    /// Rover lines must come in position/orders pairs
    UnpairedCommandLines { count: usize },
    /// Only the bounds line was present and rovers are required
    NoRovers,
    /// The input file could not be read
    Unreadable { path: PathBuf, reason: String },
}

/// Malformed plateau line, position line, order line, or overall input shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// 1-based line number, when known
    pub line: Option<usize>,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub fn new(kind: FormatErrorKind) -> Self {
        Self { line: None, kind }
    }

    /// Attach a 1-based line number
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLine => write!(f, "line is empty"),
            Self::TokenCount { expected, found } => write!(
                f,
                "expected {} whitespace-separated values, found {}",
                expected, found
            ),
            Self::InvalidInteger { token } => write!(f, "'{}' is not an integer", token),
            Self::NegativeBound { token } => write!(
                f,
                "plateau bound '{}' must be a non-negative integer no larger than {}",
                token,
                u32::MAX
            ),
            Self::InvalidHeading { token } => {
                write!(f, "'{}' is not a heading, expected one of N, E, S, W", token)
            }
            Self::InvalidOrder { ch, column } => write!(
                f,
                "invalid order '{}' at column {}, orders must only contain L, R and M",
                ch.escape_default(),
                column
            ),
            Self::EmptyInput => write!(f, "input is empty, expected a plateau line"),
            Self::EvenLineCount { count } => write!(
                f,
                "expected an odd number of lines (bounds plus position/orders pairs), found {}",
                count
            ),
            Self::UnpairedCommandLines { count } => write!(
                f,
                "rover lines must come in position/orders pairs, found {} lines",
                count
            ),
            Self::NoRovers => write!(f, "input describes a plateau but no rovers"),
            Self::Unreadable { path, reason } => {
                write!(f, "cannot read '{}': {}", path.display(), reason)
            }
        }
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "format error on line {}: {}", line, self.kind),
            None => write!(f, "format error: {}", self.kind),
        }
    }
}

impl std::error::Error for FormatError {}

/// When a bounds violation was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsPhase {
    /// Pre-flight check of the starting position
    Start,
    /// After executing the order at this 1-based index
    Order { index: usize, order: Order },
}

/// A rover position lies outside the plateau
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBoundsError {
    /// 1-based rover number in input order
    pub rover: usize,
    pub x: i64,
    pub y: i64,
    pub heading: Heading,
    pub phase: BoundsPhase,
}

impl Display for OutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            BoundsPhase::Start => write!(
                f,
                "rover {} has an invalid starting position {} {} {}",
                self.rover, self.x, self.y, self.heading
            ),
            BoundsPhase::Order { index, order } => write!(
                f,
                "rover {} tried to move off the plateau to {} {} {} (order {} '{}')",
                self.rover, self.x, self.y, self.heading, index, order
            ),
        }
    }
}

impl std::error::Error for OutOfBoundsError {}

/// Any failure of a navigation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Format(FormatError),
    OutOfBounds(OutOfBoundsError),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(e) => write!(f, "{e}"),
            Self::OutOfBounds(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            Self::OutOfBounds(e) => Some(e),
        }
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl From<OutOfBoundsError> for Error {
    fn from(e: OutOfBoundsError) -> Self {
        Self::OutOfBounds(e)
    }
}
