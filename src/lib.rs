//! Mars Rover Navigator
//!
//! Simulates rovers driving across a rectangular plateau.
//!
//! This library provides:
//! - Strict parsing and validation of the plateau/rover input format
//! - A single boundary rule shared by validation and simulation
//! - Sequential, all-or-nothing simulation of every rover's orders
//! - Configuration management for the command-line front end

pub mod config;
pub mod error;
pub mod parser;
pub mod plateau;
pub mod rover;
pub mod simulation;

use std::path::Path;

// Re-exports for clean public API
pub use config::{Config, OutputFormat};
pub use error::{BoundsPhase, Error, FormatError, FormatErrorKind, OutOfBoundsError};
pub use parser::{ParseOptions, ParsedInput, parse_input, parse_input_with, read_input};
pub use plateau::is_within_bounds;
pub use rover::{Command, Heading, Order, OrderSequence, PlateauBounds, RoverState};
pub use simulation::simulate;

/// Parse input text and run every rover
pub fn navigate(text: &str, options: &ParseOptions) -> Result<Vec<RoverState>, Error> {
    let input = parse_input_with(text, options)?;
    Ok(simulate(&input.bounds, &input.commands)?)
}

/// Read an input file and run every rover
pub fn navigate_file(path: &Path, options: &ParseOptions) -> Result<Vec<RoverState>, Error> {
    let input = read_input(path, options)?;
    Ok(simulate(&input.bounds, &input.commands)?)
}
