//! Rover Simulation
//!
//! Sequential execution of rover orders with boundary enforcement.

pub mod engine;

pub use engine::{execute, simulate};
