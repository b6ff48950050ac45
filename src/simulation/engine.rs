//! Simulation Engine
//!
//! Runs each rover's orders in input order. Every starting position is
//! checked before any rover moves, and every executed order is followed
//! by a bounds check. The first violation aborts the whole run.

use log::{debug, info, trace};

use crate::error::{BoundsPhase, OutOfBoundsError};
use crate::plateau::is_within_bounds;
use crate::rover::{Command, PlateauBounds, RoverState};

/// Run every rover in order and return their final states
///
/// Fails without partial results if any starting position, or any
/// position reached along the way, is off the plateau.
pub fn simulate(
    bounds: &PlateauBounds,
    commands: &[Command],
) -> Result<Vec<RoverState>, OutOfBoundsError> {
    for (idx, command) in commands.iter().enumerate() {
        let start = command.start;
        if !is_within_bounds(start.x, start.y, bounds) {
            return Err(OutOfBoundsError {
                rover: idx + 1,
                x: start.x,
                y: start.y,
                heading: start.heading,
                phase: BoundsPhase::Start,
            });
        }
    }

    let mut finals = Vec::with_capacity(commands.len());
    for (idx, command) in commands.iter().enumerate() {
        finals.push(execute(bounds, idx + 1, command)?);
    }

    info!("Navigated {} rovers on plateau {}", finals.len(), bounds);
    Ok(finals)
}

/// Execute one rover's orders from its starting state
///
/// `rover` is the 1-based number used in error reports.
pub fn execute(
    bounds: &PlateauBounds,
    rover: usize,
    command: &Command,
) -> Result<RoverState, OutOfBoundsError> {
    let mut state = command.start;

    for (idx, &order) in command.orders.iter().enumerate() {
        state.apply(order);
        trace!("Rover {} order {} '{}' -> {}", rover, idx + 1, order, state);

        if !is_within_bounds(state.x, state.y, bounds) {
            return Err(OutOfBoundsError {
                rover,
                x: state.x,
                y: state.y,
                heading: state.heading,
                phase: BoundsPhase::Order {
                    index: idx + 1,
                    order,
                },
            });
        }
    }

    debug!("Rover {} finished at {}", rover, state);
    Ok(state)
}
