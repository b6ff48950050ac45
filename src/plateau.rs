//! Boundary Checker
//!
//! The single definition of "on the plateau", used both for starting
//! positions and after every executed order.

use crate::rover::PlateauBounds;

/// True iff `0 <= x <= max_x` and `0 <= y <= max_y`
pub fn is_within_bounds(x: i64, y: i64, bounds: &PlateauBounds) -> bool {
    (0..=i64::from(bounds.max_x)).contains(&x) && (0..=i64::from(bounds.max_y)).contains(&y)
}
