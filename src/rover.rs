//! Rover Data Model
//!
//! Plain value types shared by the parser and the simulator.
//! No parsing of whole lines; the bounds rule itself lives in `plateau`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{FormatError, FormatErrorKind};
use crate::plateau::is_within_bounds;

/// Inclusive upper-right corner of the plateau; the lower-left corner is (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlateauBounds {
    pub max_x: u32,
    pub max_y: u32,
}

impl PlateauBounds {
    pub fn new(max_x: u32, max_y: u32) -> Self {
        Self { max_x, max_y }
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        is_within_bounds(x, y, self)
    }
}

impl fmt::Display for PlateauBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.max_x, self.max_y)
    }
}

/// Compass direction a rover faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Clockwise order; right turns step forward through it, left turns backward.
    pub const CLOCKWISE: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    /// Rotate 90 degrees clockwise
    pub fn right(self) -> Heading {
        Self::CLOCKWISE[(self.ordinal() + 1) % 4]
    }

    /// Rotate 90 degrees counter-clockwise
    pub fn left(self) -> Heading {
        Self::CLOCKWISE[(self.ordinal() + 3) % 4]
    }

    /// Unit step (dx, dy) taken by a move in this heading
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = FormatError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            _ => Err(FormatError::new(FormatErrorKind::InvalidHeading {
                token: c.to_string(),
            })),
        }
    }
}

impl FromStr for Heading {
    type Err = FormatError;

    /// Accepts exactly one letter, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Heading::try_from(c).map_err(|_| {
                FormatError::new(FormatErrorKind::InvalidHeading {
                    token: s.to_string(),
                })
            }),
            _ => Err(FormatError::new(FormatErrorKind::InvalidHeading {
                token: s.to_string(),
            })),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Heading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

/// A single movement order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    Move,
    TurnLeft,
    TurnRight,
}

impl Order {
    pub fn as_char(self) -> char {
        match self {
            Order::Move => 'M',
            Order::TurnLeft => 'L',
            Order::TurnRight => 'R',
        }
    }
}

impl TryFrom<char> for Order {
    type Error = char;

    /// Returns the rejected character on failure; the caller knows its column.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'M' => Ok(Order::Move),
            'L' => Ok(Order::TurnLeft),
            'R' => Ok(Order::TurnRight),
            _ => Err(c),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Ordered, possibly empty list of orders for one rover
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSequence {
    orders: Vec<Order>,
}

impl OrderSequence {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }
}

impl<'a> IntoIterator for &'a OrderSequence {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

impl FromIterator<Order> for OrderSequence {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Uppercase, e.g. "LMLMM"
impl fmt::Display for OrderSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for order in &self.orders {
            write!(f, "{}", order)?;
        }
        Ok(())
    }
}

/// Position and heading of a rover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoverState {
    pub x: i64,
    pub y: i64,
    pub heading: Heading,
}

impl RoverState {
    pub fn new(x: i64, y: i64, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// Advance one unit in the current heading
    pub fn apply_move(&mut self) {
        let (dx, dy) = self.heading.delta();
        self.x += dx;
        self.y += dy;
    }

    pub fn apply_turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    pub fn apply_turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    pub fn apply(&mut self, order: Order) {
        match order {
            Order::Move => self.apply_move(),
            Order::TurnLeft => self.apply_turn_left(),
            Order::TurnRight => self.apply_turn_right(),
        }
    }
}

/// Formats as `<x> <y> <heading>`, the output record format
impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.heading)
    }
}

/// One rover's starting state paired with its orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub start: RoverState,
    pub orders: OrderSequence,
}

impl Command {
    pub fn new(start: RoverState, orders: OrderSequence) -> Self {
        Self { start, orders }
    }
}
