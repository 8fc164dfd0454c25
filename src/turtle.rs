//! Turtle state and primitive operations for 2D interpretation.

use crate::error::{LSystemError, Result};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// Heading is kept in whole degrees and is never wrapped, so a long run of
/// rotations accumulates exactly. It is only converted to radians when the
/// turtle actually moves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the pen.
    pub position: DVec2,

    /// Current heading in degrees, measured counter-clockwise from `+X`.
    pub heading: i64,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 90,
        }
    }
}

impl TurtleState {
    pub fn new(position: DVec2, heading: i64) -> Self {
        Self { position, heading }
    }

    /// Unit vector pointing along the current heading.
    pub fn forward(&self) -> DVec2 {
        DVec2::from_angle((self.heading as f64).to_radians())
    }

    /// Adds `degrees` to the heading.
    pub fn rotate(&mut self, degrees: i32) {
        self.heading += i64::from(degrees);
    }

    /// Moves `length` units forward and returns the `(from, to)` pair travelled.
    pub fn advance(&mut self, length: u32) -> (DVec2, DVec2) {
        let from = self.position;
        let to = from + self.forward() * f64::from(length);
        self.position = to;
        (from, to)
    }
}

/// Operations that can be performed by the turtle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Save position and heading onto the stack (`P`).
    Push,
    /// Restore the most recently saved position and heading (`p`).
    Pop,
    /// Turn by a signed number of degrees (`R+90`, `R-25`).
    Rotate(i32),
    /// Move forward, drawing a segment (`L10`).
    Move(u32),
}

impl TurtleOp {
    /// Parses one op-code token belonging to `symbol`'s command.
    ///
    /// Returns `Ok(None)` for the placeholder token `0`.
    pub fn parse(symbol: char, token: &str) -> Result<Option<Self>> {
        let unknown = || LSystemError::UnknownPrimitive {
            symbol,
            token: token.to_string(),
        };

        if token == "0" {
            return Ok(None);
        }

        let mut chars = token.chars();
        let op = match chars.next() {
            Some('P') if token.len() == 1 => TurtleOp::Push,
            Some('p') if token.len() == 1 => TurtleOp::Pop,
            Some('R') => TurtleOp::Rotate(chars.as_str().parse().map_err(|_| unknown())?),
            Some('L') => TurtleOp::Move(chars.as_str().parse().map_err(|_| unknown())?),
            _ => return Err(unknown()),
        };
        Ok(Some(op))
    }
}
