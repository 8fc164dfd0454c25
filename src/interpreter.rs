//! Interpreter that walks a symbol string and emits the turtle's line segments.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], then call [`TurtleInterpreter::run`] to stream segments
//! into any [`SegmentSink`], or [`TurtleInterpreter::draw`] to collect them.
//! The free function [`interpret`] covers the common one-shot case.

use crate::alphabet::Alphabet;
use crate::error::{LSystemError, Result};
use crate::segment::{Drawing, Segment, SegmentSink};
use crate::turtle::{TurtleOp, TurtleState};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Starting configuration for interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Where the pen starts.
    pub start_position: DVec2,
    /// Initial heading in degrees. Default: 90 (pointing up `+Y`).
    pub start_heading: i64,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            start_position: DVec2::ZERO,
            start_heading: 90,
        }
    }
}

impl TurtleConfig {
    pub fn initial_state(&self) -> TurtleState {
        TurtleState::new(self.start_position, self.start_heading)
    }
}

/// What happened during one interpretation run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleSummary {
    /// Turtle state after the last symbol.
    pub final_state: TurtleState,
    /// Number of segments handed to the sink.
    pub segments: usize,
    /// Deepest the state stack got.
    pub max_depth: usize,
    /// Pushes that were never popped. Zero for a balanced string.
    pub open_branches: usize,
}

/// Interprets an L-System string as 2D turtle graphics.
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    config: TurtleConfig,
}

impl TurtleInterpreter {
    pub fn new(config: TurtleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Walks `symbols` in order and feeds every drawn segment to `sink`.
    ///
    /// Symbols without an alphabet entry are passed over with no effect.
    ///
    /// # Push / Pop
    ///
    /// `P` saves position and heading; `p` restores the latest save. A `p`
    /// with nothing saved fails with [`LSystemError::StackUnderflow`]. Saves
    /// left on the stack at the end are reported in
    /// [`TurtleSummary::open_branches`] and are not an error.
    pub fn run<S: SegmentSink + ?Sized>(
        &self,
        alphabet: &Alphabet,
        symbols: &str,
        sink: &mut S,
    ) -> Result<TurtleSummary> {
        let mut turtle = self.config.initial_state();
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut max_depth = 0;
        let mut segments = 0;
        let mut unmapped = BTreeSet::new();

        for (index, symbol) in symbols.chars().enumerate() {
            let Some(ops) = alphabet.ops(symbol) else {
                unmapped.insert(symbol);
                continue;
            };

            for op in ops {
                match *op {
                    TurtleOp::Push => {
                        stack.push(turtle);
                        max_depth = max_depth.max(stack.len());
                    }
                    TurtleOp::Pop => {
                        turtle = stack
                            .pop()
                            .ok_or(LSystemError::StackUnderflow { index, symbol })?;
                    }
                    TurtleOp::Rotate(degrees) => turtle.rotate(degrees),
                    TurtleOp::Move(length) => {
                        let (from, to) = turtle.advance(length);
                        sink.segment(Segment::new(from, to));
                        segments += 1;
                    }
                }
            }
        }

        if !unmapped.is_empty() {
            debug!(symbols = ?unmapped, "passed over symbols with no alphabet entry");
        }
        if !stack.is_empty() {
            warn!(open_branches = stack.len(), "interpretation ended with unclosed branches");
        }

        Ok(TurtleSummary {
            final_state: turtle,
            segments,
            max_depth,
            open_branches: stack.len(),
        })
    }

    /// Interprets `symbols` and collects the result into a [`Drawing`].
    pub fn draw(&self, alphabet: &Alphabet, symbols: &str) -> Result<Drawing> {
        let mut drawing = Drawing::new();
        self.run(alphabet, symbols, &mut drawing)?;
        Ok(drawing)
    }
}

/// Interprets `symbols` from the given start state and returns the segments in
/// drawing order.
///
/// This is a pure function of its inputs: identical arguments always produce
/// bit-identical segments.
pub fn interpret(
    alphabet: &Alphabet,
    symbols: &str,
    start_position: DVec2,
    start_heading: i64,
) -> Result<Vec<Segment>> {
    let interpreter = TurtleInterpreter::new(TurtleConfig {
        start_position,
        start_heading,
    });
    let mut segments = Vec::new();
    interpreter.run(alphabet, symbols, &mut segments)?;
    Ok(segments)
}
