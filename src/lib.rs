//! # symbios-turtle2d
//!
//! Deterministic Lindenmayer-system rewriting and 2D turtle interpretation.
//!
//! An [`LSystem`] rewrites its axiom generation by generation. The final string
//! is walked by a [`TurtleInterpreter`], which maps each symbol to the ops in its
//! [`Alphabet`] command and emits the drawn [`Segment`]s in order. Rendering is
//! left to whatever implements [`SegmentSink`].
//!
//! ```
//! use symbios_turtle2d::presets;
//!
//! let mut koch = presets::koch_curve().unwrap();
//! koch.iterate(2);
//! let drawing = koch.interpret().unwrap();
//! assert_eq!(drawing.len(), 25);
//! ```

pub mod alphabet;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod presets;
pub mod segment;
pub mod turtle;

pub use alphabet::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use segment::*;
pub use turtle::*;
