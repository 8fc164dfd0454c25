//! The rewriting engine: an axiom, production rules and the current generation.

use crate::alphabet::Alphabet;
use crate::error::{LSystemError, Result};
use crate::interpreter::{TurtleConfig, TurtleInterpreter};
use crate::segment::Drawing;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{debug, info};

/// Outcome of [`LSystem::compact`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactionReport {
    /// Symbol count before compaction.
    pub before: usize,
    /// Symbol count after compaction.
    pub after: usize,
}

impl CompactionReport {
    /// Fraction of symbols removed, in `0.0..=1.0`. Zero for an empty string.
    pub fn reduction(&self) -> f64 {
        if self.before == 0 {
            return 0.0;
        }
        1.0 - self.after as f64 / self.before as f64
    }
}

impl fmt::Display for CompactionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reduced from {} to {}, which is {:.2}% reduction.",
            self.before,
            self.after,
            self.reduction() * 100.0
        )
    }
}

/// One L-System run: immutable grammar plus the mutable current generation.
///
/// Rewriting is parallel: every generation is built from the previous string
/// as a whole into a fresh buffer, so text inserted during a pass is never
/// rescanned in that pass.
#[derive(Clone, Debug)]
pub struct LSystem {
    alphabet: Alphabet,
    axiom: String,
    rules: BTreeMap<char, String>,
    config: TurtleConfig,
    current: String,
    generation: usize,
}

impl LSystem {
    /// Creates a system at generation 0, starting at the origin with heading 90°.
    ///
    /// Fails with [`LSystemError::InvalidGrammar`] if `axiom` is empty.
    /// Symbols may appear in the axiom or rules without an alphabet entry;
    /// they are carried through rewriting and skipped when drawing.
    pub fn new<R, S>(alphabet: Alphabet, axiom: impl Into<String>, rules: R) -> Result<Self>
    where
        R: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let axiom = axiom.into();
        if axiom.is_empty() {
            return Err(LSystemError::InvalidGrammar("axiom is empty".to_string()));
        }

        let rules: BTreeMap<char, String> = rules
            .into_iter()
            .map(|(symbol, replacement)| (symbol, replacement.into()))
            .collect();

        Ok(Self {
            alphabet,
            current: axiom.clone(),
            axiom,
            rules,
            config: TurtleConfig::default(),
            generation: 0,
        })
    }

    /// Sets the initial heading in degrees (builder pattern).
    pub fn with_heading(mut self, degrees: i64) -> Self {
        self.config.start_heading = degrees;
        self
    }

    /// Sets the initial pen position (builder pattern).
    pub fn with_start(mut self, position: DVec2) -> Self {
        self.config.start_position = position;
        self
    }

    /// Replaces the whole start configuration (builder pattern).
    pub fn with_config(mut self, config: TurtleConfig) -> Self {
        self.config = config;
        self
    }

    /// Performs exactly one generation of substitution.
    pub fn rewrite_once(&mut self) {
        let mut next = String::with_capacity(self.current.len());
        for symbol in self.current.chars() {
            match self.rules.get(&symbol) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(symbol),
            }
        }
        self.current = next;
        self.generation += 1;
        debug!(
            generation = self.generation,
            length = self.current.len(),
            "rewrote L-System generation"
        );
    }

    /// Calls [`rewrite_once`](Self::rewrite_once) `generations` times.
    pub fn iterate(&mut self, generations: usize) {
        for _ in 0..generations {
            self.rewrite_once();
        }
    }

    /// Deletes every placeholder symbol (alphabet command `0`) from the
    /// current string.
    ///
    /// This is a plain deletion per placeholder symbol, in symbol order. It
    /// does not cancel opposing turns or any other pattern, and it leaves the
    /// generation counter alone. Drawing output is unchanged because
    /// placeholders have no ops.
    pub fn compact(&mut self) -> CompactionReport {
        let before = self.current.chars().count();
        for placeholder in self.alphabet.placeholders() {
            self.current.retain(|symbol| symbol != placeholder);
        }
        let report = CompactionReport {
            before,
            after: self.current.chars().count(),
        };
        info!(
            before = report.before,
            after = report.after,
            reduction = report.reduction(),
            "compacted L-System string"
        );
        report
    }

    /// Interprets the current generation with this system's alphabet and start.
    pub fn interpret(&self) -> Result<Drawing> {
        TurtleInterpreter::new(self.config).draw(&self.alphabet, &self.current)
    }

    /// Distinct symbols in the current string that have neither an alphabet
    /// entry nor a rule.
    ///
    /// Such symbols are silently skipped when drawing, which can hide typos.
    pub fn unmapped_symbols(&self) -> BTreeSet<char> {
        self.current
            .chars()
            .filter(|symbol| !self.alphabet.contains(*symbol) && !self.rules.contains_key(symbol))
            .collect()
    }

    /// The current generation string.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Number of rewrite passes applied so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn rules(&self) -> &BTreeMap<char, String> {
        &self.rules
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }
}

impl fmt::Display for LSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iteration: {}\n\t{}", self.generation, self.current)
    }
}
