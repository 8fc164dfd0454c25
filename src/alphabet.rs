//! Symbol-to-command mapping used by the turtle interpreter.

use crate::error::Result;
use crate::turtle::TurtleOp;
use std::collections::BTreeMap;

/// Command text that marks a symbol as a pure grammar placeholder.
pub const PLACEHOLDER_COMMAND: &str = "0";

/// A symbol's command: the text it was configured with and the ops parsed from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    source: String,
    ops: Vec<TurtleOp>,
}

impl Command {
    /// Parses a space separated command string for `symbol`.
    pub fn parse(symbol: char, source: &str) -> Result<Self> {
        let mut ops = Vec::new();
        for token in source.split_whitespace() {
            if let Some(op) = TurtleOp::parse(symbol, token)? {
                ops.push(op);
            }
        }
        Ok(Self {
            source: source.to_string(),
            ops,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ops(&self) -> &[TurtleOp] {
        &self.ops
    }

    /// True when the command is exactly the placeholder literal `0`.
    pub fn is_placeholder(&self) -> bool {
        self.source == PLACEHOLDER_COMMAND
    }
}

/// Maps single-character symbols to turtle commands.
///
/// Commands are validated once here, so a typo such as `X9` is reported as
/// [`LSystemError::UnknownPrimitive`](crate::LSystemError::UnknownPrimitive)
/// before any rewriting or drawing happens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
    commands: BTreeMap<char, Command>,
}

impl Alphabet {
    /// Builds an alphabet from `(symbol, command)` pairs.
    ///
    /// A later pair for the same symbol replaces the earlier one.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: AsRef<str>,
    {
        let mut commands = BTreeMap::new();
        for (symbol, source) in entries {
            commands.insert(symbol, Command::parse(symbol, source.as_ref())?);
        }
        Ok(Self { commands })
    }

    pub fn get(&self, symbol: char) -> Option<&Command> {
        self.commands.get(&symbol)
    }

    /// Ops for `symbol`, or `None` if it has no entry (pass-through).
    pub fn ops(&self, symbol: char) -> Option<&[TurtleOp]> {
        self.commands.get(&symbol).map(Command::ops)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.commands.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates entries in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Command)> {
        self.commands.iter().map(|(&symbol, command)| (symbol, command))
    }

    /// Symbols whose command is the placeholder literal, in symbol order.
    pub fn placeholders(&self) -> impl Iterator<Item = char> + '_ {
        self.iter()
            .filter(|(_, command)| command.is_placeholder())
            .map(|(symbol, _)| symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LSystemError;

    #[test]
    fn parses_compound_commands_once() {
        let alphabet = Alphabet::new([('[', "P R+045"), (']', "p R-045")]).unwrap();
        assert_eq!(
            alphabet.ops('['),
            Some(&[TurtleOp::Push, TurtleOp::Rotate(45)][..])
        );
        assert_eq!(
            alphabet.ops(']'),
            Some(&[TurtleOp::Pop, TurtleOp::Rotate(-45)][..])
        );
        assert_eq!(alphabet.get('[').unwrap().source(), "P R+045");
    }

    #[test]
    fn placeholder_has_no_ops() {
        let alphabet = Alphabet::new([('X', "0"), ('F', "L10")]).unwrap();
        assert_eq!(alphabet.ops('X'), Some(&[][..]));
        assert_eq!(alphabet.placeholders().collect::<Vec<_>>(), vec!['X']);
        assert_eq!(alphabet.ops('Q'), None);
    }

    #[test]
    fn bad_token_fails_construction() {
        let err = Alphabet::new([('F', "L10"), ('G', "L10 X9")]).unwrap_err();
        assert_eq!(
            err,
            LSystemError::UnknownPrimitive {
                symbol: 'G',
                token: "X9".to_string()
            }
        );
    }
}
