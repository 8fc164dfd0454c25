use thiserror::Error;

/// Errors returned while building or interpreting an L-System.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LSystemError {
    /// The grammar configuration is unusable (e.g. an empty axiom).
    #[error("invalid grammar: {0}")]
    InvalidGrammar(String),

    /// A pop primitive ran with nothing on the state stack.
    #[error("stack underflow: pop on empty stack at symbol {index} ({symbol:?})")]
    StackUnderflow { index: usize, symbol: char },

    /// A command token is not a known op-code, or its magnitude failed to parse.
    #[error("unknown primitive {token:?} in command for symbol {symbol:?}")]
    UnknownPrimitive { symbol: char, token: String },
}

pub type Result<T> = std::result::Result<T, LSystemError>;
