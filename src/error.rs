/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and scanning an
/// expression: malformed literals, stray or missing parentheses, unexpected
/// tokens and pathological nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while executing the recorded operations of a
/// scope, i.e. operand-index faults and scopes that do not reduce to a single
/// value.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the expression engine.
///
/// [`crate::compute`] collapses every variant into `NaN`;
/// [`crate::try_compute`] hands it to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The expression could not be scanned.
    Parse(ParseError),
    /// The recorded operations could not be executed.
    Runtime(RuntimeError),
}

impl From<ParseError> for EngineError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EngineError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
