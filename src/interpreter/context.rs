use tracing::debug;

use crate::{error::EngineError, interpreter::parser::core::parse};

/// Default bound on how deeply parentheses and function arguments may nest.
pub const MAX_DEPTH: usize = 256;

/// Stores the settings of the expression engine.
///
/// A `Context` holds no evaluation state: every call allocates its own operand
/// and operation sequences, so one context can be reused for any number of
/// evaluations, from any number of threads.
///
/// ## Usage
///
/// Most callers use [`crate::compute`], which evaluates with
/// `Context::default()`. Build a context explicitly to change the nesting
/// bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Deepest nesting of parentheses and function arguments accepted.
    pub max_depth: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with the default nesting bound.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: MAX_DEPTH }
    }

    /// Creates a context accepting at most `max_depth` nested scopes.
    ///
    /// # Example
    /// ```
    /// use reckon::Context;
    ///
    /// let shallow = Context::with_max_depth(2);
    /// assert_eq!(shallow.compute("(1+(2))"), 3.0);
    /// assert!(shallow.compute("(1+((2)))").is_nan());
    /// ```
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Evaluates an expression, reporting why it failed if it does.
    ///
    /// # Errors
    /// Returns an [`EngineError`] for malformed literals, unexpected tokens,
    /// unbalanced parentheses, missing or dangling operands and nesting deeper
    /// than `max_depth`. Numeric edge cases (division by zero, `log` of a
    /// negative number) are not errors.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     Context,
    ///     error::{EngineError, ParseError},
    /// };
    ///
    /// let context = Context::new();
    /// assert_eq!(context.try_compute("2+3*4").unwrap(), 14.0);
    /// assert_eq!(context.try_compute("(2+3").unwrap_err(),
    ///            EngineError::Parse(ParseError::UnclosedParen { position: 0 }));
    /// ```
    pub fn try_compute(&self, expression: &str) -> Result<f64, EngineError> {
        parse(expression, 0, self.max_depth).map(|(value, _)| value)
    }

    /// Evaluates an expression, returning `NaN` if it is invalid.
    ///
    /// This is the engine's boundary: no error ever escapes it. `NaN` means
    /// "unparseable or invalid expression", but may also be the genuine
    /// result of a valid one such as `0/0`.
    ///
    /// # Example
    /// ```
    /// use reckon::Context;
    ///
    /// let context = Context::new();
    /// assert_eq!(context.compute("-5+2"), -3.0);
    /// assert!(context.compute("2+").is_nan());
    /// ```
    #[must_use]
    pub fn compute(&self, expression: &str) -> f64 {
        self.try_compute(expression).unwrap_or_else(|error| {
                                        debug!(expression, %error, "evaluation failed");
                                        f64::NAN
                                    })
    }
}
