//! # reckon
//!
//! reckon is a calculator engine for single-line arithmetic expressions.
//! It understands the binary operators `+ - * / % ^`, the square-root prefix
//! `√`, the functions `sin( cos( tan( log( abs(`, parentheses, a leading `-`
//! in any scope, and implicit multiplication such as `2sin(0)` or `3√4`.
//!
//! Expressions are scanned once, left to right. Each scope (the whole
//! expression, a parenthesis, or a function argument) records a flat list of
//! operands and a list of pending operations, which are then executed by
//! priority over the shared operand list until one value remains.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for scanning and execution.
///
/// This module defines every error the engine can raise internally. The
/// [`compute`] boundary collapses all of them into `NaN`; [`try_compute`]
/// exposes them for diagnostics.
///
/// # Responsibilities
/// - Defines error enums for scanning (`ParseError`) and execution
///   (`RuntimeError`), and their union `EngineError`.
/// - Attaches byte positions and details for user feedback.
/// - Integrates with `std::error::Error` and `Display`.
pub mod error;
/// Bounded expression history with up/down navigation.
///
/// Mirrors the recall behaviour of a desktop calculator: the oldest entries
/// are dropped past the capacity, and navigation is relative to the expression
/// currently being edited.
pub mod history;
/// Runs the expression engine.
///
/// This module ties together the lexer, the scope scanner, the operation
/// table and the evaluator, and exposes the configurable [`Context`].
///
/// # Responsibilities
/// - Tokenizes expressions and scans them scope by scope.
/// - Orders and executes the recorded operations.
/// - Manages the flow of errors between phases.
pub mod interpreter;
/// Formats results for display.
///
/// Produces the decimal readout of a result together with hexadecimal and
/// binary views when the result is an integer.
pub mod readout;

pub use interpreter::context::{Context, MAX_DEPTH};

/// Evaluates an expression, returning `NaN` if it is invalid.
///
/// This is the engine's single entry point for display layers. Malformed
/// literals, unbalanced parentheses and missing operands never panic and
/// never surface as errors; they all produce `NaN`. Division by zero and
/// domain errors follow IEEE-754 as usual.
///
/// # Examples
/// ```
/// use reckon::compute;
///
/// assert_eq!(compute("2+3*4"), 14.0);
/// assert_eq!(compute("3√4"), 6.0);
/// assert_eq!(compute("abs(-3*(2+2))"), 12.0);
///
/// assert!(compute("(2+3").is_nan());
/// assert_eq!(compute("1/0"), f64::INFINITY);
/// ```
#[must_use]
pub fn compute(expression: &str) -> f64 {
    Context::new().compute(expression)
}

/// Evaluates an expression, reporting why it failed if it does.
///
/// # Errors
/// Returns an [`error::EngineError`] describing the first problem found.
///
/// # Examples
/// ```
/// use reckon::{error::EngineError, try_compute};
///
/// assert_eq!(try_compute("2^10").unwrap(), 1024.0);
/// assert!(matches!(try_compute("1.2.3"), Err(EngineError::Parse(_))));
/// assert!(matches!(try_compute("2+"), Err(EngineError::Runtime(_))));
/// ```
pub fn try_compute(expression: &str) -> Result<f64, error::EngineError> {
    Context::new().try_compute(expression)
}
