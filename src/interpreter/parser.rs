/// Parser state and the public `parse` entry point.
///
/// Holds the token stream of one expression, the cursor into it and the
/// declaration counter shared by every scope of the evaluation.
pub mod core;

/// The scope scanner.
///
/// Scans one scope left to right, recording operands and operations, recurses
/// into parentheses and function arguments and reduces the scope once it is
/// closed.
pub mod scope;
