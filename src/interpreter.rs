/// Engine configuration and the evaluation entry points.
///
/// `Context` carries the settings of an evaluation (currently the nesting
/// bound) and runs the full pipeline: tokenize, scan, execute.
pub mod context;
/// The evaluator module reduces a scope to its value.
///
/// It orders the operations recorded by the parser and executes them over the
/// scope's operand sequence, keeping every pending operand reference valid as
/// the sequence shrinks.
///
/// # Responsibilities
/// - Sorts operations by priority, target and declaration order.
/// - Applies unary functions and collapses binary operations.
/// - Reports operand-index faults and scopes that do not reduce to one value.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer reads the raw expression text and produces numbers, operators,
/// the square-root glyph, function openers such as `sin(` and parentheses.
///
/// # Responsibilities
/// - Converts the input into tokens with their byte spans.
/// - Accepts `.` and `,` as decimal separators.
/// - Rejects characters that are not part of the language.
pub mod lexer;
/// The operation module defines what a pending operation is.
///
/// Declares the unary functions, the binary operators, their priority table
/// and the total order used to schedule them.
pub mod operation;
/// The parser module scans expressions into operands and operations.
///
/// The parser walks the token stream once, left to right, recursing for every
/// parenthesis and function argument. Each scope is reduced by the evaluator
/// as soon as it is closed, and its value becomes an operand of the enclosing
/// scope.
///
/// # Responsibilities
/// - Records operands and operations with their target indices.
/// - Inserts implicit multiplications and leading negations.
/// - Validates parenthesis structure and bounds the nesting depth.
pub mod parser;
