/// Ordering and execution of a scope's operations.
///
/// Sorts the recorded operations by precedence and reduces the operand
/// sequence to a single value.
pub mod core;

/// Operand sequence primitives.
///
/// In-place unary application and the binary collapse that removes the left
/// operand and shifts every pending reference.
pub mod operands;
