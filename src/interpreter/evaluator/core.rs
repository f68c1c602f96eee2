use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::operands::{apply_unary, collapse},
        operation::{Operation, OperationKind},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a scope's operand sequence to its single value.
///
/// The operations are sorted by their precedence order (see
/// [`Operation`]'s `Ord` implementation) and executed once each, in that
/// order. Every binary operation collapses the operand sequence by one and
/// shifts the targets of the operations that have not run yet.
///
/// # Parameters
/// - `operands`: The scope's operands, in textual order.
/// - `operations`: The operations recorded for the same scope, in any order.
///
/// # Returns
/// The lone operand left after all operations ran.
///
/// # Errors
/// - `OperandOutOfRange` if an operation references a missing operand.
/// - `DanglingOperands` if the sequence does not end up with exactly one
///   value.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     evaluator::core::execute,
///     operation::{BinaryOperator, Operation, OperationKind},
/// };
///
/// // 2 + 3 * 4
/// let operations = vec![Operation::new(OperationKind::Binary(BinaryOperator::Add), 1, 0),
///                       Operation::new(OperationKind::Binary(BinaryOperator::Multiply), 2, 1),];
///
/// assert_eq!(execute(vec![2.0, 3.0, 4.0], operations).unwrap(), 14.0);
/// ```
pub fn execute(mut operands: Vec<f64>, mut operations: Vec<Operation>) -> EvalResult<f64> {
    operations.sort_unstable();

    for i in 0..operations.len() {
        let (done, pending) = operations.split_at_mut(i + 1);
        let operation = done[i];

        match operation.kind {
            OperationKind::Unary(func) => apply_unary(&mut operands, operation.target, func)?,
            OperationKind::Binary(op) => {
                collapse(&mut operands, pending, operation.target, op)?;
            },
        }

        trace!(%operation, ?operands, "executed operation");
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        rest => Err(RuntimeError::DanglingOperands { count: rest.len() }),
    }
}
