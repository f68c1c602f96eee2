use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        operation::{BinaryOperator, Operation, UnaryFunction},
    },
};

/// Applies a unary function to `operands[target]` in place.
///
/// # Errors
/// `OperandOutOfRange` if `target` is not a valid index.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::operands::apply_unary, operation::UnaryFunction};
///
/// let mut operands = vec![-4.0, 9.0];
/// apply_unary(&mut operands, 1, UnaryFunction::Sqrt).unwrap();
/// apply_unary(&mut operands, 0, UnaryFunction::Abs).unwrap();
/// assert_eq!(operands, vec![4.0, 3.0]);
///
/// assert!(apply_unary(&mut operands, 2, UnaryFunction::Abs).is_err());
/// ```
pub fn apply_unary(operands: &mut [f64], target: usize, func: UnaryFunction) -> EvalResult<()> {
    let len = operands.len();
    let slot = operands.get_mut(target)
                       .ok_or(RuntimeError::OperandOutOfRange { index: target,
                                                                len })?;
    *slot = func.apply(*slot);

    Ok(())
}

/// Executes a binary operator targeting `operands[target]` and collapses the
/// operand sequence.
///
/// The result of `op(operands[target - 1], operands[target])` is written into
/// `operands[target]`, then `operands[target - 1]` is removed. Every operation
/// in `pending` whose target lies beyond the removed index is shifted down by
/// one so that it keeps pointing at the same value.
///
/// Nothing is modified when an index is out of range.
///
/// # Errors
/// `OperandOutOfRange` if `target` is `0` or not a valid index.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     evaluator::operands::collapse,
///     operation::{BinaryOperator, Operation, OperationKind},
/// };
///
/// // 2 + 3 * 4, the multiplication runs first.
/// let mut operands = vec![2.0, 3.0, 4.0];
/// let mut pending = [Operation::new(OperationKind::Binary(BinaryOperator::Add), 1, 0)];
///
/// collapse(&mut operands, &mut pending, 2, BinaryOperator::Multiply).unwrap();
/// assert_eq!(operands, vec![2.0, 12.0]);
/// assert_eq!(pending[0].target, 1);
/// ```
pub fn collapse(operands: &mut Vec<f64>,
                pending: &mut [Operation],
                target: usize,
                op: BinaryOperator)
                -> EvalResult<()> {
    let len = operands.len();
    if target >= len {
        return Err(RuntimeError::OperandOutOfRange { index: target,
                                                     len });
    }
    let Some(removed) = target.checked_sub(1) else {
        return Err(RuntimeError::OperandOutOfRange { index: 0, len });
    };

    operands[target] = op.apply(operands[removed], operands[target]);
    operands.remove(removed);

    for operation in pending.iter_mut().filter(|o| o.target > removed) {
        operation.target -= 1;
    }

    Ok(())
}
