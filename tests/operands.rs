use reckon::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::execute, operands::collapse},
        operation::{BinaryOperator, Operation, OperationKind, UnaryFunction},
    },
};

fn binary(op: BinaryOperator, target: usize, order: usize) -> Operation {
    Operation::new(OperationKind::Binary(op), target, order)
}

fn unary(func: UnaryFunction, target: usize, order: usize) -> Operation {
    Operation::new(OperationKind::Unary(func), target, order)
}

fn pending() -> Vec<Operation> {
    vec![binary(BinaryOperator::Add, 1, 10),
         binary(BinaryOperator::Add, 2, 11),
         binary(BinaryOperator::Add, 3, 12),]
}

fn targets(operations: &[Operation]) -> Vec<usize> {
    operations.iter().map(|o| o.target).collect()
}

#[test]
fn collapse_removes_first_operand() {
    let mut operands = vec![1.0, 2.0, 3.0, 4.0];
    let mut rest = pending();

    collapse(&mut operands, &mut rest, 1, BinaryOperator::Subtract).unwrap();

    assert_eq!(operands, vec![-1.0, 3.0, 4.0]);
    assert_eq!(targets(&rest), vec![0, 1, 2]);
}

#[test]
fn collapse_removes_middle_operand() {
    let mut operands = vec![1.0, 2.0, 3.0, 4.0];
    let mut rest = pending();

    collapse(&mut operands, &mut rest, 2, BinaryOperator::Multiply).unwrap();

    assert_eq!(operands, vec![1.0, 6.0, 4.0]);
    assert_eq!(targets(&rest), vec![1, 1, 2]);
}

#[test]
fn collapse_removes_last_operand() {
    let mut operands = vec![1.0, 2.0, 3.0, 4.0];
    let mut rest = pending();

    collapse(&mut operands, &mut rest, 3, BinaryOperator::Add).unwrap();

    assert_eq!(operands, vec![1.0, 2.0, 7.0]);
    assert_eq!(targets(&rest), vec![1, 2, 2]);
}

#[test]
fn collapse_rejects_missing_operands_without_side_effects() {
    let mut operands = vec![1.0, 2.0];
    let mut rest = pending();

    assert_eq!(collapse(&mut operands, &mut rest, 0, BinaryOperator::Add),
               Err(RuntimeError::OperandOutOfRange { index: 0, len: 2 }));
    assert_eq!(collapse(&mut operands, &mut rest, 2, BinaryOperator::Add),
               Err(RuntimeError::OperandOutOfRange { index: 2, len: 2 }));
    assert_eq!(operands, vec![1.0, 2.0]);
    assert_eq!(targets(&rest), vec![1, 2, 3]);
}

#[test]
fn operations_sort_by_priority_then_target_then_latest_declaration() {
    let mut operations = vec![binary(BinaryOperator::Add, 1, 0),
                              binary(BinaryOperator::Multiply, 2, 1),
                              unary(UnaryFunction::Sqrt, 2, 2),
                              binary(BinaryOperator::Pow, 1, 3),
                              unary(UnaryFunction::Sqrt, 1, 4),
                              unary(UnaryFunction::Sin, 2, 5),];
    operations.sort();

    let orders: Vec<usize> = operations.iter().map(|o| o.order).collect();
    assert_eq!(orders, vec![5, 4, 3, 2, 1, 0]);
}

#[test]
fn execute_reduces_to_a_single_value() {
    // √abs(x) with x = -9: abs is declared later and runs first.
    let operations = vec![unary(UnaryFunction::Sqrt, 0, 0), unary(UnaryFunction::Abs, 0, 1)];
    assert_eq!(execute(vec![-9.0], operations), Ok(3.0));

    assert_eq!(execute(vec![1.0, 2.0], Vec::new()),
               Err(RuntimeError::DanglingOperands { count: 2 }));
    assert_eq!(execute(Vec::new(), Vec::new()),
               Err(RuntimeError::DanglingOperands { count: 0 }));
}

#[test]
fn pending_targets_stay_in_bounds_after_every_collapse() {
    // 1 - 2 * 3 + 4 ^ 2 / 8
    let mut operands = vec![1.0, 2.0, 3.0, 4.0, 2.0, 8.0];
    let mut operations = vec![binary(BinaryOperator::Subtract, 1, 0),
                              binary(BinaryOperator::Multiply, 2, 1),
                              binary(BinaryOperator::Add, 3, 2),
                              binary(BinaryOperator::Pow, 4, 3),
                              binary(BinaryOperator::Divide, 5, 4),];
    operations.sort();

    for i in 0..operations.len() {
        let (done, rest) = operations.split_at_mut(i + 1);
        let OperationKind::Binary(op) = done[i].kind else {
            unreachable!("only binary operations here")
        };
        collapse(&mut operands, rest, done[i].target, op).unwrap();
        assert!(rest.iter().all(|o| o.target >= 1 && o.target < operands.len()),
                "stale target after {}: {rest:?} over {operands:?}",
                done[i]);
    }

    assert_eq!(operands, vec![-3.0]);
}
