use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::execute,
        lexer::Token,
        operation::{BinaryOperator, Operation, OperationKind, UnaryFunction},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Scans one scope and reduces it to its value.
    ///
    /// A scope is the whole expression (`depth == 0`), the contents of a
    /// parenthesis, or a function argument. Tokens are consumed left to right:
    ///
    /// - a `-` as the very first token becomes `0 -`,
    /// - `(` and function openers recurse into a nested scope whose value
    ///   becomes the next operand,
    /// - `√` records a prefix acting on whatever operand is scanned next,
    /// - a function opener or `√` right after a number records an implicit
    ///   multiplication first,
    /// - operators record a binary operation targeting the next operand,
    /// - numbers are pushed as operands.
    ///
    /// After an operand, a `)` closes the scope. The top-level scope ends with
    /// the input.
    ///
    /// # Parameters
    /// - `depth`: Nesting depth of this scope; `0` for the top level.
    /// - `opened_at`: Byte offset where the scope was opened, for errors.
    ///
    /// # Returns
    /// The value of the scope and the byte offset just past it.
    ///
    /// # Errors
    /// - `TooDeeplyNested` if `depth` exceeds the configured maximum.
    /// - `UnclosedParen` if a nested scope runs into the end of the input.
    /// - `UnmatchedParen` for a `)` closing the top-level scope.
    /// - `UnexpectedToken` for a `)` where an operand is expected.
    /// - Any `RuntimeError` raised while reducing the scope.
    pub(in crate::interpreter::parser) fn scope(&mut self,
                                                depth: usize,
                                                opened_at: usize)
                                                -> ParseResult<(f64, usize)> {
        if depth > self.max_depth {
            return Err(ParseError::TooDeeplyNested { depth:    self.max_depth,
                                                     position: opened_at, }.into());
        }

        let mut operands = Vec::new();
        let mut operations = Vec::new();
        let mut after_number = false;
        let mut closed = false;
        let mut end = self.end;

        if self.peek() == Some(Token::Minus) {
            self.advance();
            operands.push(0.0);
            operations.push(self.record(OperationKind::Binary(BinaryOperator::Subtract), 1));
        }

        while let Some((token, start, _)) = self.advance() {
            match token {
                Token::LParen => {
                    after_number = false;
                    let (value, _) = self.scope(depth + 1, start)?;
                    operands.push(value);
                },
                Token::Function(func) => {
                    self.prefix(&mut operations, operands.len(), func, after_number);
                    after_number = false;
                    let (value, _) = self.scope(depth + 1, start)?;
                    operands.push(value);
                },
                Token::Sqrt => {
                    self.prefix(&mut operations, operands.len(), UnaryFunction::Sqrt, after_number);
                    after_number = false;
                    continue;
                },
                Token::Number(value) => {
                    after_number = true;
                    operands.push(value);
                },
                Token::RParen if depth == 0 => {
                    return Err(ParseError::UnmatchedParen { position: start }.into());
                },
                Token::RParen => {
                    return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                             position: start, }.into());
                },
                Token::Ignored => continue,
                Token::Caret
                | Token::Plus
                | Token::Minus
                | Token::Star
                | Token::Slash
                | Token::Percent => {
                    if let Some(op) = token.binary_operator() {
                        after_number = false;
                        operations.push(self.record(OperationKind::Binary(op), operands.len()));
                    }
                    continue;
                },
            }

            if self.peek() == Some(Token::RParen) {
                if let Some((_, position, close_end)) = self.advance() {
                    if depth == 0 {
                        return Err(ParseError::UnmatchedParen { position }.into());
                    }
                    end = close_end;
                    closed = true;
                }
                break;
            }
        }

        if depth > 0 && !closed {
            return Err(ParseError::UnclosedParen { position: opened_at }.into());
        }

        trace!(depth, ?operands, operations = operations.len(), "scope scanned");

        let value = execute(operands, operations)?;
        Ok((value, end))
    }

    /// Records a prefix function targeting `target`, preceded by an implicit
    /// multiplication when the previous token was a number.
    fn prefix(&mut self,
              operations: &mut Vec<Operation>,
              target: usize,
              func: UnaryFunction,
              after_number: bool) {
        if after_number {
            operations.push(self.record(OperationKind::Binary(BinaryOperator::Multiply), target));
        }
        operations.push(self.record(OperationKind::Unary(func), target));
    }
}
