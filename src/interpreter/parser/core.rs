use crate::{
    error::{EngineError, ParseError},
    interpreter::{
        lexer::{Spanned, Token, tokenize},
        operation::{Operation, OperationKind},
    },
};

/// Result type used by the parser.
///
/// Scanning a scope also reduces it, so failures are either parse or runtime
/// errors.
pub type ParseResult<T> = Result<T, EngineError>;

/// Scanner state for one evaluation.
///
/// A `Parser` is created per evaluation and dropped afterwards; nothing in it
/// outlives the call.
pub struct Parser {
    /// Tokens of the scanned text with spans relative to `offset`.
    tokens: Vec<Spanned>,
    /// Index of the next unconsumed token.
    cursor: usize,
    /// Byte offset of the scanned text in the original expression.
    offset: usize,
    /// Byte offset just past the scanned text.
    pub(in crate::interpreter::parser) end: usize,
    /// Next declaration order handed out to an operation.
    next_order: usize,
    /// Deepest scope allowed below the top level.
    pub(in crate::interpreter::parser) max_depth: usize,
}

impl Parser {
    /// Tokenizes `expression` starting at byte `position`.
    ///
    /// # Errors
    /// - `MalformedLiteral` for an invalid numeric literal.
    /// - `UnexpectedToken` for a character outside the language, or when
    ///   `position` does not fall on a character boundary.
    pub fn new(expression: &str, position: usize, max_depth: usize) -> Result<Self, ParseError> {
        let Some(source) = expression.get(position..) else {
            return Err(ParseError::UnexpectedToken { token: "<not a character boundary>".to_string(),
                                                     position });
        };

        let tokens = tokenize(source).map_err(|span| {
                                         lex_error(&source[span.clone()], position + span.start)
                                     })?;

        Ok(Self { tokens,
                  cursor: 0,
                  offset: position,
                  end: expression.len(),
                  next_order: 0,
                  max_depth })
    }

    /// Returns the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).map(|(token, _)| *token)
    }

    /// Consumes the next token, returning it with its absolute start and end
    /// offsets.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Option<(Token, usize, usize)> {
        let (token, span) = self.tokens.get(self.cursor)?;
        self.cursor += 1;

        Some((*token, self.offset + span.start, self.offset + span.end))
    }

    /// Creates an operation with the next declaration order.
    pub(in crate::interpreter::parser) fn record(&mut self,
                                                 kind: OperationKind,
                                                 target: usize)
                                                 -> Operation {
        let operation = Operation::new(kind, target, self.next_order);
        self.next_order += 1;
        operation
    }
}

/// Classifies a slice the lexer rejected.
fn lex_error(slice: &str, position: usize) -> ParseError {
    if slice.starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == ',') {
        ParseError::MalformedLiteral { literal: slice.to_string(),
                                       position }
    } else {
        ParseError::UnexpectedToken { token: slice.to_string(),
                                      position }
    }
}

/// Scans and evaluates the expression starting at byte `position`.
///
/// The text from `position` on is treated as a top-level scope: it must run
/// to the end of the input, so a stray `)` is an error.
///
/// # Parameters
/// - `expression`: The whole expression.
/// - `position`: Byte offset of the first unconsumed character.
/// - `max_depth`: How deeply parentheses and function arguments may nest.
///
/// # Returns
/// The value of the scope and the byte offset just past it.
///
/// # Errors
/// Any `ParseError` or `RuntimeError` raised in any scope.
///
/// # Example
/// ```
/// use reckon::interpreter::parser::core::parse;
///
/// let (value, end) = parse("1+2*3", 0, 16).unwrap();
/// assert_eq!(value, 7.0);
/// assert_eq!(end, 5);
///
/// // Only the part after the offset is scanned.
/// let (value, _) = parse("1+2*3", 2, 16).unwrap();
/// assert_eq!(value, 6.0);
/// ```
pub fn parse(expression: &str, position: usize, max_depth: usize) -> ParseResult<(f64, usize)> {
    let mut parser = Parser::new(expression, position, max_depth)?;
    if parser.peek().is_none() {
        return Err(ParseError::EmptyExpression.into());
    }

    parser.scope(0, position)
}
