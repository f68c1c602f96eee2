use logos::Logos;

use crate::interpreter::operation::{BinaryOperator, UnaryFunction};

/// Represents a lexical token in a calculator expression.
///
/// Function names are only recognized together with their opening
/// parenthesis, so `sin(` is a single token while a bare `sin` is a lexical
/// error.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `2.5`, `.5` or `2,5`.
    ///
    /// The pattern also matches runs such as `1.2.3`; [`parse_number`]
    /// rejects those as malformed literals.
    #[regex(r"[0-9.,]+", parse_number)]
    Number(f64),
    /// `sin(`, `cos(`, `tan(`, `log(` or `abs(`.
    #[token("sin(", |_| UnaryFunction::Sin)]
    #[token("cos(", |_| UnaryFunction::Cos)]
    #[token("tan(", |_| UnaryFunction::Tan)]
    #[token("log(", |_| UnaryFunction::Log)]
    #[token("abs(", |_| UnaryFunction::Abs)]
    Function(UnaryFunction),
    /// `√`
    #[token("√")]
    Sqrt,
    /// `^`
    #[token("^")]
    Caret,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the binary operator spelled by this token, if any.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{lexer::Token, operation::BinaryOperator};
    ///
    /// assert_eq!(Token::Percent.binary_operator(), Some(BinaryOperator::Modulo));
    /// assert_eq!(Token::Sqrt.binary_operator(), None);
    /// ```
    #[must_use]
    pub const fn binary_operator(self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Subtract),
            Self::Star => Some(BinaryOperator::Multiply),
            Self::Slash => Some(BinaryOperator::Divide),
            Self::Percent => Some(BinaryOperator::Modulo),
            Self::Caret => Some(BinaryOperator::Pow),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Function(func) => write!(f, "{func}("),
            Self::Sqrt => write!(f, "√"),
            Self::Caret => write!(f, "^"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// Both `.` and `,` are accepted as the decimal separator, but only one of
/// them may appear once in a literal.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid literal (e.g. `1.2.3`, `,` or
///   `1,2.3`).
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    parse_literal(lex.slice())
}

/// Parses a calculator literal, accepting `,` as decimal separator.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::parse_literal;
///
/// assert_eq!(parse_literal("2,5"), Some(2.5));
/// assert_eq!(parse_literal(".5"), Some(0.5));
/// assert_eq!(parse_literal("1.2.3"), None);
/// assert_eq!(parse_literal("."), None);
/// ```
#[must_use]
pub fn parse_literal(slice: &str) -> Option<f64> {
    let separators = slice.chars().filter(|&c| c == '.' || c == ',').count();
    if separators > 1 || !slice.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    slice.replace(',', ".").parse().ok()
}

/// A token together with the byte range it occupies in the source.
pub type Spanned = (Token, std::ops::Range<usize>);

/// Tokenizes an expression, keeping the span of every token.
///
/// # Errors
/// Returns the byte range of the first slice that is not a valid token. The
/// caller decides whether that slice is a malformed literal or an unexpected
/// character.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 * sin(0)").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(t, _)| t).collect();
/// assert_eq!(kinds.len(), 5);
/// assert_eq!(kinds[1], Token::Star);
///
/// assert!(tokenize("2 & 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, std::ops::Range<usize>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span())),
            Err(()) => return Err(lexer.span()),
        }
    }

    Ok(tokens)
}
