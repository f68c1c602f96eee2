#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning an expression.
///
/// Positions are byte offsets into the expression.
pub enum ParseError {
    /// A numeric literal could not be parsed, e.g. `1.2.3`.
    MalformedLiteral {
        /// The offending slice.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// A token appeared where it cannot be used, e.g. `)` right after an
    /// operator, or a character that is not part of the language.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// A `)` was found that closes no open scope.
    UnmatchedParen {
        /// Where the parenthesis is.
        position: usize,
    },
    /// The input ended inside a parenthesis or function argument.
    UnclosedParen {
        /// Where the unclosed scope was opened.
        position: usize,
    },
    /// The expression (or a scope of it) contains no operand at all.
    EmptyExpression,
    /// Parentheses and function arguments are nested deeper than allowed.
    TooDeeplyNested {
        /// The configured maximum depth.
        depth:    usize,
        /// Where the scope exceeding the limit was opened.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLiteral { literal, position } => {
                write!(f, "Error at position {position}: Malformed number literal '{literal}'.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::UnmatchedParen { position } => write!(f,
                                                        "Error at position {position}: Closing parenthesis ')' has no matching '('."),

            Self::UnclosedParen { position } => write!(f,
                                                       "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::EmptyExpression => write!(f, "Error: Expression is empty."),

            Self::TooDeeplyNested { depth, position } => write!(f,
                                                                "Error at position {position}: Expression is nested deeper than {depth} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
