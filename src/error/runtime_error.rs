#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while executing recorded operations.
///
/// Numeric edge cases such as division by zero are not errors; they follow
/// IEEE-754 and surface as infinities or NaN.
pub enum RuntimeError {
    /// An operation referenced an operand that does not exist, typically
    /// because an operator is missing one of its operands (`2+`, `*3`).
    OperandOutOfRange {
        /// The index that was accessed.
        index: usize,
        /// The length of the operand sequence at that moment.
        len:   usize,
    },
    /// A scope did not reduce to exactly one operand, typically because two
    /// operands follow each other without an operator (`(2)(3)`).
    DanglingOperands {
        /// How many operands were left.
        count: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperandOutOfRange { index, len } => write!(f,
                                                             "Error: Operator is missing an operand (index {index} of {len})."),

            Self::DanglingOperands { count } => {
                write!(f, "Error: Expression left {count} operands instead of one.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
