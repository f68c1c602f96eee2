use std::cmp::Ordering;

/// A pending action recorded while scanning a scope.
///
/// Operations never own their operands. `target` is an index into the
/// operand sequence of the scope that recorded the operation: a unary
/// function rewrites `operands[target]` in place, a binary operator reads
/// `operands[target - 1]` and `operands[target]`, writes the result into
/// `operands[target]` and removes the left operand.
///
/// Operations are totally ordered by execution precedence, see the [`Ord`]
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// What the operation computes.
    pub kind:   OperationKind,
    /// Index of the (right) operand the result is written into.
    pub target: usize,
    /// Declaration order, shared across all scopes of one evaluation.
    pub order:  usize,
}

/// The two shapes an operation can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// A prefix function of one argument.
    Unary(UnaryFunction),
    /// An infix operator of two arguments.
    Binary(BinaryOperator),
}

/// Unary functions, including the `√` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryFunction {
    /// `√`
    Sqrt,
    /// `sin(`
    Sin,
    /// `cos(`
    Cos,
    /// `tan(`
    Tan,
    /// `log(`, base 10.
    Log,
    /// `abs(`
    Abs,
}

/// Binary infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`, also inserted for implicit multiplication.
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `^`
    Pow,
}

impl UnaryFunction {
    /// Applies the function with IEEE semantics. Trigonometry is in radians.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::operation::UnaryFunction;
    ///
    /// assert!((UnaryFunction::Log.apply(1000.0) - 3.0).abs() < 1e-12);
    /// assert!(UnaryFunction::Sqrt.apply(-1.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sqrt => x.sqrt(),
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Log => x.log10(),
            Self::Abs => x.abs(),
        }
    }

    /// The name the function is written with, without its parenthesis.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "√",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Abs => "abs",
        }
    }
}

impl BinaryOperator {
    /// Applies the operator with IEEE semantics.
    ///
    /// Division and modulo by zero are not errors, they yield infinities or
    /// NaN like any other floating-point operation.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::operation::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Modulo.apply(10.0, 3.0), 1.0);
    /// assert_eq!(BinaryOperator::Divide.apply(1.0, 0.0), f64::INFINITY);
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 10.0), 1024.0);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
            Self::Modulo => left % right,
            Self::Pow => left.powf(right),
        }
    }

    /// The symbol the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
            Self::Pow => '^',
        }
    }
}

impl OperationKind {
    /// Returns the execution priority; higher binds tighter.
    ///
    /// | priority | operations                  |
    /// |----------|-----------------------------|
    /// | 0        | `+ -`                       |
    /// | 1        | `* / %`                     |
    /// | 2        | `√ ^`                       |
    /// | 3        | `sin cos tan log abs`       |
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::operation::{BinaryOperator, OperationKind, UnaryFunction};
    ///
    /// assert_eq!(OperationKind::Binary(BinaryOperator::Pow).priority(),
    ///            OperationKind::Unary(UnaryFunction::Sqrt).priority());
    /// assert!(OperationKind::Unary(UnaryFunction::Abs).priority()
    ///         > OperationKind::Binary(BinaryOperator::Multiply).priority());
    /// ```
    #[must_use]
    pub const fn priority(self) -> u8 {
        use BinaryOperator::{Add, Divide, Modulo, Multiply, Pow, Subtract};

        match self {
            Self::Binary(Add | Subtract) => 0,
            Self::Binary(Multiply | Divide | Modulo) => 1,
            Self::Binary(Pow) | Self::Unary(UnaryFunction::Sqrt) => 2,
            Self::Unary(_) => 3,
        }
    }
}

impl Operation {
    /// Creates an operation.
    #[must_use]
    pub const fn new(kind: OperationKind, target: usize, order: usize) -> Self {
        Self { kind,
               target,
               order }
    }

    /// Shorthand for [`OperationKind::priority`].
    #[must_use]
    pub const fn priority(&self) -> u8 {
        self.kind.priority()
    }
}

impl Ord for Operation {
    /// Orders operations by execution precedence.
    ///
    /// Higher priority comes first. Among equal priorities the lower target
    /// comes first, which gives left-to-right evaluation. Operations with the
    /// same priority and target are stacked prefixes: the one declared later
    /// is the inner one and comes first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority()
             .cmp(&self.priority())
             .then_with(|| self.target.cmp(&other.target))
             .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Operation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            OperationKind::Unary(func) => write!(f, "{func} @{}", self.target),
            OperationKind::Binary(op) => write!(f, "{op} @{}", self.target),
        }
    }
}
