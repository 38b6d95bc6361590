use crate::util::ops::format_syntax_error;

#[derive(Debug, PartialEq, Eq, Clone)]
/// Represents all errors that can occur while evaluating a postfix
/// expression.
///
/// Positions are zero-based byte offsets into the postfix input.
pub enum EvalError {
    /// A token that is neither a number nor an operator was encountered.
    InvalidToken {
        /// The offending token text.
        token:    String,
        /// Offset of the token in the input.
        position: usize,
    },
    /// An operator found fewer than two values on the stack.
    MissingOperand {
        /// The operator that went hungry.
        operator: char,
        /// Offset of the operator in the input.
        position: usize,
    },
    /// The right operand of a division was zero.
    DivisionByZero {
        /// Offset of the `/` in the input.
        position: usize,
    },
    /// More than one value remained after the expression was fully reduced.
    SurplusValues {
        /// How many values were left on the stack.
        count: usize,
    },
    /// The expression contained no tokens to reduce.
    EmptyExpression,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { token, position } => {
                write!(f, "Evaluation syntax error: unrecognized token at {position}: '{token}'. ")
            },

            Self::MissingOperand { operator, position } => {
                write!(f,
                       "{}",
                       format_syntax_error("Evaluation error: missing operand for operator at ",
                                           *position,
                                           *operator,
                                           "Expected two operands."))
            },

            Self::DivisionByZero { position } => {
                write!(f,
                       "{}",
                       format_syntax_error("Evaluation error: division by zero at ", *position, '/', ""))
            },

            Self::SurplusValues { count } => {
                write!(f,
                       "Evaluation error: {count} values left on the stack after reduction. The expression is malformed.")
            },

            Self::EmptyExpression => {
                write!(f, "Evaluation error: the expression produced no result.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
