use crate::util::ops::format_syntax_error;

#[derive(Debug, PartialEq, Eq, Clone)]
/// Represents all errors that can occur during infix-to-postfix conversion.
///
/// Positions are zero-based character indices into the infix input.
pub enum SyntaxError {
    /// An operator appeared without an operand directly before it.
    NonOperandBeforeOperator {
        /// Index of the operator in the input.
        position: usize,
        /// The last significant character scanned before the operator
        /// (`'\0'` when the operator opened the expression).
        found:    char,
    },
    /// A closing parenthesis had no matching opening parenthesis.
    UnmatchedClosingParen {
        /// Index of the `)` in the input.
        position: usize,
    },
    /// An opening parenthesis was never closed.
    UnclosedOpeningParen {
        /// Index of the dangling `(` in the input.
        position: usize,
    },
    /// A character outside the expression alphabet was encountered.
    InvalidCharacter {
        /// Index of the character in the input.
        position: usize,
        /// The character itself.
        found:    char,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonOperandBeforeOperator { position, found } => {
                write!(f,
                       "{}",
                       format_syntax_error("Conversion syntax error: non-operand unexpected before position ",
                                           *position,
                                           *found,
                                           ""))
            },

            Self::UnmatchedClosingParen { position } => {
                write!(f,
                       "{}",
                       format_syntax_error("Conversion syntax error: no matching opening parenthesis with closing at ",
                                           *position,
                                           ')',
                                           ""))
            },

            Self::UnclosedOpeningParen { position } => {
                write!(f,
                       "{}",
                       format_syntax_error("Conversion syntax error: parenthesis never closed, opened at ",
                                           *position,
                                           '(',
                                           ""))
            },

            Self::InvalidCharacter { position, found } => {
                write!(f,
                       "{}",
                       format_syntax_error("Conversion syntax error: invalid character at ",
                                           *position,
                                           *found,
                                           ""))
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
