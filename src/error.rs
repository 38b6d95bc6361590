/// Conversion errors.
///
/// Defines all error types that can occur while converting an infix
/// expression to postfix notation. Conversion errors cover misplaced
/// operators, unmatched parentheses and characters the engine does not
/// recognize, each reported with its position in the input.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a postfix
/// expression: unrecognized tokens, operators left without operands, division
/// by zero, and expressions that do not reduce to exactly one value.
pub mod eval_error;

pub use eval_error::EvalError;
pub use syntax_error::SyntaxError;
