/// The converter module rewrites infix expressions into postfix notation.
///
/// The converter performs a single left-to-right scan over the input,
/// driving a shunting-yard operator stack. Numerals flow straight to the
/// output; operators wait on the stack until precedence forces them out.
///
/// # Responsibilities
/// - Emits operands and operators in Reverse Polish order.
/// - Keeps multi-digit and decimal numerals contiguous and attaches unary
///   minus signs to their numbers.
/// - Reports misplaced operators, unmatched parentheses and invalid
///   characters with their input positions.
pub mod converter;
/// The evaluator module reduces postfix expressions to numbers.
///
/// The evaluator walks the token stream produced by the lexer, pushing
/// operands onto a value stack and replacing the top two values with the
/// result whenever an operator arrives.
///
/// # Responsibilities
/// - Evaluates space-delimited postfix strings to `f64` results.
/// - Reports stack underflow, division by zero and unrecognized tokens.
/// - Rejects expressions that do not reduce to exactly one value.
pub mod evaluator;
/// The lexer module tokenizes postfix expressions for the evaluator.
///
/// The lexer reads a space-delimited postfix string and produces a stream of
/// tokens: signed decimal numerals and the five operator symbols. This is the
/// first stage of evaluation.
///
/// # Responsibilities
/// - Converts the postfix character stream into tokens.
/// - Parses numeric literals, including negative and decimal forms.
/// - Surfaces lexical errors for tokens outside the postfix alphabet.
pub mod lexer;
