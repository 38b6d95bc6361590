use logos::Logos;

use crate::{engine::lexer::Token, error::EvalError};

/// Result type used by the evaluator.
///
/// Evaluation either yields a value of type `T` or an [`EvalError`]
/// describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a space-delimited postfix expression to a number.
///
/// Tokens are processed in order. Numbers are pushed onto a value stack; an
/// operator pops its right operand, then its left operand, applies
/// `left op right` and pushes the result. When the stream ends, exactly one
/// value must remain on the stack: the result.
///
/// # Errors
/// - [`EvalError::InvalidToken`] for tokens outside the postfix alphabet.
/// - [`EvalError::MissingOperand`] when an operator pops an empty stack.
/// - [`EvalError::DivisionByZero`] when the right operand of `/` is zero.
/// - [`EvalError::SurplusValues`] when more than one value remains.
/// - [`EvalError::EmptyExpression`] when no value remains.
///
/// # Examples
/// ```
/// use shunter::engine::evaluator::evaluate;
///
/// assert_eq!(evaluate("2 3 4 * +").unwrap(), 14.0);
/// assert_eq!(evaluate(" -5 3 +").unwrap(), -2.0);
/// assert!(evaluate("2 +").is_err());
/// ```
pub fn evaluate(postfix: &str) -> EvalResult<f64> {
    let mut values: Vec<f64> = Vec::new();
    let mut lexer = Token::lexer(postfix);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;

        let Ok(token) = token else {
            return Err(EvalError::InvalidToken { token:    lexer.slice().to_string(),
                                                 position, });
        };

        match token {
            Token::Number(value) => values.push(value),
            Token::Plus => reduce(&mut values, '+', position)?,
            Token::Minus => reduce(&mut values, '-', position)?,
            Token::Star => reduce(&mut values, '*', position)?,
            Token::Slash => reduce(&mut values, '/', position)?,
            Token::Caret => reduce(&mut values, '^', position)?,
            Token::Ignored => {},
        }
    }

    match values.as_slice() {
        [] => Err(EvalError::EmptyExpression),
        [result] => Ok(*result),
        surplus => Err(EvalError::SurplusValues { count: surplus.len() }),
    }
}

/// Applies one operator to the top two values of the stack.
///
/// The right operand is popped first; it was pushed last. Division checks its
/// right operand for zero before dividing.
fn reduce(values: &mut Vec<f64>, operator: char, position: usize) -> EvalResult<()> {
    let right = pop_operand(values, operator, position)?;
    let left = pop_operand(values, operator, position)?;

    let result = match operator {
        '+' => left + right,
        '-' => left - right,
        '*' => left * right,
        '/' => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { position });
            }
            left / right
        },
        '^' => left.powf(right),
        // `reduce` is only called for the five operator tokens.
        _ => unreachable!(),
    };

    values.push(result);
    Ok(())
}

/// Pops one operand, reporting which operator went without one on underflow.
fn pop_operand(values: &mut Vec<f64>, operator: char, position: usize) -> EvalResult<f64> {
    values.pop().ok_or(EvalError::MissingOperand { operator, position })
}
