use crate::{
    error::SyntaxError,
    util::ops::{is_operator, priority},
};

/// Result type used by the converter.
///
/// Conversion either yields a value of type `T` or a [`SyntaxError`]
/// describing where the input went wrong.
pub type ConvertResult<T> = Result<T, SyntaxError>;

/// Converts an infix expression to a space-delimited postfix expression.
///
/// The scan walks the input once, left to right, with a single operator
/// stack:
///
/// - Digits and `.` go straight to the output. A separating space is emitted
///   first unless the numeral opens the expression, continues a previous
///   digit or `.`, or follows a freshly emitted unary minus. Contiguity is
///   judged on the immediately previous raw character, so `"1 2"` stays two
///   tokens even though both are digits.
/// - Spaces are skipped.
/// - `(` is pushed unconditionally; `)` pops operators to the output until
///   the matching `(` surfaces and is discarded.
/// - A `-` directly followed by a digit with no operand before it is a sign,
///   not an operator: it is emitted into the output ahead of its number and
///   never touches the stack.
/// - Any other operator first has to follow an operand. It is pushed when the
///   stack is empty or it binds tighter than the stack top; otherwise the
///   stack is popped to the output while the top binds at least as tight,
///   then the operator is pushed. `(` has priority 0, so the pop loop halts
///   on it structurally.
/// - At the end of the scan the remaining operators are popped to the
///   output; a `(` still on the stack means the parenthesis was never closed.
///
/// Every token after the first is preceded by exactly one space. A numeral
/// that does not open the expression is emitted with its separating space
/// even when nothing precedes it in the output, so the postfix string may
/// begin with a space. The evaluator does not mind, and callers comparing
/// strings should not either.
///
/// # Errors
/// Returns a [`SyntaxError`] when an operator lacks a preceding operand, a
/// parenthesis is unmatched in either direction, or a character outside the
/// expression alphabet appears. Each error carries the zero-based position.
///
/// # Examples
/// ```
/// use shunter::engine::converter::convert;
///
/// assert_eq!(convert("2+3*4").unwrap(), "2 3 4 * +");
/// assert_eq!(convert("(2+3)*4").unwrap(), " 2 3 + 4 *");
/// assert_eq!(convert("-5+3").unwrap(), " -5 3 +");
/// assert!(convert("2+@3").is_err());
/// ```
pub fn convert(infix: &str) -> ConvertResult<String> {
    let chars: Vec<char> = infix.chars().collect();

    // Operators wait here together with the input index they came from, so
    // unmatched-parenthesis diagnostics can cite a position.
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut output = String::new();

    // Last significant character scanned. Used for syntax tracking; a unary
    // minus resets it so the sign does not count as an operand.
    let mut last_char = '\0';
    // Set when a unary minus has been emitted and its digits are still due.
    let mut pending_sign = false;

    for (index, &c) in chars.iter().enumerate() {
        if c.is_ascii_digit() || c == '.' {
            let prev = if index > 0 { chars[index - 1] } else { '\0' };

            if index != 0 && !prev.is_ascii_digit() && prev != '.' && !pending_sign {
                output.push(' ');
            }
            output.push(c);

            last_char = c;
            pending_sign = false;
        } else if c == ' ' {
            continue;
        } else if c == '(' {
            stack.push((c, index));
        } else if is_operator(c) {
            let next_is_digit = chars.get(index + 1).is_some_and(char::is_ascii_digit);

            // A minus glued to a digit with no operand before it is a sign.
            if c == '-' && next_is_digit && !last_char.is_ascii_digit() {
                output.push(' ');
                output.push(c);

                last_char = '\0';
                pending_sign = true;
                continue;
            }

            // Before an operator must be an operand.
            if !last_char.is_ascii_digit() {
                return Err(SyntaxError::NonOperandBeforeOperator { position: index,
                                                                   found:    last_char, });
            }

            match stack.last() {
                Some(&(top, _)) if priority(c) <= priority(top) => {
                    while let Some(&(top, _)) = stack.last() {
                        if priority(c) > priority(top) {
                            break;
                        }
                        stack.pop();
                        output.push(' ');
                        output.push(top);
                    }
                    stack.push((c, index));
                },
                _ => stack.push((c, index)),
            }

            last_char = c;
        } else if c == ')' {
            loop {
                match stack.pop() {
                    Some(('(', _)) => break,
                    Some((op, _)) => {
                        output.push(' ');
                        output.push(op);
                    },
                    None => {
                        return Err(SyntaxError::UnmatchedClosingParen { position: index });
                    },
                }
            }
        } else {
            return Err(SyntaxError::InvalidCharacter { position: index,
                                                       found:    c, });
        }
    }

    // Flush whatever is still waiting on the stack.
    while let Some((op, position)) = stack.pop() {
        if op == '(' {
            return Err(SyntaxError::UnclosedOpeningParen { position });
        }
        output.push(' ');
        output.push(op);
    }

    Ok(output)
}
