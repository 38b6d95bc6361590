/// Checks whether a character is one of the five supported operators.
///
/// # Examples
/// ```
/// use shunter::util::ops::is_operator;
///
/// assert!(is_operator('+'));
/// assert!(is_operator('^'));
/// assert!(!is_operator('('));
/// assert!(!is_operator('2'));
/// ```
#[must_use]
pub const fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

/// Returns the precedence of an operator character.
///
/// Exponentiation binds tightest, then the multiplicative operators, then the
/// additive ones. Every non-operator, parentheses included, maps to 0: the
/// shunting-yard pop loop compares against the stack top with `<=`, so a `(`
/// sitting on the stack never wins a comparison against a real operator and
/// the loop halts on it without a special case.
///
/// # Examples
/// ```
/// use shunter::util::ops::priority;
///
/// assert_eq!(priority('^'), 3);
/// assert_eq!(priority('*'), 2);
/// assert_eq!(priority('/'), 2);
/// assert_eq!(priority('+'), 1);
/// assert_eq!(priority('-'), 1);
/// assert_eq!(priority('('), 0);
/// ```
#[must_use]
pub const fn priority(c: char) -> u8 {
    match c {
        '^' => 3,
        '*' | '/' => 2,
        '+' | '-' => 1,
        _ => 0,
    }
}

/// Builds a positional syntax diagnostic with a uniform shape.
///
/// The produced text is `"{message}{position}: '{offending}'. "` followed by
/// the optional `context`. Both error enums use this helper in their
/// `Display` impls so diagnostics from either stage read the same.
///
/// # Examples
/// ```
/// use shunter::util::ops::format_syntax_error;
///
/// let text = format_syntax_error("Syntax error at ", 3, 'a', "Invalid operand.");
/// assert_eq!(text, "Syntax error at 3: 'a'. Invalid operand.");
/// ```
#[must_use]
pub fn format_syntax_error(message: &str, position: usize, offending: char, context: &str) -> String {
    format!("{message}{position}: '{offending}'. {context}")
}
