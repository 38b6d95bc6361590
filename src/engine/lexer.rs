use logos::Logos;

/// Represents a lexical token in a postfix expression.
/// A token is either a numeric operand or one of the five operator symbols.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `-5`, `1.25` or `.5`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", parse_number)]
    #[regex(r"-?\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// Spaces between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
