//! Lexer for CSV symbol maps using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Raw CSV tokens.
///
/// Nothing is skipped: cell text is significant exactly as written, so a
/// field keeps its interior and surrounding spaces.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[token(",")]
    Comma,

    #[regex(r"\r?\n")]
    Newline,

    // Everything between delimiters is one field, whitespace included
    #[regex(r"[^,\r\n]+", |lex| lex.slice().to_string())]
    Field(String),
}

/// Lex input into tokens with spans.
///
/// Unlexable input (a bare carriage return with no following line feed)
/// comes through as `Err` so the caller can report it instead of
/// dropping it.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}
