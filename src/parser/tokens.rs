//! Token types for the date pattern lexer.

/// A token in a date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of one repeated ASCII letter, such as `yyyy`.
    Field { letter: char, width: usize },
    /// Unquoted punctuation and spaces.
    Literal(String),
    /// Text between single quotes, or a doubled quote.
    Quoted(String),
    /// End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
