//! Lexer for tokenizing date pattern strings.
//!
//! The lexer splits a pattern into runs of pattern letters and literal text:
//! - ASCII letters repeated back to back form one field token (`MMM`)
//! - Text between single quotes is literal (`'at'`)
//! - Two single quotes in a row stand for one quote, inside or outside quotes
//! - Everything else is literal

use crate::error::PatternError;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for date pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, PatternError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = if ch.is_ascii_alphabetic() {
            let width = self.count_run(|c| c == ch);
            Token::Field { letter: ch, width }
        } else if ch == '\'' {
            self.lex_quoted()?
        } else {
            let mut text = String::new();
            while let Some(c) = self.current_char() {
                if c.is_ascii_alphabetic() || c == '\'' {
                    break;
                }
                text.push(c);
                self.advance();
            }
            Token::Literal(text)
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Lexes every token up to, but not including, the end of input.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, PatternError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.token == Token::Eof {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }

    /// Returns the current character, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the character after the current one, if any.
    fn peek_char(&self) -> Option<char> {
        let mut chars = self.input[self.position..].chars();
        chars.next();
        chars.next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive characters matching the predicate.
    #[inline]
    fn count_run<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if predicate(ch) {
                count += 1;
                self.advance();
            } else {
                break;
            }
        }
        count
    }

    /// Lexes quoted text ('...'), or a lone doubled quote ('').
    fn lex_quoted(&mut self) -> Result<Token, PatternError> {
        let start = self.position;
        if self.peek_char() == Some('\'') {
            self.advance();
            self.advance();
            return Ok(Token::Quoted("'".to_string()));
        }
        self.advance(); // Skip the opening quote

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some('\'') if self.peek_char() == Some('\'') => {
                    content.push('\'');
                    self.advance();
                    self.advance();
                }
                Some('\'') => {
                    self.advance(); // Skip the closing quote
                    return Ok(Token::Quoted(content));
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(PatternError::UnterminatedQuote { position: start }),
            }
        }
    }
}
