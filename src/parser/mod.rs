//! Parser for UTS #35 date patterns.

pub mod lexer;
pub mod tokens;

use crate::ast::{Field, FieldKind, Item, Pattern};
use crate::error::PatternError;
use lexer::Lexer;
use tokens::Token;

/// Parse a pattern string into a compiled [`Pattern`].
///
/// Adjacent literal runs are merged. An empty pattern compiles to an empty
/// item list.
pub fn parse(pattern: &str) -> Result<Pattern, PatternError> {
    let mut items: Vec<Item> = Vec::new();
    for spanned in Lexer::new(pattern).tokenize()? {
        match spanned.token {
            Token::Field { letter, width } => {
                let kind = FieldKind::from_letter(letter).ok_or(PatternError::UnknownField {
                    position: spanned.start,
                    found: letter,
                })?;
                items.push(Item::Field(Field {
                    kind,
                    letter,
                    width,
                }));
            }
            Token::Literal(text) | Token::Quoted(text) => {
                if let Some(Item::Literal(prev)) = items.last_mut() {
                    prev.push_str(&text);
                } else if !text.is_empty() {
                    items.push(Item::Literal(text));
                }
            }
            Token::Eof => break,
        }
    }
    Ok(Pattern { items })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merges_literals() {
        let pattern = parse("h 'o''clock' a").unwrap();
        assert_eq!(pattern.items().len(), 3);
        assert_eq!(pattern.items()[1], Item::Literal(" o'clock ".to_string()));
    }

    #[test]
    fn test_unknown_letter() {
        assert_eq!(
            parse("yyyy-MM-dd bb"),
            Err(PatternError::UnknownField {
                position: 11,
                found: 'b'
            })
        );
    }

    #[test]
    fn test_empty_pattern() {
        assert!(parse("").unwrap().items().is_empty());
    }
}
