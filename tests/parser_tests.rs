//! Tests for the date pattern parser.
#![cfg(feature = "builtin")]

use datefmt::ast::{Field, FieldKind, Item};
use datefmt::{Pattern, PatternError};

fn field(kind: FieldKind, letter: char, width: usize) -> Item {
    Item::Field(Field {
        kind,
        letter,
        width,
    })
}

fn literal(text: &str) -> Item {
    Item::Literal(text.to_string())
}

#[test]
fn test_parse_medium_date_time() {
    let pattern = Pattern::parse("MMM d, y, h:mm a").unwrap();
    assert_eq!(
        pattern.items(),
        &[
            field(FieldKind::Month, 'M', 3),
            literal(" "),
            field(FieldKind::Day, 'd', 1),
            literal(", "),
            field(FieldKind::Year, 'y', 1),
            literal(", "),
            field(FieldKind::Hour12, 'h', 1),
            literal(":"),
            field(FieldKind::Minute, 'm', 2),
            literal(" "),
            field(FieldKind::AmPm, 'a', 1),
        ]
    );
}

#[test]
fn test_parse_merges_quoted_literals() {
    let pattern = Pattern::parse("MMMM d, y 'at' h:mm a").unwrap();
    assert_eq!(pattern.items()[5], literal(" at "));
}

#[test]
fn test_parse_every_letter() {
    let pattern = Pattern::parse("G y Y u Q q M L d D E e c a h H K k m s S z Z O X x v V").unwrap();
    let fields = pattern
        .items()
        .iter()
        .filter(|item| matches!(item, Item::Field(_)))
        .count();
    assert_eq!(fields, 28);
    assert!(pattern.has_field(FieldKind::ZoneGeneric));
    assert!(pattern.has_field(FieldKind::ExtendedYear));
    assert!(!Pattern::parse("HH:mm").unwrap().has_field(FieldKind::Year));
}

#[test]
fn test_parse_zone_kinds() {
    for letter in ['z', 'Z', 'O', 'X', 'x', 'v', 'V'] {
        assert!(FieldKind::from_letter(letter).unwrap().is_zone(), "{letter}");
    }
    assert!(!FieldKind::Hour12.is_zone());
}

#[test]
fn test_parse_rejects_unknown_letters() {
    assert_eq!(
        Pattern::parse("yyyy-ww"),
        Err(PatternError::UnknownField {
            position: 5,
            found: 'w'
        })
    );
    assert!(Pattern::parse("y 'unknown letters are fine when quoted'").is_ok());
}

#[test]
fn test_parse_unterminated_quote() {
    assert_eq!(
        Pattern::parse("h 'o''clock"),
        Err(PatternError::UnterminatedQuote { position: 2 })
    );
}

#[test]
fn test_pattern_string_round_trip() {
    for text in ["MMM d, y", "h:mm:ss a zzzz", "EEEE, d. MMMM y", "y-MM-dd'T'HH", "''yy"] {
        let pattern = Pattern::parse(text).unwrap();
        assert_eq!(pattern.to_pattern_string(), text);
    }
    // Quoting is normalized around whole literal runs.
    let pattern = Pattern::parse("hh 'o''clock' a").unwrap();
    assert_eq!(pattern.to_pattern_string(), "hh' o''clock 'a");
    assert_eq!(Pattern::parse(&pattern.to_pattern_string()).unwrap(), pattern);
}
