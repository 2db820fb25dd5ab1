//! Deriving patterns from skeletons.
#![cfg(feature = "builtin")]

use datefmt::{date_format_from_template, BuiltinEngine, DateFormatter};

fn derive(template: &str, locale: &str) -> Option<String> {
    DateFormatter::date_format_from_template(&BuiltinEngine::new(), template, 0, Some(locale))
}

#[test]
fn test_en_us_skeletons() {
    assert_eq!(derive("yMMMd", "en_US").as_deref(), Some("MMM d, y"));
    assert_eq!(derive("yMd", "en_US").as_deref(), Some("M/d/y"));
    assert_eq!(derive("MMMMd", "en_US").as_deref(), Some("MMMM d"));
    assert_eq!(derive("yQQQ", "en_US").as_deref(), Some("QQQ y"));
    assert_eq!(derive("jms", "en_US").as_deref(), Some("h:mm:ss a"));
}

#[test]
fn test_letter_order_does_not_matter() {
    assert_eq!(derive("dMMMy", "en_US"), derive("yMMMd", "en_US"));
    assert_eq!(derive("EdMMMy", "en_US").as_deref(), Some("E, MMM d, y"));
}

#[test]
fn test_other_locales() {
    assert_eq!(derive("yMMMd", "de_DE").as_deref(), Some("d. MMM y"));
    assert_eq!(derive("yMMMd", "de").as_deref(), Some("d. MMM y"));
    assert_eq!(derive("jm", "de_DE").as_deref(), Some("HH:mm"));
    assert_eq!(derive("jm", "fr_FR").as_deref(), Some("HH:mm"));
}

#[test]
fn test_unknown_locale_falls_back_to_en_us() {
    assert_eq!(derive("yMMMd", "xx_XX").as_deref(), Some("MMM d, y"));
}

#[test]
fn test_date_and_time_are_joined() {
    assert_eq!(derive("yMMMdjm", "en_US").as_deref(), Some("MMM d, y, h:mm a"));
    assert_eq!(derive("yMdHm", "de_DE").as_deref(), Some("d.M.y, HH:mm"));
    assert_eq!(derive("yMMMMdHmz", "de_DE").as_deref(), Some("d. MMMM y 'um' HH:mm z"));
}

#[test]
fn test_two_digit_request_is_kept() {
    assert_eq!(derive("yMMdd", "en_US").as_deref(), Some("MM/dd/y"));
    assert_eq!(derive("hhmm", "en_US").as_deref(), Some("hh:mm a"));
}

#[test]
fn test_unresolvable_templates() {
    assert_eq!(derive("", "en_US"), None);
    assert_eq!(derive("W", "en_US"), None);
    assert_eq!(derive("yw", "en_US"), None);
}

#[test]
fn test_free_function_with_explicit_locale() {
    assert_eq!(
        date_format_from_template("yMMMd", 0, Some("en_US")).as_deref(),
        Some("MMM d, y")
    );
    assert_eq!(
        date_format_from_template("yMMMd", 0xff, Some("fr_FR")),
        derive("yMMMd", "fr_FR")
    );
}
