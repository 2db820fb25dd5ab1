use datefmt::{FormatterOptions, FormattingContext, PropertyKey, PropertyValue, Style};

#[test]
fn test_default_options() {
    let opts = FormatterOptions::default();
    assert_eq!(opts.date_style, Style::None);
    assert_eq!(opts.time_style, Style::None);
    assert_eq!(opts.formatting_context, FormattingContext::Unknown);
    assert!(!opts.generates_calendar_dates);
    assert_eq!(opts.pattern, None);
    assert_eq!(opts.locale, None);
    assert!(!opts.is_lenient());
    assert!(!opts.does_relative_date_formatting());
}

#[test]
fn test_overrides_follow_table_order() {
    let mut opts = FormatterOptions::default();
    opts.set(PropertyKey::PmSymbol, "pm".into()).unwrap();
    opts.set(PropertyKey::TimeZone, "UTC".into()).unwrap();
    opts.set(PropertyKey::EraSymbols, ["BCE", "CE"].into()).unwrap();

    let keys: Vec<PropertyKey> = opts.overrides().map(|(key, _)| key).collect();
    assert_eq!(
        keys,
        vec![
            PropertyKey::IsLenient,
            PropertyKey::TimeZone,
            PropertyKey::EraSymbols,
            PropertyKey::PmSymbol,
            PropertyKey::DoesRelativeDateFormatting,
        ]
    );
}

#[test]
fn test_clear_non_scalar_unsets() {
    let mut opts = FormatterOptions::default();
    opts.set(PropertyKey::AmSymbol, "am".into()).unwrap();
    assert_eq!(opts.get(PropertyKey::AmSymbol), Some(&PropertyValue::from("am")));
    opts.clear(PropertyKey::AmSymbol);
    assert_eq!(opts.get(PropertyKey::AmSymbol), None);
}

#[test]
fn test_property_table() {
    assert_eq!(PropertyKey::ALL.len(), PropertyKey::COUNT);
    for (i, key) in PropertyKey::ALL.into_iter().enumerate() {
        assert_eq!(key.index(), i);
    }
    assert_eq!(PropertyKey::ALL[0], PropertyKey::IsLenient);
    assert_eq!(PropertyKey::ALL[PropertyKey::COUNT - 1], PropertyKey::DoesRelativeDateFormatting);
    let scalars: Vec<PropertyKey> = PropertyKey::ALL.into_iter().filter(|k| k.is_scalar()).collect();
    assert_eq!(scalars, vec![PropertyKey::IsLenient, PropertyKey::DoesRelativeDateFormatting]);
}
