//! Tests for the formatter's invalidate-on-write cache, using a spy engine
//! that records every call the formatter makes.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use datefmt::{
    CalendarId, DateFormatter, Engine, FormatterError, FormattingContext, Handle, ParsedDate,
    PropertyKey, PropertyValue, Style, ValueKind,
};

#[derive(Debug, Default)]
struct Calls {
    created: Cell<usize>,
    copied: Cell<usize>,
    /// What the most recent handle was configured with, in order.
    applied: RefCell<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
struct SpyEngine {
    calls: Rc<Calls>,
}

impl SpyEngine {
    fn created(&self) -> usize {
        self.calls.created.get()
    }

    fn copied(&self) -> usize {
        self.calls.copied.get()
    }

    fn applied(&self) -> Vec<String> {
        self.calls.applied.borrow().clone()
    }
}

struct SpyHandle {
    calls: Rc<Calls>,
    locale: String,
    date_style: Style,
    time_style: Style,
    pattern: Option<String>,
    properties: BTreeMap<PropertyKey, PropertyValue>,
}

impl Engine for SpyEngine {
    type Handle = SpyHandle;

    fn default_locale(&self) -> String {
        "xx_SPY".to_string()
    }

    fn create_handle(&self, locale: &str, date_style: Style, time_style: Style) -> SpyHandle {
        self.calls.created.set(self.calls.created.get() + 1);
        self.calls.applied.borrow_mut().clear();
        SpyHandle {
            calls: Rc::clone(&self.calls),
            locale: locale.to_string(),
            date_style,
            time_style,
            pattern: None,
            properties: BTreeMap::new(),
        }
    }

    fn derive_template_pattern(&self, locale: &str, template: &str, options: u64) -> Option<String> {
        if template.is_empty() {
            return None;
        }
        Some(format!("{locale}:{template}:{options}"))
    }
}

impl Handle for SpyHandle {
    fn set_property(&mut self, key: PropertyKey, value: &PropertyValue) {
        self.calls.applied.borrow_mut().push(key.name().to_string());
        self.properties.insert(key, value.clone());
    }

    fn set_pattern(&mut self, pattern: &str) {
        self.calls.applied.borrow_mut().push("pattern".to_string());
        self.pattern = Some(pattern.to_string());
    }

    fn pattern(&self) -> String {
        match &self.pattern {
            Some(pattern) => pattern.clone(),
            None => format!("{:?}/{:?}", self.date_style, self.time_style),
        }
    }

    fn copy_property(&self, key: PropertyKey) -> Option<PropertyValue> {
        self.calls.copied.set(self.calls.copied.get() + 1);
        if let Some(value) = self.properties.get(&key) {
            return Some(value.clone());
        }
        match key {
            PropertyKey::TimeZone => Some(PropertyValue::from("Engine/Zone")),
            PropertyKey::MonthSymbols => Some(PropertyValue::from(["engine-month"])),
            PropertyKey::Calendar => Some(PropertyValue::Calendar(CalendarId::gregorian())),
            _ => None,
        }
    }

    fn render(&self, date: &DateTime<Utc>) -> String {
        format!("{} {} {}", self.locale, self.pattern(), date.timestamp())
    }

    /// Parses `ts:<seconds>`, stopping at the first non-digit.
    fn parse(&self, text: &str, start: usize) -> Option<ParsedDate> {
        let rest = text[start..].strip_prefix("ts:")?;
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let seconds: i64 = rest[..digits].parse().ok()?;
        Some(ParsedDate {
            date: Utc.timestamp_opt(seconds, 0).single()?,
            consumed: start..start + 3 + digits,
        })
    }
}

type Fmt = DateFormatter<SpyEngine>;

fn formatter() -> (Fmt, SpyEngine) {
    let engine = SpyEngine::default();
    (DateFormatter::new(engine.clone()), engine)
}

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

#[test]
fn test_new_formatter_builds_nothing() {
    let (fmt, engine) = formatter();
    assert!(!fmt.is_fresh());
    assert_eq!(engine.created(), 0);
}

#[test]
fn test_render_twice_builds_once() {
    let (mut fmt, engine) = formatter();
    let first = fmt.string_from(&epoch());
    let second = fmt.string_from(&epoch());
    assert_eq!(first, second);
    assert_eq!(engine.created(), 1);
    assert!(fmt.is_fresh());
}

#[test]
fn test_every_write_forces_exactly_one_rebuild() {
    let (mut fmt, engine) = formatter();
    let writes: Vec<Box<dyn Fn(&mut Fmt)>> = vec![
        Box::new(|f: &mut Fmt| f.set(PropertyKey::TimeZone, "UTC").unwrap()),
        Box::new(|f: &mut Fmt| f.clear(PropertyKey::TimeZone)),
        Box::new(|f: &mut Fmt| f.set_date_style(Style::Short)),
        Box::new(|f: &mut Fmt| f.set_time_style(Style::Long)),
        Box::new(|f: &mut Fmt| f.set_date_format(Some("y"))),
        Box::new(|f: &mut Fmt| f.set_locale(Some("de_DE"))),
        Box::new(|f: &mut Fmt| f.set_lenient(true)),
        Box::new(|f: &mut Fmt| f.set_does_relative_date_formatting(true)),
        Box::new(|f: &mut Fmt| f.set_generates_calendar_dates(true)),
        Box::new(|f: &mut Fmt| f.set_month_symbols(Some(vec!["m".to_string()]))),
        Box::new(|f: &mut Fmt| f.set_am_symbol(Some("a"))),
        Box::new(|f: &mut Fmt| f.set_default_date(Some(DateTime::<Utc>::UNIX_EPOCH))),
        Box::new(|f: &mut Fmt| f.set_calendar(Some(CalendarId::new("iso8601")))),
    ];

    fmt.string_from(&epoch());
    for (i, write) in writes.iter().enumerate() {
        write(&mut fmt);
        assert!(!fmt.is_fresh(), "write #{i} left the handle fresh");
        fmt.string_from(&epoch());
        fmt.string_from(&epoch());
        assert_eq!(engine.created(), i + 2, "write #{i}");
    }
}

#[test]
fn test_writing_an_unchanged_value_still_invalidates() {
    let (mut fmt, engine) = formatter();
    fmt.set_lenient(false);
    fmt.string_from(&epoch());
    fmt.set_lenient(false);
    assert!(!fmt.is_fresh());
    fmt.string_from(&epoch());
    assert_eq!(engine.created(), 2);
}

#[test]
fn test_formatting_context_keeps_handle() {
    let (mut fmt, engine) = formatter();
    fmt.string_from(&epoch());
    fmt.set_formatting_context(FormattingContext::Standalone);
    assert!(fmt.is_fresh());
    assert_eq!(fmt.formatting_context(), FormattingContext::Standalone);
    fmt.string_from(&epoch());
    assert_eq!(engine.created(), 1);
}

#[test]
fn test_override_read_skips_engine() {
    let (mut fmt, engine) = formatter();
    fmt.set(PropertyKey::TimeZone, "Europe/Paris").unwrap();
    assert_eq!(
        fmt.get(PropertyKey::TimeZone),
        Some(PropertyValue::from("Europe/Paris"))
    );
    assert_eq!(engine.copied(), 0);
    assert_eq!(engine.created(), 0);
}

#[test]
fn test_default_read_queries_engine_each_time() {
    let (mut fmt, engine) = formatter();
    assert_eq!(fmt.time_zone().as_deref(), Some("Engine/Zone"));
    assert_eq!(fmt.time_zone().as_deref(), Some("Engine/Zone"));
    assert_eq!(engine.copied(), 2);
    assert_eq!(engine.created(), 1);
}

#[test]
fn test_clear_restores_engine_default() {
    let (mut fmt, _engine) = formatter();
    fmt.set_month_symbols(Some(vec!["Uno".to_string(), "Dos".to_string()]));
    assert_eq!(fmt.month_symbols(), vec!["Uno", "Dos"]);
    fmt.set_month_symbols(None);
    assert_eq!(fmt.month_symbols(), vec!["engine-month"]);
}

#[test]
fn test_scalar_flags_never_consult_engine() {
    let (mut fmt, engine) = formatter();
    assert!(!fmt.is_lenient());
    assert_eq!(fmt.get(PropertyKey::IsLenient), Some(PropertyValue::Bool(false)));
    fmt.set_lenient(true);
    fmt.clear(PropertyKey::IsLenient);
    assert_eq!(fmt.get(PropertyKey::IsLenient), Some(PropertyValue::Bool(false)));
    assert_eq!(engine.copied(), 0);
}

#[test]
fn test_overrides_applied_in_table_order_then_pattern() {
    let (mut fmt, engine) = formatter();
    fmt.set_date_format(Some("yyyy"));
    fmt.set_month_symbols(Some(vec!["m".to_string()]));
    fmt.set_time_zone(Some("UTC"));
    fmt.set_calendar(Some(CalendarId::gregorian()));
    fmt.string_from(&epoch());

    assert_eq!(
        engine.applied(),
        vec![
            "isLenient",
            "timeZone",
            "calendarName",
            "calendar",
            "monthSymbols",
            "doesRelativeDateFormatting",
            "pattern",
        ]
    );
}

#[test]
fn test_handle_sees_locale_and_styles() {
    let (mut fmt, _engine) = formatter();
    fmt.set_date_style(Style::Medium);
    fmt.set_time_style(Style::Short);
    assert_eq!(fmt.string_from(&epoch()), "xx_SPY Medium/Short 0");
    fmt.set_locale(Some("fr_FR"));
    assert_eq!(fmt.locale(), "fr_FR");
    assert_eq!(fmt.string_from(&epoch()), "fr_FR Medium/Short 0");
    fmt.set_locale(None);
    assert_eq!(fmt.locale(), "xx_SPY");
}

#[test]
fn test_style_change_clears_pattern() {
    let (mut fmt, _engine) = formatter();
    fmt.set_date_format(Some("yyyy-MM-dd"));
    assert_eq!(fmt.date_format(), "yyyy-MM-dd");
    fmt.set_date_style(Style::Long);
    assert_eq!(fmt.options().pattern, None);
    assert_eq!(fmt.date_format(), "Long/None");
}

#[test]
fn test_kind_mismatch_is_rejected_without_invalidating() {
    let (mut fmt, _engine) = formatter();
    fmt.string_from(&epoch());
    let err = fmt.set(PropertyKey::MonthSymbols, true).unwrap_err();
    assert_eq!(
        err,
        FormatterError::KindMismatch {
            key: PropertyKey::MonthSymbols,
            expected: ValueKind::Strings,
            got: ValueKind::Bool,
        }
    );
    assert!(fmt.is_fresh());
    assert_eq!(fmt.options().get(PropertyKey::MonthSymbols), None);
}

#[test]
fn test_unsupported_operations_fail_fast() {
    let (mut fmt, engine) = formatter();
    assert!(matches!(
        fmt.object_value("ts:1"),
        Err(FormatterError::Unsupported { operation: "object_value" })
    ));
    assert!(matches!(
        fmt.set_localized_date_format_from_template("yMMMd"),
        Err(FormatterError::Unsupported { .. })
    ));
    assert_eq!(engine.created(), 0);
}

#[test]
fn test_date_from_string_needs_whole_text() {
    let (mut fmt, _engine) = formatter();
    let expected = Utc.timestamp_opt(86400, 0).unwrap();
    assert_eq!(fmt.date_from_string("ts:86400"), Some(expected));
    assert_eq!(fmt.date_from_string("ts:86400 junk"), None);
    assert_eq!(fmt.date_from_string("nope"), None);

    let parsed = fmt.parse_date_with_range("ts:86400 junk").unwrap();
    assert_eq!(parsed.date, expected);
    assert_eq!(parsed.consumed, 0..8);
}

#[test]
fn test_string_for_object_value() {
    let (mut fmt, _engine) = formatter();
    assert_eq!(
        fmt.string_for_object_value(&epoch()).as_deref(),
        Some("xx_SPY None/None 0")
    );
    assert_eq!(fmt.string_for_object_value(&42_i32), None);
    assert_eq!(fmt.string_for_object_value(&"1970-01-01"), None);
}

#[test]
fn test_clone_starts_stale_with_same_options() {
    let (mut fmt, engine) = formatter();
    fmt.set_time_zone(Some("UTC"));
    fmt.string_from(&epoch());
    let mut copy = fmt.clone();
    assert!(!copy.is_fresh());
    assert_eq!(copy.time_zone().as_deref(), Some("UTC"));
    copy.string_from(&epoch());
    assert_eq!(engine.created(), 2);
}

#[test]
fn test_calendar_sets_both_slots() {
    let (mut fmt, engine) = formatter();
    fmt.set_calendar(Some(CalendarId::new("iso8601")));
    assert_eq!(
        fmt.get(PropertyKey::CalendarName),
        Some(PropertyValue::from("iso8601"))
    );
    assert_eq!(fmt.calendar(), Some(CalendarId::new("iso8601")));
    assert_eq!(engine.copied(), 0);
    fmt.set_calendar(None);
    assert_eq!(fmt.calendar(), Some(CalendarId::gregorian()));
}

#[test]
fn test_stateless_helpers() {
    let engine = SpyEngine::default();
    assert_eq!(
        DateFormatter::localized_string(engine.clone(), &epoch(), Style::Full, Style::None),
        "xx_SPY Full/None 0"
    );
    assert_eq!(
        DateFormatter::date_format_from_template(&engine, "yMMMd", 7, Some("de_DE")).as_deref(),
        Some("de_DE:yMMMd:7")
    );
    assert_eq!(
        DateFormatter::date_format_from_template(&engine, "yMMMd", 0, None).as_deref(),
        Some("xx_SPY:yMMMd:0")
    );
    assert_eq!(DateFormatter::date_format_from_template(&engine, "", 0, None), None);
}
