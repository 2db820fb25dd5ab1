//! A compact reference engine.
//!
//! [`BuiltinEngine`] renders and parses UTS #35 patterns in the proleptic
//! Gregorian calendar with fixed-offset time zones, using the locale tables
//! bundled with this crate. It exists so that a [`DateFormatter`] works out
//! of the box; any other [`Engine`] can take its place.
//!
//! [`DateFormatter`]: crate::DateFormatter

mod render;
mod scan;
mod template;
mod zone;

use std::collections::BTreeMap;
use std::env;

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::ast::Pattern;
use crate::cache;
use crate::engine::{Engine, Handle, ParsedDate};
use crate::locale::{self, LocaleData};
use crate::options::Style;
use crate::property::{PropertyKey, ValueKind};
use crate::value::{CalendarId, PropertyValue};

pub use zone::Zone;

/// Where "now" comes from, for relative dates and the two-digit year window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(now) => *now,
        }
    }
}

/// The bundled engine.
#[derive(Debug, Clone)]
pub struct BuiltinEngine {
    default_locale: String,
    default_zone: Zone,
    clock: Clock,
}

impl Default for BuiltinEngine {
    fn default() -> Self {
        BuiltinEngine {
            default_locale: "en_US".to_string(),
            default_zone: Zone::utc(),
            clock: Clock::System,
        }
    }
}

impl BuiltinEngine {
    /// An engine defaulting to `en_US`, UTC and the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine configured from `LC_ALL`, `LC_TIME` or `LANG`, and `TZ`.
    pub fn from_env() -> Self {
        let mut engine = Self::default();
        let locale = ["LC_ALL", "LC_TIME", "LANG"]
            .into_iter()
            .find_map(|name| env::var(name).ok().filter(|v| !v.is_empty()).map(|v| (name, v)));
        match locale {
            Some((_, value)) if matches!(value.split('.').next(), Some("C" | "POSIX")) => {
                log::trace!("POSIX locale in environment, using `en_US`");
            }
            Some((name, value)) => {
                log::trace!("setting default locale to `{value}` from `{name}`");
                engine.default_locale = locale::normalize(&value);
            }
            None => log::trace!("no locale in environment, using `en_US`"),
        }
        if let Ok(tz) = env::var("TZ") {
            match Zone::from_id(&tz) {
                Some(zone) => {
                    log::trace!("setting default time zone to `{tz}` from `TZ`");
                    engine.default_zone = zone;
                }
                None => log::warn!("unsupported `TZ` value `{tz}`, using UTC"),
            }
        }
        engine
    }

    /// Sets the locale used by formatters that do not override it.
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.default_locale = locale.to_string();
        self
    }

    /// Sets the time zone used by formatters that do not override it.
    ///
    /// Unsupported identifiers are ignored with a warning.
    pub fn with_time_zone(mut self, id: &str) -> Self {
        match Zone::from_id(id) {
            Some(zone) => self.default_zone = zone,
            None => log::warn!("unsupported time zone `{id}`, keeping `{}`", self.default_zone.id()),
        }
        self
    }

    /// Pins "now" to a fixed instant.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.clock = Clock::Fixed(now);
        self
    }
}

impl Engine for BuiltinEngine {
    type Handle = BuiltinHandle;

    fn default_locale(&self) -> String {
        self.default_locale.clone()
    }

    fn create_handle(&self, locale_id: &str, date_style: Style, time_style: Style) -> BuiltinHandle {
        let data = locale::resolve(locale_id);
        let pattern = style_pattern(data, date_style, time_style, None);
        let compiled = compile(&pattern);
        BuiltinHandle {
            locale_id: locale_id.to_string(),
            locale: data,
            date_style,
            time_style,
            pattern,
            compiled,
            explicit_pattern: false,
            symbols: Symbols::from_locale(data),
            zone: self.default_zone.clone(),
            calendar: CalendarId::gregorian(),
            lenient: false,
            relative: false,
            two_digit_start: None,
            default_date: None,
            gregorian_start: gregorian_reform(),
            clock: self.clock.clone(),
        }
    }

    fn derive_template_pattern(&self, locale_id: &str, template: &str, _options: u64) -> Option<String> {
        template::derive(locale::resolve(locale_id), template)
    }
}

/// Month, weekday, quarter and era names, plus AM/PM.
#[derive(Debug, Clone)]
pub(crate) struct Symbols {
    lists: BTreeMap<PropertyKey, Vec<String>>,
    am: String,
    pm: String,
}

impl Symbols {
    fn from_locale(data: &LocaleData) -> Symbols {
        let owned = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let lists = BTreeMap::from([
            (PropertyKey::EraSymbols, owned(&data.era_names_short)),
            (PropertyKey::LongEraSymbols, owned(&data.era_names_full)),
            (PropertyKey::MonthSymbols, owned(&data.month_names_full)),
            (PropertyKey::ShortMonthSymbols, owned(&data.month_names_short)),
            (PropertyKey::VeryShortMonthSymbols, owned(&data.month_names_narrow)),
            (PropertyKey::StandaloneMonthSymbols, owned(&data.standalone_month_names_full)),
            (PropertyKey::ShortStandaloneMonthSymbols, owned(&data.standalone_month_names_short)),
            (PropertyKey::VeryShortStandaloneMonthSymbols, owned(&data.standalone_month_names_narrow)),
            (PropertyKey::WeekdaySymbols, owned(&data.day_names_full)),
            (PropertyKey::ShortWeekdaySymbols, owned(&data.day_names_short)),
            (PropertyKey::VeryShortWeekdaySymbols, owned(&data.day_names_narrow)),
            (PropertyKey::StandaloneWeekdaySymbols, owned(&data.standalone_day_names_full)),
            (PropertyKey::ShortStandaloneWeekdaySymbols, owned(&data.standalone_day_names_short)),
            (PropertyKey::VeryShortStandaloneWeekdaySymbols, owned(&data.standalone_day_names_narrow)),
            (PropertyKey::QuarterSymbols, owned(&data.quarter_names_full)),
            (PropertyKey::ShortQuarterSymbols, owned(&data.quarter_names_short)),
            (PropertyKey::StandaloneQuarterSymbols, owned(&data.standalone_quarter_names_full)),
            (PropertyKey::ShortStandaloneQuarterSymbols, owned(&data.standalone_quarter_names_short)),
        ]);
        Symbols {
            lists,
            am: data.am_string.to_string(),
            pm: data.pm_string.to_string(),
        }
    }

    /// The list for a symbol key, or an empty slice.
    pub(crate) fn list(&self, key: PropertyKey) -> &[String] {
        self.lists.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn am(&self) -> &str {
        &self.am
    }

    pub(crate) fn pm(&self) -> &str {
        &self.pm
    }
}

/// Formatter state built by [`BuiltinEngine::create_handle`].
#[derive(Debug, Clone)]
pub struct BuiltinHandle {
    locale_id: String,
    locale: &'static LocaleData,
    date_style: Style,
    time_style: Style,
    pattern: String,
    compiled: Option<Pattern>,
    explicit_pattern: bool,
    symbols: Symbols,
    zone: Zone,
    calendar: CalendarId,
    lenient: bool,
    relative: bool,
    two_digit_start: Option<DateTime<Utc>>,
    default_date: Option<DateTime<Utc>>,
    gregorian_start: DateTime<Utc>,
    clock: Clock,
}

impl BuiltinHandle {
    /// The locale identifier this handle was created for.
    pub fn locale_id(&self) -> &str {
        &self.locale_id
    }

    /// The time zone rendering and parsing happen in.
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// The start of the hundred-year window for two-digit years.
    fn two_digit_start(&self) -> DateTime<Utc> {
        if let Some(start) = self.two_digit_start {
            return start;
        }
        let year = self.clock.now().year() - 80;
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl Handle for BuiltinHandle {
    fn set_property(&mut self, key: PropertyKey, value: &PropertyValue) {
        if value.kind() != key.kind() {
            log::warn!("ignoring {} value for property {key}", value.kind());
            return;
        }
        match (key, value) {
            (PropertyKey::IsLenient, PropertyValue::Bool(b)) => self.lenient = *b,
            (PropertyKey::DoesRelativeDateFormatting, PropertyValue::Bool(b)) => self.relative = *b,
            (PropertyKey::TimeZone, PropertyValue::String(id)) => match Zone::from_id(id) {
                Some(zone) => self.zone = zone,
                None => log::warn!("unsupported time zone `{id}`, keeping `{}`", self.zone.id()),
            },
            (PropertyKey::CalendarName, PropertyValue::String(name)) => {
                self.set_calendar(CalendarId::new(name.as_str()))
            }
            (PropertyKey::Calendar, PropertyValue::Calendar(calendar)) => {
                self.set_calendar(calendar.clone())
            }
            (PropertyKey::TwoDigitStartDate, PropertyValue::Date(d)) => self.two_digit_start = Some(*d),
            (PropertyKey::DefaultDate, PropertyValue::Date(d)) => self.default_date = Some(*d),
            (PropertyKey::GregorianStartDate, PropertyValue::Date(d)) => self.gregorian_start = *d,
            (PropertyKey::AmSymbol, PropertyValue::String(s)) => self.symbols.am = s.clone(),
            (PropertyKey::PmSymbol, PropertyValue::String(s)) => self.symbols.pm = s.clone(),
            (key, PropertyValue::Strings(list)) => {
                self.symbols.lists.insert(key, list.clone());
            }
            _ => log::warn!("ignoring unsupported property {key}"),
        }
    }

    fn set_pattern(&mut self, pattern: &str) {
        self.pattern = pattern.to_string();
        self.compiled = compile(pattern);
        self.explicit_pattern = true;
    }

    fn pattern(&self) -> String {
        self.pattern.clone()
    }

    fn copy_property(&self, key: PropertyKey) -> Option<PropertyValue> {
        let value = match key {
            PropertyKey::IsLenient => PropertyValue::Bool(self.lenient),
            PropertyKey::DoesRelativeDateFormatting => PropertyValue::Bool(self.relative),
            PropertyKey::TimeZone => PropertyValue::String(self.zone.id().to_string()),
            PropertyKey::CalendarName => PropertyValue::String(self.calendar.to_string()),
            PropertyKey::Calendar => PropertyValue::Calendar(self.calendar.clone()),
            PropertyKey::TwoDigitStartDate => PropertyValue::Date(self.two_digit_start()),
            PropertyKey::DefaultDate => PropertyValue::Date(self.default_date?),
            PropertyKey::GregorianStartDate => PropertyValue::Date(self.gregorian_start),
            PropertyKey::AmSymbol => PropertyValue::String(self.symbols.am.clone()),
            PropertyKey::PmSymbol => PropertyValue::String(self.symbols.pm.clone()),
            key if key.kind() == ValueKind::Strings => {
                PropertyValue::Strings(self.symbols.list(key).to_vec())
            }
            _ => return None,
        };
        Some(value)
    }

    fn render(&self, date: &DateTime<Utc>) -> String {
        let local = date.with_timezone(&self.zone.offset());
        if let Some(pattern) = self.relative_pattern(&local) {
            return self.render_pattern(&pattern, &local);
        }
        match &self.compiled {
            Some(pattern) => self.render_pattern(pattern, &local),
            None => String::new(),
        }
    }

    fn parse(&self, text: &str, start: usize) -> Option<ParsedDate> {
        let pattern = self.compiled.as_ref()?;
        if start > text.len() || !text.is_char_boundary(start) {
            return None;
        }
        self.scan(pattern, text, start)
    }
}

impl BuiltinHandle {
    fn set_calendar(&mut self, calendar: CalendarId) {
        match calendar.as_str() {
            "gregorian" | "iso8601" => self.calendar = calendar,
            other => log::warn!("unsupported calendar `{other}`, keeping `{}`", self.calendar),
        }
    }

    /// The pattern to use when the date falls on a relative day.
    fn relative_pattern(&self, local: &DateTime<chrono::FixedOffset>) -> Option<Pattern> {
        if !self.relative || self.explicit_pattern || self.date_style == Style::None {
            return None;
        }
        let today = self.clock.now().with_timezone(&self.zone.offset()).date_naive();
        let days = local.date_naive().signed_duration_since(today).num_days();
        let word = match days {
            -1 => self.locale.relative_days[0],
            0 => self.locale.relative_days[1],
            1 => self.locale.relative_days[2],
            _ => return None,
        };
        let mut quoted = String::new();
        crate::ast::write_literal(&mut quoted, word);
        let pattern = style_pattern(self.locale, self.date_style, self.time_style, Some(&quoted));
        compile(&pattern)
    }
}

/// Builds the pattern for a style pair, optionally replacing the date part.
fn style_pattern(
    data: &LocaleData,
    date_style: Style,
    time_style: Style,
    date_override: Option<&str>,
) -> String {
    let index = |style: Style| usize::from(style.ordinal()).saturating_sub(1);
    let date = match date_override {
        Some(text) => text,
        None => data.date_patterns[index(date_style)],
    };
    let time = data.time_patterns[index(time_style)];
    match (date_style, time_style) {
        (Style::None, Style::None) => String::new(),
        (_, Style::None) => date.to_string(),
        (Style::None, _) => time.to_string(),
        (_, _) => data.date_time_patterns[index(date_style)]
            .replace("{1}", date)
            .replace("{0}", time),
    }
}

fn compile(pattern: &str) -> Option<Pattern> {
    match cache::get_or_parse(pattern) {
        Ok(compiled) => Some(compiled),
        Err(err) => {
            log::warn!("invalid date pattern `{pattern}`: {err}");
            None
        }
    }
}

fn gregorian_reform() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1582, 10, 15, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
