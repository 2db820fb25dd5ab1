//! Typed accessors for the engine-backed properties.

use chrono::{DateTime, Utc};

use super::DateFormatter;
use crate::engine::Engine;
use crate::property::PropertyKey;
use crate::value::{CalendarId, PropertyValue};

macro_rules! symbol_accessors {
    ($($get:ident, $set:ident => $key:ident;)*) => {
        impl<E: Engine> DateFormatter<E> {
            $(
                pub fn $get(&mut self) -> Vec<String> {
                    self.get(PropertyKey::$key)
                        .and_then(PropertyValue::into_strings)
                        .unwrap_or_default()
                }

                pub fn $set(&mut self, symbols: Option<Vec<String>>) {
                    self.set_known(PropertyKey::$key, symbols.map(PropertyValue::Strings));
                }
            )*
        }
    };
}

symbol_accessors! {
    era_symbols, set_era_symbols => EraSymbols;
    long_era_symbols, set_long_era_symbols => LongEraSymbols;
    month_symbols, set_month_symbols => MonthSymbols;
    short_month_symbols, set_short_month_symbols => ShortMonthSymbols;
    very_short_month_symbols, set_very_short_month_symbols => VeryShortMonthSymbols;
    standalone_month_symbols, set_standalone_month_symbols => StandaloneMonthSymbols;
    short_standalone_month_symbols, set_short_standalone_month_symbols => ShortStandaloneMonthSymbols;
    very_short_standalone_month_symbols, set_very_short_standalone_month_symbols => VeryShortStandaloneMonthSymbols;
    weekday_symbols, set_weekday_symbols => WeekdaySymbols;
    short_weekday_symbols, set_short_weekday_symbols => ShortWeekdaySymbols;
    very_short_weekday_symbols, set_very_short_weekday_symbols => VeryShortWeekdaySymbols;
    standalone_weekday_symbols, set_standalone_weekday_symbols => StandaloneWeekdaySymbols;
    short_standalone_weekday_symbols, set_short_standalone_weekday_symbols => ShortStandaloneWeekdaySymbols;
    very_short_standalone_weekday_symbols, set_very_short_standalone_weekday_symbols => VeryShortStandaloneWeekdaySymbols;
    quarter_symbols, set_quarter_symbols => QuarterSymbols;
    short_quarter_symbols, set_short_quarter_symbols => ShortQuarterSymbols;
    standalone_quarter_symbols, set_standalone_quarter_symbols => StandaloneQuarterSymbols;
    short_standalone_quarter_symbols, set_short_standalone_quarter_symbols => ShortStandaloneQuarterSymbols;
}

impl<E: Engine> DateFormatter<E> {
    pub fn am_symbol(&mut self) -> String {
        self.get(PropertyKey::AmSymbol)
            .and_then(PropertyValue::into_string)
            .unwrap_or_default()
    }

    pub fn set_am_symbol(&mut self, symbol: Option<&str>) {
        self.set_known(PropertyKey::AmSymbol, symbol.map(PropertyValue::from));
    }

    pub fn pm_symbol(&mut self) -> String {
        self.get(PropertyKey::PmSymbol)
            .and_then(PropertyValue::into_string)
            .unwrap_or_default()
    }

    pub fn set_pm_symbol(&mut self, symbol: Option<&str>) {
        self.set_known(PropertyKey::PmSymbol, symbol.map(PropertyValue::from));
    }

    /// The time zone identifier, from the override or the engine.
    pub fn time_zone(&mut self) -> Option<String> {
        self.get(PropertyKey::TimeZone)
            .and_then(PropertyValue::into_string)
    }

    pub fn set_time_zone(&mut self, zone: Option<&str>) {
        self.set_known(PropertyKey::TimeZone, zone.map(PropertyValue::from));
    }

    pub fn calendar(&mut self) -> Option<CalendarId> {
        self.get(PropertyKey::Calendar)
            .and_then(PropertyValue::into_calendar)
    }

    /// Overrides the calendar and the calendar name together.
    pub fn set_calendar(&mut self, calendar: Option<CalendarId>) {
        let name = calendar
            .as_ref()
            .map(|c| PropertyValue::String(c.as_str().to_string()));
        self.set_known(PropertyKey::CalendarName, name);
        self.set_known(PropertyKey::Calendar, calendar.map(PropertyValue::Calendar));
    }

    pub fn two_digit_start_date(&mut self) -> Option<DateTime<Utc>> {
        self.date_property(PropertyKey::TwoDigitStartDate)
    }

    pub fn set_two_digit_start_date(&mut self, date: Option<DateTime<Utc>>) {
        self.set_known(PropertyKey::TwoDigitStartDate, date.map(PropertyValue::Date));
    }

    pub fn default_date(&mut self) -> Option<DateTime<Utc>> {
        self.date_property(PropertyKey::DefaultDate)
    }

    pub fn set_default_date(&mut self, date: Option<DateTime<Utc>>) {
        self.set_known(PropertyKey::DefaultDate, date.map(PropertyValue::Date));
    }

    pub fn gregorian_start_date(&mut self) -> Option<DateTime<Utc>> {
        self.date_property(PropertyKey::GregorianStartDate)
    }

    pub fn set_gregorian_start_date(&mut self, date: Option<DateTime<Utc>>) {
        self.set_known(PropertyKey::GregorianStartDate, date.map(PropertyValue::Date));
    }

    fn date_property(&mut self, key: PropertyKey) -> Option<DateTime<Utc>> {
        self.get(key).as_ref().and_then(PropertyValue::as_date)
    }
}
