//! The closed set of formatter properties an engine understands.
//!
//! Every overridable setting of a [`DateFormatter`](crate::DateFormatter) is
//! described by one [`PropertyKey`]. The table is the single source of truth
//! for storage slots, value kinds, engine-facing names and the order in which
//! overrides are applied to a freshly created handle.

use std::fmt;

/// The kind of value a property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    String,
    Strings,
    Date,
    Calendar,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
            ValueKind::Strings => "string sequence",
            ValueKind::Date => "date",
            ValueKind::Calendar => "calendar",
        };
        f.write_str(name)
    }
}

/// A property of an engine handle.
///
/// The declaration order is the application order. It must stay stable:
/// some properties depend on others (the calendar is applied before any era
/// or month symbols).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKey {
    IsLenient,
    TimeZone,
    CalendarName,
    TwoDigitStartDate,
    DefaultDate,
    Calendar,
    EraSymbols,
    MonthSymbols,
    ShortMonthSymbols,
    WeekdaySymbols,
    ShortWeekdaySymbols,
    AmSymbol,
    PmSymbol,
    LongEraSymbols,
    VeryShortMonthSymbols,
    StandaloneMonthSymbols,
    ShortStandaloneMonthSymbols,
    VeryShortStandaloneMonthSymbols,
    VeryShortWeekdaySymbols,
    StandaloneWeekdaySymbols,
    ShortStandaloneWeekdaySymbols,
    VeryShortStandaloneWeekdaySymbols,
    QuarterSymbols,
    ShortQuarterSymbols,
    StandaloneQuarterSymbols,
    ShortStandaloneQuarterSymbols,
    GregorianStartDate,
    DoesRelativeDateFormatting,
}

impl PropertyKey {
    /// Number of property keys.
    pub const COUNT: usize = 28;

    /// All keys, in application order.
    pub const ALL: [PropertyKey; PropertyKey::COUNT] = [
        PropertyKey::IsLenient,
        PropertyKey::TimeZone,
        PropertyKey::CalendarName,
        PropertyKey::TwoDigitStartDate,
        PropertyKey::DefaultDate,
        PropertyKey::Calendar,
        PropertyKey::EraSymbols,
        PropertyKey::MonthSymbols,
        PropertyKey::ShortMonthSymbols,
        PropertyKey::WeekdaySymbols,
        PropertyKey::ShortWeekdaySymbols,
        PropertyKey::AmSymbol,
        PropertyKey::PmSymbol,
        PropertyKey::LongEraSymbols,
        PropertyKey::VeryShortMonthSymbols,
        PropertyKey::StandaloneMonthSymbols,
        PropertyKey::ShortStandaloneMonthSymbols,
        PropertyKey::VeryShortStandaloneMonthSymbols,
        PropertyKey::VeryShortWeekdaySymbols,
        PropertyKey::StandaloneWeekdaySymbols,
        PropertyKey::ShortStandaloneWeekdaySymbols,
        PropertyKey::VeryShortStandaloneWeekdaySymbols,
        PropertyKey::QuarterSymbols,
        PropertyKey::ShortQuarterSymbols,
        PropertyKey::StandaloneQuarterSymbols,
        PropertyKey::ShortStandaloneQuarterSymbols,
        PropertyKey::GregorianStartDate,
        PropertyKey::DoesRelativeDateFormatting,
    ];

    /// Index of this key's storage slot.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The kind of value this property accepts.
    pub fn kind(self) -> ValueKind {
        match self {
            PropertyKey::IsLenient | PropertyKey::DoesRelativeDateFormatting => ValueKind::Bool,
            PropertyKey::TimeZone
            | PropertyKey::CalendarName
            | PropertyKey::AmSymbol
            | PropertyKey::PmSymbol => ValueKind::String,
            PropertyKey::TwoDigitStartDate
            | PropertyKey::DefaultDate
            | PropertyKey::GregorianStartDate => ValueKind::Date,
            PropertyKey::Calendar => ValueKind::Calendar,
            _ => ValueKind::Strings,
        }
    }

    /// Scalar properties always carry a local value and are never answered
    /// by the engine.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            PropertyKey::IsLenient | PropertyKey::DoesRelativeDateFormatting
        )
    }

    /// The stable name the engine knows this property by.
    pub fn name(self) -> &'static str {
        match self {
            PropertyKey::IsLenient => "isLenient",
            PropertyKey::TimeZone => "timeZone",
            PropertyKey::CalendarName => "calendarName",
            PropertyKey::TwoDigitStartDate => "twoDigitStartDate",
            PropertyKey::DefaultDate => "defaultDate",
            PropertyKey::Calendar => "calendar",
            PropertyKey::EraSymbols => "eraSymbols",
            PropertyKey::MonthSymbols => "monthSymbols",
            PropertyKey::ShortMonthSymbols => "shortMonthSymbols",
            PropertyKey::WeekdaySymbols => "weekdaySymbols",
            PropertyKey::ShortWeekdaySymbols => "shortWeekdaySymbols",
            PropertyKey::AmSymbol => "amSymbol",
            PropertyKey::PmSymbol => "pmSymbol",
            PropertyKey::LongEraSymbols => "longEraSymbols",
            PropertyKey::VeryShortMonthSymbols => "veryShortMonthSymbols",
            PropertyKey::StandaloneMonthSymbols => "standaloneMonthSymbols",
            PropertyKey::ShortStandaloneMonthSymbols => "shortStandaloneMonthSymbols",
            PropertyKey::VeryShortStandaloneMonthSymbols => "veryShortStandaloneMonthSymbols",
            PropertyKey::VeryShortWeekdaySymbols => "veryShortWeekdaySymbols",
            PropertyKey::StandaloneWeekdaySymbols => "standaloneWeekdaySymbols",
            PropertyKey::ShortStandaloneWeekdaySymbols => "shortStandaloneWeekdaySymbols",
            PropertyKey::VeryShortStandaloneWeekdaySymbols => "veryShortStandaloneWeekdaySymbols",
            PropertyKey::QuarterSymbols => "quarterSymbols",
            PropertyKey::ShortQuarterSymbols => "shortQuarterSymbols",
            PropertyKey::StandaloneQuarterSymbols => "standaloneQuarterSymbols",
            PropertyKey::ShortStandaloneQuarterSymbols => "shortStandaloneQuarterSymbols",
            PropertyKey::GregorianStartDate => "gregorianStartDate",
            PropertyKey::DoesRelativeDateFormatting => "doesRelativeDateFormatting",
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
