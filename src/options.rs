//! Formatter options and configuration.

use crate::error::FormatterError;
use crate::property::PropertyKey;
use crate::value::PropertyValue;

/// A coarse-grained formatting preset, mapped to a locale-specific pattern
/// by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Style {
    #[default]
    None,
    Short,
    Medium,
    Long,
    Full,
}

impl Style {
    /// The engine ordinal of this style (`None` = 0 through `Full` = 4).
    pub fn ordinal(self) -> u8 {
        match self {
            Style::None => 0,
            Style::Short => 1,
            Style::Medium => 2,
            Style::Long => 3,
            Style::Full => 4,
        }
    }

    /// Returns the style with the given engine ordinal.
    pub fn from_ordinal(ordinal: u8) -> Option<Style> {
        match ordinal {
            0 => Some(Style::None),
            1 => Some(Style::Short),
            2 => Some(Style::Medium),
            3 => Some(Style::Long),
            4 => Some(Style::Full),
            _ => None,
        }
    }
}

/// Where a formatted string is going to be used.
///
/// Stored for callers that inspect it; it does not affect the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormattingContext {
    #[default]
    Unknown,
    Dynamic,
    Standalone,
    ListItem,
    BeginningOfSentence,
    MiddleOfSentence,
}

/// The mutable configuration an engine handle is built from.
///
/// Each property slot is either unset (the engine owns the value) or holds an
/// override. Scalar properties (see [`PropertyKey::is_scalar`]) are always
/// set.
#[derive(Debug, Clone)]
pub struct FormatterOptions {
    pub date_style: Style,
    pub time_style: Style,
    pub generates_calendar_dates: bool,
    pub formatting_context: FormattingContext,
    /// An explicit pattern, applied after the style-derived one.
    pub pattern: Option<String>,
    /// The locale identifier; the engine's default locale when unset.
    pub locale: Option<String>,
    slots: [Option<PropertyValue>; PropertyKey::COUNT],
}

impl Default for FormatterOptions {
    fn default() -> Self {
        let mut slots: [Option<PropertyValue>; PropertyKey::COUNT] = Default::default();
        for key in PropertyKey::ALL {
            if key.is_scalar() {
                slots[key.index()] = Some(PropertyValue::Bool(false));
            }
        }
        FormatterOptions {
            date_style: Style::None,
            time_style: Style::None,
            generates_calendar_dates: false,
            formatting_context: FormattingContext::Unknown,
            pattern: None,
            locale: None,
            slots,
        }
    }
}

impl FormatterOptions {
    /// Returns the local value of a property, if one is set.
    pub fn get(&self, key: PropertyKey) -> Option<&PropertyValue> {
        self.slots[key.index()].as_ref()
    }

    /// Stores an override after checking that its kind matches the key.
    pub fn set(&mut self, key: PropertyKey, value: PropertyValue) -> Result<(), FormatterError> {
        if value.kind() != key.kind() {
            return Err(FormatterError::KindMismatch {
                key,
                expected: key.kind(),
                got: value.kind(),
            });
        }
        self.slots[key.index()] = Some(value);
        Ok(())
    }

    /// Removes an override. Scalar properties fall back to `false`.
    pub fn clear(&mut self, key: PropertyKey) {
        self.slots[key.index()] = if key.is_scalar() {
            Some(PropertyValue::Bool(false))
        } else {
            None
        };
    }

    /// Iterates the set properties in application order.
    pub fn overrides(&self) -> impl Iterator<Item = (PropertyKey, &PropertyValue)> + '_ {
        PropertyKey::ALL
            .into_iter()
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }

    pub fn is_lenient(&self) -> bool {
        self.flag(PropertyKey::IsLenient)
    }

    pub fn does_relative_date_formatting(&self) -> bool {
        self.flag(PropertyKey::DoesRelativeDateFormatting)
    }

    fn flag(&self, key: PropertyKey) -> bool {
        self.get(key).and_then(PropertyValue::as_bool).unwrap_or(false)
    }
}
