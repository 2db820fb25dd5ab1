//! Values that can be stored in a formatter property.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::property::ValueKind;

/// Identifier of a calendar system, such as `gregorian`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarId(String);

impl CalendarId {
    /// Creates a calendar identifier.
    pub fn new(id: impl Into<String>) -> Self {
        CalendarId(id.into())
    }

    /// The proleptic Gregorian calendar.
    pub fn gregorian() -> Self {
        CalendarId::new("gregorian")
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value passed to or copied from an engine handle property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    String(String),
    Strings(Vec<String>),
    Date(DateTime<Utc>),
    Calendar(CalendarId),
}

impl PropertyValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            PropertyValue::Bool(_) => ValueKind::Bool,
            PropertyValue::String(_) => ValueKind::String,
            PropertyValue::Strings(_) => ValueKind::Strings,
            PropertyValue::Date(_) => ValueKind::Date,
            PropertyValue::Calendar(_) => ValueKind::Calendar,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            PropertyValue::Strings(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            PropertyValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_calendar(&self) -> Option<&CalendarId> {
        match self {
            PropertyValue::Calendar(c) => Some(c),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_strings(self) -> Option<Vec<String>> {
        match self {
            PropertyValue::Strings(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_calendar(self) -> Option<CalendarId> {
        match self {
            PropertyValue::Calendar(c) => Some(c),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(v: Vec<String>) -> Self {
        PropertyValue::Strings(v)
    }
}

impl From<&[&str]> for PropertyValue {
    fn from(v: &[&str]) -> Self {
        PropertyValue::Strings(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PropertyValue {
    fn from(v: [&str; N]) -> Self {
        PropertyValue::Strings(v.iter().map(|s| s.to_string()).collect())
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(d: DateTime<Utc>) -> Self {
        PropertyValue::Date(d)
    }
}

impl From<CalendarId> for PropertyValue {
    fn from(c: CalendarId) -> Self {
        PropertyValue::Calendar(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_variant() {
        assert_eq!(PropertyValue::from(true).kind(), ValueKind::Bool);
        assert_eq!(PropertyValue::from("AM").kind(), ValueKind::String);
        assert_eq!(PropertyValue::from(["a", "b"]).kind(), ValueKind::Strings);
        assert_eq!(
            PropertyValue::from(CalendarId::gregorian()).kind(),
            ValueKind::Calendar
        );
    }

    #[test]
    fn test_accessors_reject_other_kinds() {
        let v = PropertyValue::from("x");
        assert_eq!(v.as_str(), Some("x"));
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.as_strings(), None);
        assert_eq!(v.into_strings(), None);
    }
}
