//! The contract with a locale-aware formatting engine.
//!
//! A formatter never formats or parses by itself. It builds one engine
//! [`Handle`] from a snapshot of its options and delegates every render,
//! parse and default-value query to it.

use std::ops::Range;

use chrono::{DateTime, Utc};

use crate::options::Style;
use crate::property::PropertyKey;
use crate::value::PropertyValue;

/// A successful parse: the instant and the byte range of the text consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDate {
    pub date: DateTime<Utc>,
    pub consumed: Range<usize>,
}

/// A factory for formatter handles and stateless pattern queries.
pub trait Engine {
    type Handle: Handle;

    /// The locale used when a formatter does not override it.
    fn default_locale(&self) -> String;

    /// Creates a handle for a locale and a date/time style pair.
    fn create_handle(&self, locale: &str, date_style: Style, time_style: Style) -> Self::Handle;

    /// Derives a concrete pattern from a skeleton such as `yMMMd`.
    ///
    /// `options` is passed through untouched; no flags are defined yet.
    fn derive_template_pattern(&self, locale: &str, template: &str, options: u64)
        -> Option<String>;
}

/// Compiled, engine-owned formatter state.
pub trait Handle {
    /// Applies a property. Values the engine cannot use are ignored.
    fn set_property(&mut self, key: PropertyKey, value: &PropertyValue);

    /// Replaces the style-derived pattern.
    fn set_pattern(&mut self, pattern: &str);

    /// The pattern currently in effect.
    fn pattern(&self) -> String;

    /// The value the engine computes for a property.
    fn copy_property(&self, key: PropertyKey) -> Option<PropertyValue>;

    /// Renders an instant.
    fn render(&self, date: &DateTime<Utc>) -> String;

    /// Parses `text` starting at byte offset `start`.
    fn parse(&self, text: &str, start: usize) -> Option<ParsedDate>;
}
