//! datefmt - a lazily rebuilt date formatter over a pluggable engine
//!
//! A [`DateFormatter`] keeps its configuration locally and builds an engine
//! handle only when it has to render, parse or answer an engine default.
//! Every configuration write drops the handle, so the next use sees the new
//! settings.
//!
//! With the default `builtin` feature the crate ships [`BuiltinEngine`], a
//! small UTS #35 engine for a few locales with fixed-offset time zones.
//!
//! ```
//! # #[cfg(feature = "builtin")] {
//! use chrono::{TimeZone, Utc};
//! use datefmt::{BuiltinEngine, DateFormatter, Style};
//!
//! let mut formatter = DateFormatter::new(BuiltinEngine::new());
//! formatter.set_date_style(Style::Medium);
//! formatter.set_time_style(Style::Short);
//! let date = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
//! assert_eq!(formatter.string_from(&date), "Mar 15, 2024, 2:30 PM");
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod options;
pub mod property;
pub mod value;

mod formatter;
mod sync;

#[cfg(feature = "builtin")]
pub mod ast;
#[cfg(feature = "builtin")]
pub mod builtin;
#[cfg(feature = "builtin")]
mod cache;
#[cfg(feature = "builtin")]
pub mod locale;
#[cfg(feature = "builtin")]
pub mod parser;

pub use engine::{Engine, Handle, ParsedDate};
pub use error::{FormatterError, PatternError};
pub use formatter::DateFormatter;
pub use options::{FormatterOptions, FormattingContext, Style};
pub use property::{PropertyKey, ValueKind};
pub use sync::SyncDateFormatter;
pub use value::{CalendarId, PropertyValue};

#[cfg(feature = "builtin")]
pub use ast::Pattern;
#[cfg(feature = "builtin")]
pub use builtin::{BuiltinEngine, BuiltinHandle, Zone};

#[cfg(feature = "builtin")]
use chrono::{DateTime, Utc};

/// Renders `date` with the given styles using a [`BuiltinEngine`] configured
/// from the environment.
#[cfg(feature = "builtin")]
pub fn localized_string(date: &DateTime<Utc>, date_style: Style, time_style: Style) -> String {
    DateFormatter::localized_string(BuiltinEngine::from_env(), date, date_style, time_style)
}

/// Derives a pattern from a skeleton such as `yMMMd` using the builtin
/// locale data.
///
/// `options` is reserved and currently ignored. Without a locale the
/// environment's locale is used.
#[cfg(feature = "builtin")]
pub fn date_format_from_template(template: &str, options: u64, locale: Option<&str>) -> Option<String> {
    DateFormatter::date_format_from_template(&BuiltinEngine::from_env(), template, options, locale)
}
