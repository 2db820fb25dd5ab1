//! The lazily rebuilt formatter.
//!
//! A [`DateFormatter`] owns its options and at most one engine handle. Any
//! write drops the handle; the next render, parse or engine-backed read
//! rebuilds it from the current options.

mod accessors;

use std::any::Any;

use chrono::{DateTime, Utc};

use crate::engine::{Engine, Handle, ParsedDate};
use crate::error::FormatterError;
use crate::options::{FormatterOptions, FormattingContext, Style};
use crate::property::PropertyKey;
use crate::value::PropertyValue;

/// A date formatter whose engine handle is built on first use and dropped on
/// every configuration change.
pub struct DateFormatter<E: Engine> {
    engine: E,
    options: FormatterOptions,
    handle: Option<E::Handle>,
}

impl<E: Engine> DateFormatter<E> {
    /// Creates a formatter with default options. No handle is built yet.
    pub fn new(engine: E) -> Self {
        Self::with_options(engine, FormatterOptions::default())
    }

    /// Creates a formatter from existing options.
    pub fn with_options(engine: E, options: FormatterOptions) -> Self {
        DateFormatter {
            engine,
            options,
            handle: None,
        }
    }

    /// The engine this formatter delegates to.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// A snapshot of the current options.
    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Returns true when a handle is built and no write happened since.
    pub fn is_fresh(&self) -> bool {
        self.handle.is_some()
    }

    fn invalidate(&mut self) {
        self.handle = None;
    }

    /// Returns the current handle, rebuilding it if stale.
    fn handle(&mut self) -> &E::Handle {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => self.build_handle(),
        };
        self.handle.insert(handle)
    }

    fn build_handle(&self) -> E::Handle {
        let locale = self.locale_id();
        let opts = &self.options;
        log::trace!(
            "building formatter handle for locale `{}` (date style {:?}, time style {:?})",
            locale,
            opts.date_style,
            opts.time_style,
        );
        let mut handle = self
            .engine
            .create_handle(&locale, opts.date_style, opts.time_style);
        for (key, value) in opts.overrides() {
            handle.set_property(key, value);
        }
        if let Some(pattern) = &opts.pattern {
            handle.set_pattern(pattern);
        }
        handle
    }

    fn locale_id(&self) -> String {
        match &self.options.locale {
            Some(locale) => locale.clone(),
            None => self.engine.default_locale(),
        }
    }

    /// Returns the local override of a property, or the engine's value.
    ///
    /// Engine values are not cached; each read re-queries the handle.
    pub fn get(&mut self, key: PropertyKey) -> Option<PropertyValue> {
        if let Some(value) = self.options.get(key) {
            return Some(value.clone());
        }
        self.handle().copy_property(key)
    }

    /// Overrides a property. Always invalidates, even for an unchanged value.
    pub fn set(
        &mut self,
        key: PropertyKey,
        value: impl Into<PropertyValue>,
    ) -> Result<(), FormatterError> {
        self.options.set(key, value.into())?;
        self.invalidate();
        Ok(())
    }

    /// Removes an override so the engine's value is used again.
    pub fn clear(&mut self, key: PropertyKey) {
        self.options.clear(key);
        self.invalidate();
    }

    /// Stores a value whose kind is known to match its key.
    fn set_known(&mut self, key: PropertyKey, value: Option<PropertyValue>) {
        match value {
            Some(value) => {
                let result = self.options.set(key, value);
                debug_assert!(result.is_ok(), "typed setter used the wrong kind for {key}");
            }
            None => self.options.clear(key),
        }
        self.invalidate();
    }

    pub fn date_style(&self) -> Style {
        self.options.date_style
    }

    /// Sets the date style. This also clears any explicit pattern.
    pub fn set_date_style(&mut self, style: Style) {
        self.options.date_style = style;
        self.options.pattern = None;
        self.invalidate();
    }

    pub fn time_style(&self) -> Style {
        self.options.time_style
    }

    /// Sets the time style. This also clears any explicit pattern.
    pub fn set_time_style(&mut self, style: Style) {
        self.options.time_style = style;
        self.options.pattern = None;
        self.invalidate();
    }

    /// The explicit pattern, or the one the engine derived from the styles.
    pub fn date_format(&mut self) -> String {
        match &self.options.pattern {
            Some(pattern) => pattern.clone(),
            None => self.handle().pattern(),
        }
    }

    pub fn set_date_format(&mut self, pattern: Option<&str>) {
        self.options.pattern = pattern.map(str::to_string);
        self.invalidate();
    }

    /// The locale override, or the engine's default locale.
    pub fn locale(&self) -> String {
        self.locale_id()
    }

    pub fn set_locale(&mut self, locale: Option<&str>) {
        self.options.locale = locale.map(str::to_string);
        self.invalidate();
    }

    pub fn is_lenient(&self) -> bool {
        self.options.is_lenient()
    }

    pub fn set_lenient(&mut self, lenient: bool) {
        self.set_known(PropertyKey::IsLenient, Some(lenient.into()));
    }

    pub fn does_relative_date_formatting(&self) -> bool {
        self.options.does_relative_date_formatting()
    }

    pub fn set_does_relative_date_formatting(&mut self, relative: bool) {
        self.set_known(PropertyKey::DoesRelativeDateFormatting, Some(relative.into()));
    }

    pub fn generates_calendar_dates(&self) -> bool {
        self.options.generates_calendar_dates
    }

    pub fn set_generates_calendar_dates(&mut self, generates: bool) {
        self.options.generates_calendar_dates = generates;
        self.invalidate();
    }

    pub fn formatting_context(&self) -> FormattingContext {
        self.options.formatting_context
    }

    /// Sets the formatting context. The handle is left untouched.
    pub fn set_formatting_context(&mut self, context: FormattingContext) {
        self.options.formatting_context = context;
    }

    /// Renders a date with the current configuration.
    pub fn string_from(&mut self, date: &DateTime<Utc>) -> String {
        self.handle().render(date)
    }

    /// Renders `value` if it is a `DateTime<Utc>`.
    pub fn string_for_object_value(&mut self, value: &dyn Any) -> Option<String> {
        let date = value.downcast_ref::<DateTime<Utc>>()?;
        Some(self.string_from(date))
    }

    /// Parses the whole of `text`.
    ///
    /// Returns `None` when the text does not match the current configuration
    /// or when the engine stops before the end of the text.
    pub fn date_from_string(&mut self, text: &str) -> Option<DateTime<Utc>> {
        let parsed = self.parse_date_with_range(text)?;
        if parsed.consumed.end != text.len() {
            log::debug!(
                "parsed `{}` only up to byte {}, rejecting",
                text,
                parsed.consumed.end,
            );
            return None;
        }
        Some(parsed.date)
    }

    /// Parses from the start of `text`, reporting how much was consumed.
    pub fn parse_date_with_range(&mut self, text: &str) -> Option<ParsedDate> {
        let parsed = self.handle().parse(text, 0);
        if parsed.is_none() {
            log::debug!("`{}` does not match the current date format", text);
        }
        parsed
    }

    /// Parsing into an arbitrary object value is not supported.
    pub fn object_value(&mut self, _text: &str) -> Result<ParsedDate, FormatterError> {
        Err(FormatterError::Unsupported {
            operation: "object_value",
        })
    }

    /// Setting the pattern from a localized template is not supported.
    pub fn set_localized_date_format_from_template(
        &mut self,
        _template: &str,
    ) -> Result<(), FormatterError> {
        Err(FormatterError::Unsupported {
            operation: "set_localized_date_format_from_template",
        })
    }

    /// Renders `date` once with a throwaway formatter using the given styles.
    pub fn localized_string(
        engine: E,
        date: &DateTime<Utc>,
        date_style: Style,
        time_style: Style,
    ) -> String {
        let mut formatter = DateFormatter::new(engine);
        formatter.set_date_style(date_style);
        formatter.set_time_style(time_style);
        formatter.string_from(date)
    }

    /// Asks the engine for a pattern matching `template` in `locale`, or in
    /// the engine's default locale.
    pub fn date_format_from_template(
        engine: &E,
        template: &str,
        options: u64,
        locale: Option<&str>,
    ) -> Option<String> {
        let locale = match locale {
            Some(locale) => locale.to_string(),
            None => engine.default_locale(),
        };
        engine.derive_template_pattern(&locale, template, options)
    }
}

impl<E: Engine + Default> Default for DateFormatter<E> {
    fn default() -> Self {
        DateFormatter::new(E::default())
    }
}

impl<E: Engine + Clone> Clone for DateFormatter<E> {
    /// Clones the configuration. The clone starts stale.
    fn clone(&self) -> Self {
        DateFormatter::with_options(self.engine.clone(), self.options.clone())
    }
}

impl<E: Engine + std::fmt::Debug> std::fmt::Debug for DateFormatter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateFormatter")
            .field("engine", &self.engine)
            .field("options", &self.options)
            .field("fresh", &self.is_fresh())
            .finish()
    }
}
