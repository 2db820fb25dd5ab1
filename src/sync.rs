//! A formatter that can be shared between threads.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::engine::Engine;
use crate::error::FormatterError;
use crate::formatter::DateFormatter;
use crate::property::PropertyKey;
use crate::value::PropertyValue;

/// A [`DateFormatter`] behind a mutex.
///
/// Rebuilding the handle mutates the formatter, so every operation that may
/// touch the engine takes the lock.
pub struct SyncDateFormatter<E: Engine> {
    inner: Mutex<DateFormatter<E>>,
}

impl<E: Engine> SyncDateFormatter<E> {
    pub fn new(formatter: DateFormatter<E>) -> Self {
        SyncDateFormatter {
            inner: Mutex::new(formatter),
        }
    }

    /// Locks the formatter for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, DateFormatter<E>> {
        // Poisoned locks are recovered.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn string_from(&self, date: &DateTime<Utc>) -> String {
        self.lock().string_from(date)
    }

    pub fn date_from_string(&self, text: &str) -> Option<DateTime<Utc>> {
        self.lock().date_from_string(text)
    }

    pub fn get(&self, key: PropertyKey) -> Option<PropertyValue> {
        self.lock().get(key)
    }

    pub fn set(
        &self,
        key: PropertyKey,
        value: impl Into<PropertyValue>,
    ) -> Result<(), FormatterError> {
        self.lock().set(key, value)
    }

    pub fn clear(&self, key: PropertyKey) {
        self.lock().clear(key)
    }

    pub fn into_inner(self) -> DateFormatter<E> {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<E: Engine> From<DateFormatter<E>> for SyncDateFormatter<E> {
    fn from(formatter: DateFormatter<E>) -> Self {
        SyncDateFormatter::new(formatter)
    }
}
