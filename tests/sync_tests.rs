//! Sharing a formatter between threads.
#![cfg(feature = "builtin")]

use std::sync::Arc;
use std::thread;

use chrono::{TimeZone, Utc};
use datefmt::{BuiltinEngine, DateFormatter, PropertyKey, PropertyValue, Style, SyncDateFormatter};

fn shared() -> SyncDateFormatter<BuiltinEngine> {
    let mut fmt = DateFormatter::new(BuiltinEngine::new());
    fmt.set_date_style(Style::Medium);
    fmt.set_time_style(Style::Short);
    fmt.into()
}

#[test]
fn test_render_from_many_threads() {
    let fmt = Arc::new(shared());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let fmt = Arc::clone(&fmt);
            thread::spawn(move || {
                let date = Utc.with_ymd_and_hms(2024, 3, 1 + i, 14, 30, 0).unwrap();
                (i, fmt.string_from(&date))
            })
        })
        .collect();

    for handle in handles {
        let (i, text) = handle.join().unwrap();
        assert_eq!(text, format!("Mar {}, 2024, 2:30 PM", 1 + i));
    }
}

#[test]
fn test_writes_are_seen_by_later_reads() {
    let fmt = shared();
    let date = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
    assert_eq!(fmt.string_from(&date), "Mar 15, 2024, 2:30 PM");

    fmt.set(PropertyKey::TimeZone, "GMT+1").unwrap();
    assert_eq!(fmt.string_from(&date), "Mar 15, 2024, 3:30 PM");
    assert_eq!(fmt.get(PropertyKey::TimeZone), Some(PropertyValue::from("GMT+1")));

    fmt.clear(PropertyKey::TimeZone);
    assert_eq!(fmt.get(PropertyKey::TimeZone), Some(PropertyValue::from("UTC")));
    assert_eq!(
        fmt.date_from_string("Mar 15, 2024, 2:30 PM"),
        Some(date)
    );
}

#[test]
fn test_lock_for_a_sequence() {
    let fmt = shared();
    {
        let mut guard = fmt.lock();
        guard.set_date_format(Some("y"));
        assert_eq!(guard.date_format(), "y");
    }
    let inner = fmt.into_inner();
    assert_eq!(inner.options().pattern.as_deref(), Some("y"));
}
