//! Fixed-offset time zones: identifiers, display formats and scanning.

use chrono::{FixedOffset, Offset, Utc};

/// A time zone the builtin engine can render in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    id: String,
    offset: FixedOffset,
}

const UTC_IDS: [&str; 7] = ["UTC", "GMT", "Z", "UCT", "ZULU", "ETC/UTC", "ETC/GMT"];

impl Zone {
    pub fn utc() -> Zone {
        Zone {
            id: "UTC".to_string(),
            offset: Utc.fix(),
        }
    }

    /// Recognizes `UTC`-like names and fixed offsets such as `GMT+5`,
    /// `UTC-08:00` or `+0530`. Region names are not supported.
    pub fn from_id(id: &str) -> Option<Zone> {
        let trimmed = id.trim().trim_start_matches(':');
        let upper = trimmed.to_ascii_uppercase();
        if UTC_IDS.contains(&upper.as_str()) {
            return Some(Zone {
                id: trimmed.to_string(),
                ..Zone::utc()
            });
        }
        let rest = upper
            .strip_prefix("UTC")
            .or_else(|| upper.strip_prefix("GMT"))
            .unwrap_or(&upper);
        let (seconds, len) = scan_offset(rest)?;
        if len != rest.len() {
            return None;
        }
        Some(Zone {
            id: trimmed.to_string(),
            offset: FixedOffset::east_opt(seconds)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn offset_seconds(&self) -> i32 {
        self.offset.local_minus_utc()
    }

    /// Returns true for zones named as UTC, not merely at offset zero.
    pub fn is_utc(&self) -> bool {
        UTC_IDS.contains(&self.id.to_ascii_uppercase().as_str())
    }
}

/// `GMT`, `GMT+5`, `GMT-3:30` or, when `long`, `GMT+05:00`.
pub fn gmt_format(seconds: i32, long: bool) -> String {
    if seconds == 0 {
        return "GMT".to_string();
    }
    let (sign, hours, minutes) = split(seconds);
    if long {
        format!("GMT{sign}{hours:02}:{minutes:02}")
    } else if minutes == 0 {
        format!("GMT{sign}{hours}")
    } else {
        format!("GMT{sign}{hours}:{minutes:02}")
    }
}

/// ISO 8601 offsets by width: `+05`, `+0530`, `+05:30`.
///
/// Width 1 adds minutes only when they are non-zero. Widths 4 and 5 behave
/// like 2 and 3.
pub fn iso_format(seconds: i32, width: usize, z_for_zero: bool) -> String {
    if seconds == 0 && z_for_zero {
        return "Z".to_string();
    }
    let (sign, hours, minutes) = split(seconds);
    match width {
        1 if minutes == 0 => format!("{sign}{hours:02}"),
        1 | 2 | 4 => format!("{sign}{hours:02}{minutes:02}"),
        _ => format!("{sign}{hours:02}:{minutes:02}"),
    }
}

fn split(seconds: i32) -> (char, i32, i32) {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.abs();
    (sign, abs / 3600, (abs % 3600) / 60)
}

/// Scans `+h`, `+hh`, `+hhmm`, `+hh:mm` or `+h:mm` at the start of `text`.
///
/// Returns the offset in seconds and the number of bytes consumed.
pub fn scan_offset(text: &str) -> Option<(i32, usize)> {
    let bytes = text.as_bytes();
    let sign = match bytes.first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let mut pos = 1;
    let hour_digits = count_digits(&bytes[pos..]).min(2);
    if hour_digits == 0 {
        return None;
    }
    let hours = digits_value(&bytes[pos..pos + hour_digits]);
    pos += hour_digits;

    let mut minutes = 0;
    let colon = bytes.get(pos) == Some(&b':');
    let minute_start = if colon { pos + 1 } else { pos };
    let minute_digits = count_digits(&bytes[minute_start.min(bytes.len())..]).min(2);
    if minute_digits == 2 && (colon || hour_digits == 2) {
        minutes = digits_value(&bytes[minute_start..minute_start + 2]);
        pos = minute_start + 2;
    }
    if hours > 18 || minutes > 59 {
        return None;
    }
    Some((sign * (hours * 3600 + minutes * 60), pos))
}

/// Scans a zone as written by any of the zone fields.
///
/// Accepts the locale's long UTC name, `UTC`/`GMT` with an optional offset,
/// `Z`, or a bare offset. Matching is case-insensitive.
pub fn scan_zone(text: &str, utc_name_full: &str) -> Option<(i32, usize)> {
    if starts_with_ignore_case(text, utc_name_full) {
        return Some((0, utc_name_full.len()));
    }
    for prefix in ["UTC", "GMT"] {
        if starts_with_ignore_case(text, prefix) {
            return match scan_offset(&text[prefix.len()..]) {
                Some((seconds, len)) => Some((seconds, prefix.len() + len)),
                None => Some((0, prefix.len())),
            };
        }
    }
    if text.starts_with('Z') {
        return Some((0, 1));
    }
    scan_offset(text)
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].to_lowercase() == prefix.to_lowercase()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn digits_value(bytes: &[u8]) -> i32 {
    bytes
        .iter()
        .fold(0, |acc, b| acc * 10 + i32::from(b - b'0'))
}
