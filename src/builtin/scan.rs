//! Parsing text against a compiled pattern.
//!
//! Strict parsing wants literal text verbatim and exactly `n` digits for a
//! numeric field of width `n >= 2`. Lenient parsing relaxes both and also
//! accepts names from either the format or the standalone symbol lists.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};

use super::zone::scan_zone;
use super::BuiltinHandle;
use crate::ast::{Field, FieldKind, Item, Pattern};
use crate::engine::ParsedDate;
use crate::property::PropertyKey;

/// Values collected while scanning, before they are resolved to an instant.
#[derive(Debug, Default)]
struct Parsed {
    era: Option<usize>,
    year: Option<i32>,
    two_digit_year: bool,
    quarter: Option<u32>,
    month: Option<u32>,
    day: Option<u32>,
    day_of_year: Option<u32>,
    hour: Option<(FieldKind, u32)>,
    pm: Option<bool>,
    minute: Option<u32>,
    second: Option<u32>,
    nanos: Option<u32>,
    offset: Option<i32>,
}

impl BuiltinHandle {
    pub(super) fn scan(&self, pattern: &Pattern, text: &str, start: usize) -> Option<ParsedDate> {
        let items = pattern.items();
        if items.is_empty() {
            return None;
        }
        let mut pos = start;
        let mut parsed = Parsed::default();
        for (i, item) in items.iter().enumerate() {
            pos = match item {
                Item::Literal(literal) => self.scan_literal(text, pos, literal)?,
                Item::Field(field) => {
                    let abutting =
                        matches!(items.get(i + 1), Some(Item::Field(next)) if next.is_numeric());
                    self.scan_field(text, pos, field, abutting, &mut parsed)?
                }
            };
        }
        if self.lenient {
            pos = skip_whitespace(text, pos);
        }
        let date = self.resolve(&parsed)?;
        Some(ParsedDate {
            date,
            consumed: start..pos,
        })
    }

    fn scan_literal(&self, text: &str, pos: usize, literal: &str) -> Option<usize> {
        if !self.lenient {
            return text[pos..].starts_with(literal).then(|| pos + literal.len());
        }
        let mut pos = pos;
        for expected in literal.chars() {
            if expected.is_whitespace() {
                pos = skip_whitespace(text, pos);
                continue;
            }
            pos = skip_whitespace(text, pos);
            match text[pos..].chars().next() {
                Some(found) if eq_ignore_case(found, expected) => pos += found.len_utf8(),
                Some(found) if is_separator(found) && is_separator(expected) => {
                    pos += found.len_utf8()
                }
                _ if is_separator(expected) => {}
                _ => return None,
            }
        }
        Some(pos)
    }

    fn scan_field(
        &self,
        text: &str,
        pos: usize,
        field: &Field,
        abutting: bool,
        parsed: &mut Parsed,
    ) -> Option<usize> {
        if field.is_numeric() {
            return self.scan_numeric(text, pos, field, abutting, parsed);
        }
        let rest = &text[pos..];
        if field.kind.is_zone() {
            let (offset, len) = scan_zone(rest, self.locale.utc_name_full)?;
            parsed.offset = Some(offset);
            return Some(pos + len);
        }
        let standalone_too = self.lenient;
        let (index, len) = match field.kind {
            FieldKind::Era => self.match_names(rest, &[PropertyKey::LongEraSymbols, PropertyKey::EraSymbols])?,
            FieldKind::Month | FieldKind::StandaloneMonth => {
                let mut keys = month_keys(field.kind == FieldKind::StandaloneMonth).to_vec();
                if standalone_too {
                    keys.extend(month_keys(field.kind != FieldKind::StandaloneMonth));
                }
                self.match_names(rest, &keys)?
            }
            FieldKind::Weekday | FieldKind::LocalWeekday | FieldKind::StandaloneWeekday => {
                let mut keys = weekday_keys(field.kind == FieldKind::StandaloneWeekday).to_vec();
                if standalone_too {
                    keys.extend(weekday_keys(field.kind != FieldKind::StandaloneWeekday));
                }
                self.match_names(rest, &keys)?
            }
            FieldKind::Quarter | FieldKind::StandaloneQuarter => {
                let mut keys = quarter_keys(field.kind == FieldKind::StandaloneQuarter).to_vec();
                if standalone_too {
                    keys.extend(quarter_keys(field.kind != FieldKind::StandaloneQuarter));
                }
                self.match_names(rest, &keys)?
            }
            FieldKind::AmPm => {
                let am = match_ignore_case(rest, self.symbols.am());
                let pm = match_ignore_case(rest, self.symbols.pm());
                match (am, pm) {
                    (Some(a), Some(p)) if p > a => (1, p),
                    (Some(a), _) => (0, a),
                    (None, Some(p)) => (1, p),
                    (None, None) => return None,
                }
            }
            _ => return None,
        };
        match field.kind {
            FieldKind::Era => parsed.era = Some(index),
            FieldKind::Month | FieldKind::StandaloneMonth => parsed.month = Some(index as u32 + 1),
            FieldKind::Quarter | FieldKind::StandaloneQuarter => {
                parsed.quarter = Some(index as u32 + 1)
            }
            FieldKind::AmPm => parsed.pm = Some(index == 1),
            // Weekday names are checked for presence only.
            _ => {}
        }
        Some(pos + len)
    }

    fn scan_numeric(
        &self,
        text: &str,
        pos: usize,
        field: &Field,
        abutting: bool,
        parsed: &mut Parsed,
    ) -> Option<usize> {
        let run = text[pos..].bytes().take_while(u8::is_ascii_digit).count();
        let natural = natural_digits(field.kind);
        let count = if abutting {
            field.width
        } else if self.lenient || field.width < 2 || natural > 2 {
            run.min(natural.max(field.width))
        } else {
            field.width
        };
        if count == 0 || run < count {
            return None;
        }
        if !self.lenient && field.width >= 2 && count < field.width {
            return None;
        }
        let digits = &text[pos..pos + count];
        if field.kind == FieldKind::Fraction {
            // Digits past nanosecond precision are dropped.
            let kept = &digits[..count.min(9)];
            let nanos: u32 = kept.parse().ok()?;
            parsed.nanos = Some(nanos * 10u32.pow((9 - kept.len()) as u32));
            return Some(pos + count);
        }
        let value: u32 = digits.parse().ok()?;
        match field.kind {
            FieldKind::Year | FieldKind::ExtendedYear => {
                parsed.year = Some(i32::try_from(value).ok()?);
                parsed.two_digit_year = field.kind == FieldKind::Year && field.width == 2 && count == 2;
            }
            FieldKind::Quarter | FieldKind::StandaloneQuarter => {
                if !(1..=4).contains(&value) {
                    return None;
                }
                parsed.quarter = Some(value)
            }
            FieldKind::Month | FieldKind::StandaloneMonth => parsed.month = Some(value),
            FieldKind::Day => parsed.day = Some(value),
            FieldKind::DayOfYear => parsed.day_of_year = Some(value),
            FieldKind::Hour12 | FieldKind::Hour23 | FieldKind::Hour11 | FieldKind::Hour24 => {
                parsed.hour = Some((field.kind, value))
            }
            FieldKind::Minute => parsed.minute = Some(value),
            FieldKind::Second => parsed.second = Some(value),
            // Numeric weekdays are checked for presence only.
            _ => {}
        }
        Some(pos + count)
    }

    /// Finds the longest name among the given symbol lists.
    ///
    /// Returns the name's index within its list and the bytes it covers.
    fn match_names(&self, text: &str, keys: &[PropertyKey]) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize)> = None;
        for key in keys {
            for (index, name) in self.symbols.list(*key).iter().enumerate() {
                let mut candidates = vec![name.as_str()];
                if self.lenient && name.ends_with('.') {
                    candidates.push(name.trim_end_matches('.'));
                }
                for candidate in candidates {
                    if let Some(len) = match_ignore_case(text, candidate) {
                        if best.map_or(true, |(_, best_len)| len > best_len) {
                            best = Some((index, len));
                        }
                    }
                }
            }
        }
        best
    }

    fn resolve_two_digit_year(&self, two_digits: i32) -> i32 {
        let start = self.two_digit_start().year();
        let mut year = start - start.rem_euclid(100) + two_digits;
        if year < start {
            year += 100;
        }
        year
    }

    /// Turns the scanned values into an instant. Fields that were not
    /// scanned come from the default date, else from the Unix epoch, in the
    /// handle's time zone.
    fn resolve(&self, parsed: &Parsed) -> Option<DateTime<Utc>> {
        let zone = self.zone.offset();
        let base: NaiveDateTime = match self.default_date {
            Some(date) => date.with_timezone(&zone).naive_local(),
            None => DateTime::<Utc>::UNIX_EPOCH.naive_utc(),
        };

        let mut year = parsed.year.unwrap_or(base.year());
        // The century window only applies to years of the current era.
        if parsed.two_digit_year && parsed.era != Some(0) {
            year = self.resolve_two_digit_year(year);
        }
        if parsed.era == Some(0) {
            year = 1 - year;
        }

        let date = match (parsed.day_of_year, parsed.month, parsed.day) {
            (Some(ordinal), None, None) => NaiveDate::from_yo_opt(year, ordinal)?,
            _ => {
                let month = parsed
                    .month
                    .or(parsed.quarter.map(|q| (q - 1) * 3 + 1))
                    .unwrap_or(base.month());
                let day = parsed.day.unwrap_or(base.day());
                self.make_date(year, month, day)?
            }
        };

        let hour = match parsed.hour {
            None => base.hour(),
            Some((kind, value)) => {
                let pm = parsed.pm.unwrap_or(false);
                match kind {
                    FieldKind::Hour12 if (1..=12).contains(&value) => value % 12 + 12 * u32::from(pm),
                    FieldKind::Hour11 if value <= 11 => value + 12 * u32::from(pm),
                    FieldKind::Hour23 if value <= 23 => value,
                    FieldKind::Hour24 if (1..=24).contains(&value) => value % 24,
                    _ => return None,
                }
            }
        };
        let minute = parsed.minute.unwrap_or(base.minute());
        let second = parsed.second.unwrap_or(base.second());
        let nanos = parsed.nanos.unwrap_or(base.nanosecond());
        let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)?;

        let offset = match parsed.offset {
            Some(seconds) => FixedOffset::east_opt(seconds)?,
            None => zone,
        };
        let local = offset.from_local_datetime(&date.and_time(time)).single()?;
        Some(local.with_timezone(&Utc))
    }

    /// Builds a date. Lenient parsing carries an overflowing day into the
    /// following months.
    fn make_date(&self, year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
        if !self.lenient || day == 0 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(day - 1)))
    }
}

fn month_keys(standalone: bool) -> [PropertyKey; 2] {
    if standalone {
        [
            PropertyKey::StandaloneMonthSymbols,
            PropertyKey::ShortStandaloneMonthSymbols,
        ]
    } else {
        [PropertyKey::MonthSymbols, PropertyKey::ShortMonthSymbols]
    }
}

fn weekday_keys(standalone: bool) -> [PropertyKey; 2] {
    if standalone {
        [
            PropertyKey::StandaloneWeekdaySymbols,
            PropertyKey::ShortStandaloneWeekdaySymbols,
        ]
    } else {
        [PropertyKey::WeekdaySymbols, PropertyKey::ShortWeekdaySymbols]
    }
}

fn quarter_keys(standalone: bool) -> [PropertyKey; 2] {
    if standalone {
        [
            PropertyKey::StandaloneQuarterSymbols,
            PropertyKey::ShortStandaloneQuarterSymbols,
        ]
    } else {
        [PropertyKey::QuarterSymbols, PropertyKey::ShortQuarterSymbols]
    }
}

/// The most digits a field can take when it is not abutting another one.
fn natural_digits(kind: FieldKind) -> usize {
    match kind {
        FieldKind::Year | FieldKind::ExtendedYear | FieldKind::Fraction => 9,
        FieldKind::DayOfYear => 3,
        FieldKind::Quarter | FieldKind::StandaloneQuarter => 1,
        FieldKind::LocalWeekday | FieldKind::StandaloneWeekday => 1,
        _ => 2,
    }
}

/// Matches `expected` at the start of `text`, ignoring case.
///
/// Returns the number of bytes of `text` matched.
fn match_ignore_case(text: &str, expected: &str) -> Option<usize> {
    if expected.is_empty() {
        return None;
    }
    let mut chars = text.char_indices();
    for want in expected.chars() {
        let (_, got) = chars.next()?;
        if !eq_ignore_case(got, want) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len(), |(i, _)| i))
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn is_separator(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

fn skip_whitespace(text: &str, pos: usize) -> usize {
    let skipped: usize = text[pos..]
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    pos + skipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ignore_case() {
        assert_eq!(match_ignore_case("MARCH 5", "March"), Some(5));
        assert_eq!(match_ignore_case("Mär 5", "mär"), Some(4));
        assert_eq!(match_ignore_case("Ma", "May"), None);
        assert_eq!(match_ignore_case("x", ""), None);
    }

    #[test]
    fn test_skip_whitespace() {
        assert_eq!(skip_whitespace("a \t b", 1), 4);
        assert_eq!(skip_whitespace("ab", 1), 1);
    }
}
