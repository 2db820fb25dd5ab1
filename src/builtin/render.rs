//! Date and time rendering

use std::fmt::Write;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use super::zone::{gmt_format, iso_format};
use super::BuiltinHandle;
use crate::ast::{Field, FieldKind, Item, Pattern};
use crate::property::PropertyKey;

impl BuiltinHandle {
    /// Render a local date/time using the given pattern.
    pub(super) fn render_pattern(&self, pattern: &Pattern, local: &DateTime<FixedOffset>) -> String {
        let mut result = String::new();
        for item in pattern.items() {
            match item {
                Item::Literal(text) => result.push_str(text),
                Item::Field(field) => self.render_field(&mut result, field, local),
            }
        }
        result
    }

    /// Render a single field.
    fn render_field(&self, out: &mut String, field: &Field, local: &DateTime<FixedOffset>) {
        let width = field.width;
        let year = local.year();
        let month0 = local.month0() as usize;
        let weekday0 = local.weekday().num_days_from_sunday() as usize;
        let quarter0 = month0 / 3;
        let hour = local.hour();

        match field.kind {
            FieldKind::Era => {
                let era = usize::from(year > 0);
                match width {
                    4 => self.push_name(out, PropertyKey::LongEraSymbols, era),
                    5 => {
                        let short = self.name(PropertyKey::EraSymbols, era);
                        out.extend(short.chars().next());
                    }
                    _ => self.push_name(out, PropertyKey::EraSymbols, era),
                }
            }
            FieldKind::Year => {
                let year_of_era = if year > 0 { year } else { 1 - year };
                push_year(out, year_of_era, width);
            }
            FieldKind::ExtendedYear => push_year(out, year, width.max(3)),

            FieldKind::Quarter | FieldKind::StandaloneQuarter => {
                let standalone = field.kind == FieldKind::StandaloneQuarter;
                match width {
                    1 | 2 => push_number(out, quarter0 as i64 + 1, width),
                    3 => self.push_name(
                        out,
                        pick(standalone, PropertyKey::ShortStandaloneQuarterSymbols, PropertyKey::ShortQuarterSymbols),
                        quarter0,
                    ),
                    _ => self.push_name(
                        out,
                        pick(standalone, PropertyKey::StandaloneQuarterSymbols, PropertyKey::QuarterSymbols),
                        quarter0,
                    ),
                }
            }

            FieldKind::Month | FieldKind::StandaloneMonth => {
                let standalone = field.kind == FieldKind::StandaloneMonth;
                let key = match width {
                    1 | 2 => return push_number(out, month0 as i64 + 1, width),
                    3 => pick(standalone, PropertyKey::ShortStandaloneMonthSymbols, PropertyKey::ShortMonthSymbols),
                    4 => pick(standalone, PropertyKey::StandaloneMonthSymbols, PropertyKey::MonthSymbols),
                    _ => pick(
                        standalone,
                        PropertyKey::VeryShortStandaloneMonthSymbols,
                        PropertyKey::VeryShortMonthSymbols,
                    ),
                };
                self.push_name(out, key, month0);
            }

            FieldKind::Day => push_number(out, i64::from(local.day()), width),
            FieldKind::DayOfYear => push_number(out, i64::from(local.ordinal()), width),

            FieldKind::Weekday | FieldKind::LocalWeekday | FieldKind::StandaloneWeekday => {
                let standalone = field.kind == FieldKind::StandaloneWeekday;
                if field.kind != FieldKind::Weekday && width <= 2 {
                    let first = self.locale.first_weekday as usize;
                    let local_day = (weekday0 + 7 - first) % 7 + 1;
                    return push_number(out, local_day as i64, width);
                }
                let key = match width {
                    4 => pick(standalone, PropertyKey::StandaloneWeekdaySymbols, PropertyKey::WeekdaySymbols),
                    5 => pick(
                        standalone,
                        PropertyKey::VeryShortStandaloneWeekdaySymbols,
                        PropertyKey::VeryShortWeekdaySymbols,
                    ),
                    _ => pick(standalone, PropertyKey::ShortStandaloneWeekdaySymbols, PropertyKey::ShortWeekdaySymbols),
                };
                self.push_name(out, key, weekday0);
            }

            FieldKind::AmPm => {
                let symbol = if hour >= 12 { self.symbols.pm() } else { self.symbols.am() };
                out.push_str(symbol);
            }
            FieldKind::Hour12 => push_number(out, i64::from(to_12_hour(hour)), width),
            FieldKind::Hour23 => push_number(out, i64::from(hour), width),
            FieldKind::Hour11 => push_number(out, i64::from(hour % 12), width),
            FieldKind::Hour24 => {
                let h = if hour == 0 { 24 } else { hour };
                push_number(out, i64::from(h), width)
            }
            FieldKind::Minute => push_number(out, i64::from(local.minute()), width),
            FieldKind::Second => push_number(out, i64::from(local.second()), width),
            FieldKind::Fraction => push_fraction(out, local.nanosecond() % 1_000_000_000, width),

            FieldKind::ZoneSpecific | FieldKind::ZoneGeneric => {
                let offset = self.zone.offset_seconds();
                if self.zone.is_utc() {
                    if width >= 4 {
                        out.push_str(self.locale.utc_name_full);
                    } else {
                        out.push_str("UTC");
                    }
                } else {
                    out.push_str(&gmt_format(offset, width >= 4));
                }
            }
            FieldKind::ZoneRfc => {
                let offset = self.zone.offset_seconds();
                match width {
                    1..=3 => out.push_str(&iso_format(offset, 2, false)),
                    4 => out.push_str(&gmt_format(offset, true)),
                    _ => out.push_str(&iso_format(offset, 3, true)),
                }
            }
            FieldKind::ZoneGmt => out.push_str(&gmt_format(self.zone.offset_seconds(), width >= 4)),
            FieldKind::ZoneIsoZ => out.push_str(&iso_format(self.zone.offset_seconds(), width, true)),
            FieldKind::ZoneIso => out.push_str(&iso_format(self.zone.offset_seconds(), width, false)),
        }
    }

    /// Looks up a name, falling back to the 1-based number when a custom
    /// symbol list is too short.
    fn name(&self, key: PropertyKey, index: usize) -> String {
        match self.symbols.list(key).get(index) {
            Some(name) => name.clone(),
            None => (index + 1).to_string(),
        }
    }

    fn push_name(&self, out: &mut String, key: PropertyKey, index: usize) {
        out.push_str(&self.name(key, index));
    }
}

fn pick(standalone: bool, standalone_key: PropertyKey, format_key: PropertyKey) -> PropertyKey {
    if standalone {
        standalone_key
    } else {
        format_key
    }
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

fn push_number(out: &mut String, value: i64, width: usize) {
    if value < 0 {
        let _ = write!(out, "-{:0width$}", -value, width = width);
    } else {
        let _ = write!(out, "{:0width$}", value, width = width);
    }
}

/// `yy` keeps the last two digits; other widths pad.
fn push_year(out: &mut String, year: i32, width: usize) {
    if width == 2 {
        push_number(out, i64::from(year.rem_euclid(100)), 2);
    } else {
        push_number(out, i64::from(year), width);
    }
}

/// Fractional seconds, truncated to `width` digits.
fn push_fraction(out: &mut String, nanos: u32, width: usize) {
    let digits = format!("{nanos:09}");
    if width <= 9 {
        out.push_str(&digits[..width]);
    } else {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take(width - 9));
    }
}
