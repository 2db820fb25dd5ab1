//! Deriving a concrete pattern from a skeleton such as `yMMMd`.

use crate::ast::{Item, Pattern};
use crate::locale::LocaleData;

/// Canonical skeleton letter order. Date letters come before `h`.
const ORDER: [char; 10] = ['G', 'y', 'Q', 'M', 'E', 'd', 'h', 'H', 'm', 's'];
const FIRST_TIME_LETTER: usize = 6;

/// A skeleton reduced to canonical letters and widths.
#[derive(Debug, Default)]
struct Skeleton {
    widths: [usize; ORDER.len()],
    zone: bool,
    /// Letters the template asked to see with two digits.
    two_digit: Vec<char>,
}

impl Skeleton {
    fn parse(data: &LocaleData, template: &str) -> Option<Skeleton> {
        let mut skeleton = Skeleton::default();
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            let mut width = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                width += 1;
            }
            let letter = match c {
                'G' | 'y' | 'Q' | 'M' | 'E' | 'd' | 'h' | 'H' | 'm' | 's' => c,
                'u' | 'Y' => 'y',
                'q' => 'Q',
                'L' => 'M',
                'c' | 'e' => 'E',
                'K' => 'h',
                'k' => 'H',
                'j' | 'J' | 'C' => data.hour_letter,
                'a' | 'b' | 'B' => continue,
                'z' | 'Z' | 'O' | 'v' | 'V' | 'X' | 'x' => {
                    skeleton.zone = true;
                    continue;
                }
                c if c.is_whitespace() => continue,
                _ => return None,
            };
            if width == 2 && matches!(letter, 'd' | 'M' | 'h' | 'H') {
                skeleton.two_digit.push(letter);
            }
            let slot = ORDER.iter().position(|&l| l == letter)?;
            skeleton.widths[slot] = skeleton.widths[slot].max(width);
        }
        Some(skeleton)
    }

    /// The lookup key for the letters in `range`.
    fn key(&self, range: std::ops::Range<usize>) -> String {
        let mut key = String::new();
        for slot in range {
            let width = self.widths[slot];
            if width == 0 {
                continue;
            }
            let letter = ORDER[slot];
            let count = match letter {
                'Q' => match width {
                    1 | 2 => 1,
                    3 => 3,
                    _ => 4,
                },
                'M' => match width {
                    1 | 2 => 1,
                    n => n.min(5),
                },
                'E' => {
                    if width >= 4 {
                        4
                    } else {
                        1
                    }
                }
                _ => 1,
            };
            key.extend(std::iter::repeat(letter).take(count));
        }
        key
    }

    /// The connector to use, chosen the way the date style would be.
    fn connector_index(&self) -> usize {
        let month = self.widths[3];
        let weekday = self.widths[4];
        match (month, weekday) {
            (4.., 4..) => 3,
            (4.., _) => 2,
            (3, _) => 1,
            _ => 0,
        }
    }
}

/// Derives the locale's pattern for `template`, or `None` if the template
/// holds letters no skeleton uses or the locale has no matching format.
pub fn derive(data: &LocaleData, template: &str) -> Option<String> {
    let skeleton = Skeleton::parse(data, template)?;
    let lookup = |key: &str| {
        data.skeletons
            .iter()
            .find(|(skeleton, _)| *skeleton == key)
            .map(|(_, pattern)| pattern.to_string())
    };

    let full = skeleton.key(0..ORDER.len());
    let date_key = skeleton.key(0..FIRST_TIME_LETTER);
    let time_key = skeleton.key(FIRST_TIME_LETTER..ORDER.len());

    let mut pattern = match lookup(&full) {
        Some(pattern) if !skeleton.zone || time_key.is_empty() => pattern,
        _ if full.is_empty() => return None,
        _ => {
            let date = if date_key.is_empty() {
                None
            } else {
                Some(lookup(&date_key)?)
            };
            let time = if time_key.is_empty() {
                None
            } else {
                let mut time = lookup(&time_key)?;
                if skeleton.zone {
                    time.push_str(" z");
                }
                Some(time)
            };
            match (date, time) {
                (Some(date), Some(time)) => data.date_time_patterns[skeleton.connector_index()]
                    .replace("{1}", &date)
                    .replace("{0}", &time),
                (Some(date), None) => date,
                (None, Some(time)) => time,
                (None, None) => return None,
            }
        }
    };
    if skeleton.zone && time_key.is_empty() {
        pattern.push_str(" z");
    }
    if skeleton.two_digit.is_empty() {
        return Some(pattern);
    }
    Some(widen(&pattern, &skeleton.two_digit))
}

/// Pads single-width numeric fields whose letter was asked for twice.
fn widen(pattern: &str, letters: &[char]) -> String {
    let compiled = match Pattern::parse(pattern) {
        Ok(compiled) => compiled,
        Err(_) => return pattern.to_string(),
    };
    let items = compiled
        .items()
        .iter()
        .map(|item| match item {
            Item::Field(field) if field.width == 1 && letters.contains(&canonical(field.letter)) => {
                let mut field = *field;
                field.width = 2;
                Item::Field(field)
            }
            other => other.clone(),
        })
        .collect();
    Pattern::from_items(items).to_pattern_string()
}

fn canonical(letter: char) -> char {
    match letter {
        'L' => 'M',
        'K' => 'h',
        'k' => 'H',
        other => other,
    }
}
