//! AST types for compiled date patterns.

/// The calendar or clock value a pattern field stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `G`
    Era,
    /// `y`, and `Y` which is treated as the calendar year
    Year,
    /// `u`
    ExtendedYear,
    /// `Q`
    Quarter,
    /// `q`
    StandaloneQuarter,
    /// `M`
    Month,
    /// `L`
    StandaloneMonth,
    /// `d`
    Day,
    /// `D`
    DayOfYear,
    /// `E`
    Weekday,
    /// `e`, numeric relative to the first day of the week when short
    LocalWeekday,
    /// `c`
    StandaloneWeekday,
    /// `a`
    AmPm,
    /// `h`, 1-12
    Hour12,
    /// `H`, 0-23
    Hour23,
    /// `K`, 0-11
    Hour11,
    /// `k`, 1-24
    Hour24,
    /// `m`
    Minute,
    /// `s`
    Second,
    /// `S`
    Fraction,
    /// `z`
    ZoneSpecific,
    /// `Z`
    ZoneRfc,
    /// `O`
    ZoneGmt,
    /// `X`, which writes `Z` for UTC
    ZoneIsoZ,
    /// `x`
    ZoneIso,
    /// `v` and `V`
    ZoneGeneric,
}

impl FieldKind {
    /// Returns the kind for a pattern letter.
    pub fn from_letter(letter: char) -> Option<FieldKind> {
        let kind = match letter {
            'G' => FieldKind::Era,
            'y' | 'Y' => FieldKind::Year,
            'u' => FieldKind::ExtendedYear,
            'Q' => FieldKind::Quarter,
            'q' => FieldKind::StandaloneQuarter,
            'M' => FieldKind::Month,
            'L' => FieldKind::StandaloneMonth,
            'd' => FieldKind::Day,
            'D' => FieldKind::DayOfYear,
            'E' => FieldKind::Weekday,
            'e' => FieldKind::LocalWeekday,
            'c' => FieldKind::StandaloneWeekday,
            'a' => FieldKind::AmPm,
            'h' => FieldKind::Hour12,
            'H' => FieldKind::Hour23,
            'K' => FieldKind::Hour11,
            'k' => FieldKind::Hour24,
            'm' => FieldKind::Minute,
            's' => FieldKind::Second,
            'S' => FieldKind::Fraction,
            'z' => FieldKind::ZoneSpecific,
            'Z' => FieldKind::ZoneRfc,
            'O' => FieldKind::ZoneGmt,
            'X' => FieldKind::ZoneIsoZ,
            'x' => FieldKind::ZoneIso,
            'v' | 'V' => FieldKind::ZoneGeneric,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true for the time zone fields.
    pub fn is_zone(self) -> bool {
        matches!(
            self,
            FieldKind::ZoneSpecific
                | FieldKind::ZoneRfc
                | FieldKind::ZoneGmt
                | FieldKind::ZoneIsoZ
                | FieldKind::ZoneIso
                | FieldKind::ZoneGeneric
        )
    }
}

/// A field together with its repeat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub kind: FieldKind,
    pub letter: char,
    pub width: usize,
}

impl Field {
    /// Returns true if this field is written with digits.
    pub fn is_numeric(&self) -> bool {
        match self.kind {
            FieldKind::Month
            | FieldKind::StandaloneMonth
            | FieldKind::Quarter
            | FieldKind::StandaloneQuarter
            | FieldKind::LocalWeekday
            | FieldKind::StandaloneWeekday => self.width <= 2,
            FieldKind::Year
            | FieldKind::ExtendedYear
            | FieldKind::Day
            | FieldKind::DayOfYear
            | FieldKind::Hour12
            | FieldKind::Hour23
            | FieldKind::Hour11
            | FieldKind::Hour24
            | FieldKind::Minute
            | FieldKind::Second
            | FieldKind::Fraction => true,
            _ => false,
        }
    }
}

/// One element of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Field(Field),
    Literal(String),
}

/// A compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub(crate) items: Vec<Item>,
}

impl Pattern {
    /// Compiles a pattern string.
    pub fn parse(pattern: &str) -> Result<Pattern, crate::error::PatternError> {
        crate::parser::parse(pattern)
    }

    /// Creates a pattern from already compiled items.
    pub fn from_items(items: Vec<Item>) -> Pattern {
        Pattern { items }
    }

    /// Returns the items of this pattern.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns true if any field of the given kind appears in the pattern.
    pub fn has_field(&self, kind: FieldKind) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, Item::Field(f) if f.kind == kind))
    }

    /// Writes this pattern back out, quoting literal text where needed.
    pub fn to_pattern_string(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                Item::Field(f) => {
                    for _ in 0..f.width {
                        out.push(f.letter);
                    }
                }
                Item::Literal(text) => write_literal(&mut out, text),
            }
        }
        out
    }
}

/// Appends literal text, quoting it if it contains letters or quotes.
pub(crate) fn write_literal(out: &mut String, text: &str) {
    let needs_quotes = text.chars().any(|c| c.is_ascii_alphabetic());
    if !needs_quotes {
        out.push_str(&text.replace('\'', "''"));
        return;
    }
    out.push('\'');
    out.push_str(&text.replace('\'', "''"));
    out.push('\'');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_depends_on_width() {
        let month = |width| Field {
            kind: FieldKind::Month,
            letter: 'M',
            width,
        };
        assert!(month(2).is_numeric());
        assert!(!month(3).is_numeric());
    }

    #[test]
    fn test_write_literal_quotes_letters() {
        let mut out = String::new();
        write_literal(&mut out, " at ");
        write_literal(&mut out, ", ");
        write_literal(&mut out, "o'clock");
        assert_eq!(out, "' at ', 'o''clock'");
    }
}
