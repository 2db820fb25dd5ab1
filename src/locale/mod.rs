//! Locale lookup for the builtin engine.

mod builtin;

pub use builtin::LocaleData;

use builtin::{DE_DE, EN_US, FR_FR};

static LOCALES: [&LocaleData; 3] = [&EN_US, &DE_DE, &FR_FR];

/// Normalizes a locale identifier: `de-de.UTF-8` becomes `de_DE`.
///
/// Encoding and modifier suffixes are dropped. Variants are kept.
pub fn normalize(id: &str) -> String {
    let id = id.split(['.', '@']).next().unwrap_or_default();
    let mut parts = id.split(['_', '-']).filter(|p| !p.is_empty());
    let mut out = match parts.next() {
        Some(language) => language.to_ascii_lowercase(),
        None => return String::new(),
    };
    if let Some(region) = parts.next() {
        out.push('_');
        out.push_str(&region.to_ascii_uppercase());
    }
    for variant in parts {
        out.push('_');
        out.push_str(&variant.to_ascii_uppercase());
    }
    out
}

/// Finds locale data by exact `language_REGION`, then by language alone.
pub fn lookup(id: &str) -> Option<&'static LocaleData> {
    let normalized = normalize(id);
    if let Some(data) = LOCALES.iter().copied().find(|data| data.id == normalized) {
        return Some(data);
    }
    let language = normalized.split('_').next()?;
    LOCALES
        .iter()
        .find(|data| data.id.split('_').next() == Some(language))
        .copied()
}

/// Like [`lookup`], falling back to US English.
pub fn resolve(id: &str) -> &'static LocaleData {
    match lookup(id) {
        Some(data) => data,
        None => {
            log::debug!("no locale data for `{id}`, falling back to en_US");
            &EN_US
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("de-de.UTF-8"), "de_DE");
        assert_eq!(normalize("en_US_POSIX"), "en_US_POSIX");
        assert_eq!(normalize("fr"), "fr");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_lookup_by_language() {
        assert_eq!(lookup("de").map(|d| d.id), Some("de_DE"));
        assert_eq!(lookup("de_AT").map(|d| d.id), Some("de_DE"));
        assert_eq!(lookup("en_US_POSIX").map(|d| d.id), Some("en_US"));
        assert!(lookup("ja_JP").is_none());
    }

    #[test]
    fn test_resolve_falls_back() {
        assert_eq!(resolve("ja_JP").id, "en_US");
        assert_eq!(resolve("C").id, "en_US");
    }
}
