//! Locale identifier helpers

use crate::error::{I18nError, I18nResult};
use unic_langid::LanguageIdentifier;

/// Label used for catalogs without a locale (the locale-neutral root).
pub const ROOT_LABEL: &str = "root";

/// Parse a locale tag such as `de`, `de-DE` or `de_DE`.
pub fn parse_locale(tag: &str) -> I18nResult<LanguageIdentifier> {
    tag.parse()
        .map_err(|_| I18nError::InvalidLanguageId(tag.to_string()))
}

/// Display label for an optional catalog locale.
pub fn locale_label(locale: Option<&LanguageIdentifier>) -> String {
    locale.map_or_else(|| ROOT_LABEL.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_accepts_both_separators() {
        let dash = parse_locale("de-DE").unwrap();
        let underscore = parse_locale("de_DE").unwrap();
        assert_eq!(dash, underscore);
        assert_eq!(dash.language.as_str(), "de");
    }

    #[test]
    fn test_parse_locale_rejects_garbage() {
        assert!(matches!(
            parse_locale("not a locale!"),
            Err(I18nError::InvalidLanguageId(_))
        ));
    }

    #[test]
    fn test_locale_label() {
        let de = parse_locale("de").unwrap();
        assert_eq!(locale_label(Some(&de)), "de");
        assert_eq!(locale_label(None), "root");
    }
}
