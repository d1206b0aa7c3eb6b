//! Plural-form selection rules
//!
//! Each rule maps a count to an index into a catalog's plural forms, using
//! the formula families of the GNU gettext manual. Rules are evaluated on
//! the signed count: the singular forms are reserved for the positive
//! values the formulas name, so `-1` selects a plural form.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// Plural-selection rule for a locale
#[derive(Clone, Copy)]
pub enum PluralRule {
    /// Single form (Japanese, Chinese, Korean, ...)
    OneForm,
    /// Singular only for exactly 1 (English, German, Dutch, ...)
    Germanic,
    /// Singular for 0 and 1 (French, Brazilian Portuguese, ...)
    French,
    /// Three forms by last digits (Russian, Ukrainian, Serbian, ...)
    SlavicEast,
    /// Three forms, 1 is special (Polish)
    Polish,
    /// Three forms: 1, 2-4, rest (Czech, Slovak)
    Czech,
    /// Three forms (Lithuanian)
    Lithuanian,
    /// Three forms with a separate zero form (Latvian)
    Latvian,
    /// Three forms (Romanian)
    Romanian,
    /// Four forms by last two digits (Slovenian)
    Slovenian,
    /// Five forms (Irish)
    Irish,
    /// Six forms (Arabic)
    Arabic,
    /// Caller-supplied formula
    Custom {
        /// Number of plural forms the formula can produce
        nplurals: usize,
        /// Index formula over the signed count
        eval: fn(i64) -> usize,
    },
}

impl PluralRule {
    /// Pick the rule for a locale by its language subtag.
    ///
    /// Unknown languages use the Germanic rule.
    pub fn for_locale(locale: &LanguageIdentifier) -> Self {
        match locale.language.as_str() {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "lo" | "my" | "km" => Self::OneForm,
            "pt" if locale.region.is_some_and(|r| r.as_str() == "BR") => Self::French,
            "fr" | "oc" | "br" | "fil" | "tl" | "ln" | "wa" | "hy" => Self::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::SlavicEast,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::Czech,
            "lt" => Self::Lithuanian,
            "lv" => Self::Latvian,
            "ro" | "mo" => Self::Romanian,
            "sl" => Self::Slovenian,
            "ga" => Self::Irish,
            "ar" => Self::Arabic,
            _ => Self::Germanic,
        }
    }

    /// Number of plural forms this rule distinguishes
    pub const fn nplurals(&self) -> usize {
        match self {
            Self::OneForm => 1,
            Self::Germanic | Self::French => 2,
            Self::SlavicEast
            | Self::Polish
            | Self::Czech
            | Self::Lithuanian
            | Self::Latvian
            | Self::Romanian => 3,
            Self::Slovenian => 4,
            Self::Irish => 5,
            Self::Arabic => 6,
            Self::Custom { nplurals, .. } => *nplurals,
        }
    }

    /// Short name of the rule family
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OneForm => "one-form",
            Self::Germanic => "germanic",
            Self::French => "french",
            Self::SlavicEast => "slavic-east",
            Self::Polish => "polish",
            Self::Czech => "czech",
            Self::Lithuanian => "lithuanian",
            Self::Latvian => "latvian",
            Self::Romanian => "romanian",
            Self::Slovenian => "slovenian",
            Self::Irish => "irish",
            Self::Arabic => "arabic",
            Self::Custom { .. } => "custom",
        }
    }

    /// Plural-form index for `count`
    ///
    /// Custom formulas may return an index outside `0..nplurals()`; callers
    /// clamp against the actual number of forms.
    pub fn index(&self, count: i64) -> usize {
        let n = count;
        // Truncating remainders: negative counts never match a positive
        // last-digit condition.
        let (n10, n100) = (n % 10, n % 100);

        match self {
            Self::OneForm => 0,
            Self::Germanic => usize::from(n != 1),
            Self::French => usize::from(n > 1),
            Self::SlavicEast => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            Self::Lithuanian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n10 >= 2 && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Latvian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n != 0 {
                    1
                } else {
                    2
                }
            }
            Self::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Slovenian => match n100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            Self::Irish => match n {
                1 => 0,
                2 => 1,
                3..=6 => 2,
                7..=10 => 3,
                _ => 4,
            },
            Self::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&n100) => 3,
                _ if n100 >= 11 => 4,
                _ => 5,
            },
            Self::Custom { eval, .. } => eval(n),
        }
    }
}

impl Default for PluralRule {
    fn default() -> Self {
        Self::Germanic
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom { nplurals, .. } => f
                .debug_struct("Custom")
                .field("nplurals", nplurals)
                .finish_non_exhaustive(),
            other => f.write_str(other.name()),
        }
    }
}

impl PartialEq for PluralRule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom { nplurals: a, eval: f }, Self::Custom { nplurals: b, eval: g }) => {
                a == b && *f as usize == *g as usize
            }
            _ => self.name() == other.name(),
        }
    }
}
