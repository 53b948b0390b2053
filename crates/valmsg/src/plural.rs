//! CLDR-style cardinal plural rules.
//!
//! Each [`PluralRule`] maps a parsed [`Magnitude`] to a [`PluralCategory`].
//! Rules are generic language families rather than per-locale special cases,
//! so a catalog can switch locale grammar without touching the formatter.
//!
//! # Invariants
//!
//! 1. Every `PluralRule` maps any magnitude to exactly one `PluralCategory`.
//! 2. A magnitude carrying fractional digits (`"1.5"`, `"3.00"`) never selects
//!    `One`, `Few` or `Many` under the built-in rules.
//! 3. Rules are pure functions: the same magnitude always yields the same
//!    category. Negative magnitudes use the absolute value.

use core::fmt;

use crate::number::Magnitude;

/// Cardinal plural categories used by the built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    One,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// All categories in declaration order.
    pub const ALL: [Self; 4] = [Self::One, Self::Few, Self::Many, Self::Other];
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "one"),
            Self::Few => write!(f, "few"),
            Self::Many => write!(f, "many"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Plural form templates keyed by category.
///
/// Unlike a display-string table, an absent form is never substituted by
/// `other`: the catalog reports it as a missing template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "catalog-config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "catalog-config", serde(default, deny_unknown_fields))]
pub struct PluralForms {
    pub one: Option<String>,
    pub few: Option<String>,
    pub many: Option<String>,
    pub other: Option<String>,
}

impl PluralForms {
    /// Forms for all four categories.
    #[must_use]
    pub fn new(
        one: impl Into<String>,
        few: impl Into<String>,
        many: impl Into<String>,
        other: impl Into<String>,
    ) -> Self {
        Self {
            one: Some(one.into()),
            few: Some(few.into()),
            many: Some(many.into()),
            other: Some(other.into()),
        }
    }

    /// The form registered for `category`, if any.
    #[must_use]
    pub fn select(&self, category: PluralCategory) -> Option<&str> {
        match category {
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
            PluralCategory::Other => self.other.as_deref(),
        }
    }
}

/// A plural rule that maps a magnitude to a plural category.
#[derive(Clone, Copy, Default)]
pub enum PluralRule {
    /// East/South Slavic: `one` for 1, 21, 31…; `few` for 2-4, 22-24…;
    /// `many` for 0, 5-20, 25-30…; `other` for fractional values.
    Slavic,
    /// English-like: `one` for an integral 1, `other` otherwise.
    #[default]
    English,
    /// No plural distinction: always `other`.
    Invariant,
    /// Caller-supplied rule.
    Custom(fn(&Magnitude) -> PluralCategory),
}

impl PluralRule {
    /// Determine the plural category for the given magnitude.
    #[must_use]
    pub fn select(&self, value: &Magnitude) -> PluralCategory {
        match self {
            Self::Slavic => slavic_rule(value.integer_part(), value.decimal_digits()),
            Self::English => english_rule(value.integer_part(), value.decimal_digits()),
            Self::Invariant => PluralCategory::Other,
            Self::Custom(f) => f(value),
        }
    }

    /// Categories this rule can produce. Custom rules are assumed to use all.
    #[must_use]
    pub fn categories(&self) -> &'static [PluralCategory] {
        match self {
            Self::Slavic | Self::Custom(_) => &PluralCategory::ALL,
            Self::English => &[PluralCategory::One, PluralCategory::Other],
            Self::Invariant => &[PluralCategory::Other],
        }
    }

    /// Select the rule for a locale tag (e.g. `"ru"`, `"ru-RU"`, `"en_US"`).
    ///
    /// Falls back to English if the language is unknown.
    #[must_use]
    pub fn for_locale(lang: &str) -> Self {
        let primary = lang.split(['-', '_']).next().unwrap_or(lang);

        match primary.to_ascii_lowercase().as_str() {
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::Slavic,
            "zh" | "ja" | "ko" | "th" | "vi" | "id" | "ms" => Self::Invariant,
            _ => Self::English,
        }
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slavic => write!(f, "PluralRule::Slavic"),
            Self::English => write!(f, "PluralRule::English"),
            Self::Invariant => write!(f, "PluralRule::Invariant"),
            Self::Custom(_) => write!(f, "PluralRule::Custom(...)"),
        }
    }
}

// ── Rule implementations ────────────────────────────────────────────

fn slavic_rule(n: u64, decimal_digits: usize) -> PluralCategory {
    if decimal_digits > 0 {
        return PluralCategory::Other;
    }

    let mod10 = n % 10;
    let mod100 = n % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else if mod10 == 0 || (5..=9).contains(&mod10) || (11..=14).contains(&mod100) {
        PluralCategory::Many
    } else {
        PluralCategory::Other
    }
}

fn english_rule(n: u64, decimal_digits: usize) -> PluralCategory {
    if n == 1 && decimal_digits == 0 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(raw: &str) -> Magnitude {
        Magnitude::parse(raw).unwrap()
    }

    #[test]
    fn slavic_integral_rules() {
        let rule = PluralRule::Slavic;
        assert_eq!(rule.select(&m("0")), PluralCategory::Many);
        assert_eq!(rule.select(&m("1")), PluralCategory::One);
        assert_eq!(rule.select(&m("2")), PluralCategory::Few);
        assert_eq!(rule.select(&m("4")), PluralCategory::Few);
        assert_eq!(rule.select(&m("5")), PluralCategory::Many);
        assert_eq!(rule.select(&m("11")), PluralCategory::Many);
        assert_eq!(rule.select(&m("12")), PluralCategory::Many);
        assert_eq!(rule.select(&m("14")), PluralCategory::Many);
        assert_eq!(rule.select(&m("21")), PluralCategory::One);
        assert_eq!(rule.select(&m("22")), PluralCategory::Few);
        assert_eq!(rule.select(&m("25")), PluralCategory::Many);
        assert_eq!(rule.select(&m("111")), PluralCategory::Many);
        assert_eq!(rule.select(&m("101")), PluralCategory::One);
    }

    #[test]
    fn slavic_fraction_is_other() {
        let rule = PluralRule::Slavic;
        assert_eq!(rule.select(&m("1.5")), PluralCategory::Other);
        assert_eq!(rule.select(&m("1.0")), PluralCategory::Other);
        assert_eq!(rule.select(&m("3.00")), PluralCategory::Other);
    }

    #[test]
    fn english_rules() {
        let rule = PluralRule::English;
        assert_eq!(rule.select(&m("1")), PluralCategory::One);
        assert_eq!(rule.select(&m("1.0")), PluralCategory::Other);
        assert_eq!(rule.select(&m("0")), PluralCategory::Other);
        assert_eq!(rule.select(&m("21")), PluralCategory::Other);
    }

    #[test]
    fn negative_uses_absolute_value() {
        let rule = PluralRule::Slavic;
        assert_eq!(rule.select(&m("-1")), PluralCategory::One);
        assert_eq!(rule.select(&m("-3")), PluralCategory::Few);
    }

    #[test]
    fn invariant_always_other() {
        for raw in ["0", "1", "2", "5", "100"] {
            assert_eq!(PluralRule::Invariant.select(&m(raw)), PluralCategory::Other);
        }
    }

    #[test]
    fn custom_rule() {
        let rule = PluralRule::Custom(|v| {
            if v.integer_part() == 42 {
                PluralCategory::Few
            } else {
                PluralCategory::Other
            }
        });
        assert_eq!(rule.select(&m("42")), PluralCategory::Few);
        assert_eq!(rule.select(&m("1")), PluralCategory::Other);
    }

    #[test]
    fn locale_detection() {
        assert!(matches!(PluralRule::for_locale("ru"), PluralRule::Slavic));
        assert!(matches!(PluralRule::for_locale("ru-RU"), PluralRule::Slavic));
        assert!(matches!(PluralRule::for_locale("uk_UA"), PluralRule::Slavic));
        assert!(matches!(PluralRule::for_locale("en"), PluralRule::English));
        assert!(matches!(PluralRule::for_locale("ja"), PluralRule::Invariant));
        assert!(matches!(PluralRule::for_locale(""), PluralRule::English));
    }

    #[test]
    fn categories_cover_selection() {
        for rule in [PluralRule::Slavic, PluralRule::English, PluralRule::Invariant] {
            for raw in ["0", "1", "2", "5", "11", "21", "1.5"] {
                assert!(rule.categories().contains(&rule.select(&m(raw))));
            }
        }
    }

    #[test]
    fn plural_forms_select_has_no_implicit_fallback() {
        let forms = PluralForms {
            one: Some("{0} item".into()),
            other: Some("{0} items".into()),
            ..Default::default()
        };
        assert_eq!(forms.select(PluralCategory::One), Some("{0} item"));
        assert_eq!(forms.select(PluralCategory::Few), None);
        assert_eq!(forms.select(PluralCategory::Other), Some("{0} items"));
    }

    #[test]
    fn plural_category_display() {
        assert_eq!(PluralCategory::One.to_string(), "one");
        assert_eq!(PluralCategory::Many.to_string(), "many");
    }
}
