//! Catalog definitions loaded from TOML or JSON.
//!
//! # Loading
//!
//! ```toml
//! # valmsg-ru.toml
//! locale = "ru"
//! base = "ru"
//!
//! [scalar]
//! e164 = "Поле {0} должно быть телефонным номером в формате E.164"
//!
//! [fields]
//! Nickname = "Псевдоним"
//! ```
//!
//! ```rust,ignore
//! let catalog = CatalogConfig::from_toml_file("valmsg-ru.toml")?.into_catalog()?;
//! ```
//!
//! Entries in the file replace same-named entries of the `base` catalog. A
//! magnitude rule given in the file replaces the base rule as a whole.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{MagnitudeRule, RuleEntry, TemplateCatalog};
use crate::kind::KindFamily;
use crate::number::NumberFormat;
use crate::plural::{PluralForms, PluralRule};

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// A catalog definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Locale tag of the resulting catalog.
    pub locale: String,
    /// Built-in catalog to start from (`"ru"`).
    pub base: Option<String>,
    /// Plural rule; detected from `locale` (or taken from `base`) when absent.
    pub plural_rule: Option<PluralRuleName>,
    /// Number symbols; taken from `base` or the plain default when absent.
    pub number: Option<NumberFormat>,
    /// Scalar rule templates.
    pub scalar: BTreeMap<String, String>,
    /// Magnitude rule templates.
    pub magnitude: BTreeMap<String, MagnitudeRuleConfig>,
    /// Field display labels.
    pub fields: BTreeMap<String, String>,
}

/// Built-in plural rules selectable from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralRuleName {
    Slavic,
    English,
    Invariant,
}

impl From<PluralRuleName> for PluralRule {
    fn from(name: PluralRuleName) -> Self {
        match name {
            PluralRuleName::Slavic => Self::Slavic,
            PluralRuleName::English => Self::English,
            PluralRuleName::Invariant => Self::Invariant,
        }
    }
}

/// One magnitude rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MagnitudeRuleConfig {
    /// Accept date/time values.
    pub temporal: bool,
    pub sentences: SentencesConfig,
    pub units: UnitsConfig,
}

/// Sentence templates per kind family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SentencesConfig {
    pub string: Option<String>,
    pub items: Option<String>,
    pub number: Option<String>,
    pub datetime: Option<String>,
}

/// Unit-noun forms for the counted families.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnitsConfig {
    pub string: Option<PluralForms>,
    pub items: Option<PluralForms>,
}

impl MagnitudeRuleConfig {
    fn to_rule(&self) -> MagnitudeRule {
        let mut rule = MagnitudeRule::new();
        if self.temporal {
            rule = rule.temporal();
        }
        let sentences = [
            (KindFamily::String, &self.sentences.string),
            (KindFamily::Items, &self.sentences.items),
            (KindFamily::Number, &self.sentences.number),
            (KindFamily::Datetime, &self.sentences.datetime),
        ];
        for (family, template) in sentences {
            if let Some(template) = template {
                rule = rule.with_sentence(family, template.clone());
            }
        }
        let units = [
            (KindFamily::String, &self.units.string),
            (KindFamily::Items, &self.units.items),
        ];
        for (family, forms) in units {
            if let Some(forms) = forms {
                rule = rule.with_units(family, forms.clone());
            }
        }
        rule
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl CatalogConfig {
    /// Parse from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, CatalogConfigError> {
        toml::from_str(s).map_err(CatalogConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CatalogConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(CatalogConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, CatalogConfigError> {
        serde_json::from_str(s).map_err(CatalogConfigError::Json)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(CatalogConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Check the definition before building.
    ///
    /// Returns a list of problems. An empty list means the definition can be
    /// turned into a catalog, subject to the coverage check.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.locale.trim().is_empty() {
            errors.push("locale must not be empty".to_owned());
        }
        if let Some(base) = &self.base
            && base != "ru"
        {
            errors.push(format!("unknown base catalog '{base}'"));
        }
        for (rule, template) in &self.scalar {
            if template.is_empty() {
                errors.push(format!("scalar.{rule} must not be empty"));
            }
        }
        for rule in self.magnitude.keys() {
            if self.scalar.contains_key(rule) {
                errors.push(format!("rule '{rule}' defined as both scalar and magnitude"));
            }
        }
        for (field, label) in &self.fields {
            if label.is_empty() {
                errors.push(format!("fields.{field} must not be empty"));
            }
        }
        for (rule, m) in &self.magnitude {
            let sentences = [
                ("string", &m.sentences.string),
                ("items", &m.sentences.items),
                ("number", &m.sentences.number),
                ("datetime", &m.sentences.datetime),
            ];
            for (family, template) in sentences {
                if template.as_deref() == Some("") {
                    errors.push(format!("magnitude.{rule}.sentences.{family} must not be empty"));
                }
            }
            if m.sentences.datetime.is_some() && !m.temporal {
                errors.push(format!(
                    "magnitude.{rule}.sentences.datetime requires temporal = true"
                ));
            }
        }

        errors
    }

    /// Build the catalog: start from `base`, apply the file's entries, then
    /// require a complete coverage report.
    pub fn into_catalog(self) -> Result<TemplateCatalog, CatalogConfigError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(CatalogConfigError::Validation(errors));
        }

        let mut catalog = match self.base.as_deref() {
            Some(_) => {
                let mut base = TemplateCatalog::russian();
                base.set_locale(self.locale.clone());
                base
            }
            None => TemplateCatalog::new(self.locale.clone()),
        };

        if let Some(rule) = self.plural_rule {
            catalog.set_plural_rule(rule.into());
        }
        if let Some(number) = self.number {
            catalog.set_number_format(number);
        }
        for (rule, m) in &self.magnitude {
            catalog.replace_rule(rule.clone(), RuleEntry::Magnitude(m.to_rule()));
        }
        for (rule, template) in self.scalar {
            catalog.replace_rule(rule, RuleEntry::Scalar(template));
        }
        for (field, label) in self.fields {
            catalog.replace_field_alias(field, label);
        }

        let report = catalog.coverage_report();
        if !report.missing.is_empty() {
            return Err(CatalogConfigError::Validation(
                report
                    .missing
                    .iter()
                    .map(|key| format!("missing template '{key}'"))
                    .collect(),
            ));
        }

        tracing::debug!(
            locale = catalog.locale(),
            rules = catalog.rule_count(),
            fields = catalog.field_alias_count(),
            "validation message catalog loaded"
        );
        Ok(catalog)
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a catalog definition.
#[derive(Debug)]
pub enum CatalogConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// Validation or coverage errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for CatalogConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "catalog validation failed: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for CatalogConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
