//! Template catalog keyed by validation rule.
//!
//! # Invariants
//!
//! 1. **Build then share**: a catalog is mutated only through the `insert_*`
//!    and `replace_*` methods while it is being assembled. Lookups take
//!    `&self`, so a finished catalog can be shared across threads
//!    (`TemplateCatalog` is `Send + Sync`).
//!
//! 2. **Absence is an error**: lookups return
//!    [`FormatError::MissingTemplate`] instead of an empty string. A plural
//!    form missing for a category is not substituted by another category.
//!
//! 3. **Coverage is checkable**: [`TemplateCatalog::coverage_report`] lists
//!    every template a registered rule claims to support but lacks.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown rule | Rule not registered | `MissingTemplate(rule)` |
//! | Missing sentence | Magnitude rule lacks a family | `MissingTemplate(rule-family)` |
//! | Missing unit form | Category absent from `PluralForms` | `MissingTemplate(rule-family[cat])` |
//! | Duplicate insert | Key already registered | `CatalogError::Duplicate*` |

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::{FormatError, TemplateKey};
use crate::kind::{KindFamily, ValueKind};
use crate::number::NumberFormat;
use crate::plural::{PluralCategory, PluralForms, PluralRule};

/// Errors from assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The rule is already registered.
    DuplicateRule { locale: String, rule: String },
    /// The field alias is already registered.
    DuplicateField { locale: String, field: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRule { locale, rule } => {
                write!(f, "duplicate rule '{rule}' in locale '{locale}'")
            }
            Self::DuplicateField { locale, field } => {
                write!(f, "duplicate field alias '{field}' in locale '{locale}'")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// How a rule's message is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFamily {
    /// One sentence; field label and raw parameter substituted verbatim.
    Scalar,
    /// Sentence chosen by value kind; counted kinds embed a pluralized unit.
    Magnitude,
}

/// Templates of a magnitude rule (`len`, `min`, `lt`, …).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MagnitudeRule {
    accepts_temporal: bool,
    sentences: BTreeMap<KindFamily, String>,
    units: BTreeMap<KindFamily, PluralForms>,
}

impl MagnitudeRule {
    /// A rule accepting text, collection and numeric values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also accept date/time values (compared against the current instant).
    #[must_use]
    pub fn temporal(mut self) -> Self {
        self.accepts_temporal = true;
        self
    }

    /// Set the sentence template for `family`.
    #[must_use]
    pub fn with_sentence(mut self, family: KindFamily, template: impl Into<String>) -> Self {
        self.sentences.insert(family, template.into());
        self
    }

    /// Set the unit-noun forms for a counted `family`.
    #[must_use]
    pub fn with_units(mut self, family: KindFamily, forms: PluralForms) -> Self {
        self.units.insert(family, forms);
        self
    }

    /// Whether date/time values are accepted.
    #[must_use]
    pub const fn accepts_temporal(&self) -> bool {
        self.accepts_temporal
    }

    /// Families this rule claims to support.
    pub fn supported_families(&self) -> impl Iterator<Item = KindFamily> + '_ {
        KindFamily::ALL
            .into_iter()
            .filter(|family| *family != KindFamily::Datetime || self.accepts_temporal)
    }

    /// Template bucket for a classified value kind, if the rule accepts it.
    #[must_use]
    pub fn family_for(&self, kind: ValueKind) -> Option<KindFamily> {
        match kind {
            ValueKind::Text => Some(KindFamily::String),
            ValueKind::Collection => Some(KindFamily::Items),
            ValueKind::Number => Some(KindFamily::Number),
            ValueKind::Temporal if self.accepts_temporal => Some(KindFamily::Datetime),
            ValueKind::Temporal | ValueKind::Other => None,
        }
    }

    #[must_use]
    pub fn sentence(&self, family: KindFamily) -> Option<&str> {
        self.sentences.get(&family).map(String::as_str)
    }

    #[must_use]
    pub fn units(&self, family: KindFamily) -> Option<&PluralForms> {
        self.units.get(&family)
    }
}

/// A registered rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleEntry {
    Scalar(String),
    Magnitude(MagnitudeRule),
}

impl RuleEntry {
    #[must_use]
    pub const fn family(&self) -> RuleFamily {
        match self {
            Self::Scalar(_) => RuleFamily::Scalar,
            Self::Magnitude(_) => RuleFamily::Magnitude,
        }
    }
}

/// Validation message templates for one locale.
///
/// # Example
///
/// ```
/// use valmsg::{KindFamily, MagnitudeRule, PluralForms, PluralRule, TemplateCatalog};
///
/// let mut catalog = TemplateCatalog::new("en");
/// catalog.insert_scalar("required", "{0} is required").unwrap();
/// catalog
///     .insert_magnitude(
///         "min",
///         MagnitudeRule::new()
///             .with_sentence(KindFamily::String, "{0} must be at least {1} long")
///             .with_units(
///                 KindFamily::String,
///                 PluralForms {
///                     one: Some("{0} character".into()),
///                     other: Some("{0} characters".into()),
///                     ..Default::default()
///                 },
///             ),
///     )
///     .unwrap();
///
/// assert!(matches!(catalog.plural_rule(), PluralRule::English));
/// assert_eq!(catalog.scalar_template("required").unwrap(), "{0} is required");
/// ```
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    locale: String,
    plural_rule: PluralRule,
    number_format: NumberFormat,
    rules: HashMap<String, RuleEntry>,
    fields: HashMap<String, String>,
}

impl TemplateCatalog {
    /// Create an empty catalog. The plural rule is detected from the locale tag.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        let locale = locale.into();
        Self {
            plural_rule: PluralRule::for_locale(&locale),
            locale,
            number_format: NumberFormat::default(),
            rules: HashMap::new(),
            fields: HashMap::new(),
        }
    }

    pub(crate) fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Override the plural rule.
    pub fn set_plural_rule(&mut self, rule: PluralRule) {
        self.plural_rule = rule;
    }

    /// Override the number symbols.
    pub fn set_number_format(&mut self, format: NumberFormat) {
        self.number_format = format;
    }

    /// Register a scalar rule. Fails if the rule already exists.
    pub fn insert_scalar(
        &mut self,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) -> Result<(), CatalogError> {
        self.insert_rule(rule.into(), RuleEntry::Scalar(template.into()))
    }

    /// Register a magnitude rule. Fails if the rule already exists.
    pub fn insert_magnitude(
        &mut self,
        rule: impl Into<String>,
        templates: MagnitudeRule,
    ) -> Result<(), CatalogError> {
        self.insert_rule(rule.into(), RuleEntry::Magnitude(templates))
    }

    /// Register or overwrite a rule.
    pub fn replace_rule(&mut self, rule: impl Into<String>, entry: RuleEntry) {
        self.rules.insert(rule.into(), entry);
    }

    fn insert_rule(&mut self, rule: String, entry: RuleEntry) -> Result<(), CatalogError> {
        if self.rules.contains_key(&rule) {
            return Err(CatalogError::DuplicateRule {
                locale: self.locale.clone(),
                rule,
            });
        }
        self.rules.insert(rule, entry);
        Ok(())
    }

    /// Register a display label for a raw field name. Fails on duplicates.
    pub fn insert_field_alias(
        &mut self,
        field: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let field = field.into();
        if self.fields.contains_key(&field) {
            return Err(CatalogError::DuplicateField {
                locale: self.locale.clone(),
                field,
            });
        }
        self.fields.insert(field, label.into());
        Ok(())
    }

    /// Register or overwrite a field label.
    pub fn replace_field_alias(&mut self, field: impl Into<String>, label: impl Into<String>) {
        self.fields.insert(field.into(), label.into());
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub const fn plural_rule(&self) -> PluralRule {
        self.plural_rule
    }

    #[must_use]
    pub const fn number_format(&self) -> &NumberFormat {
        &self.number_format
    }

    /// Look up a registered rule.
    #[must_use]
    pub fn rule(&self, rule: &str) -> Option<&RuleEntry> {
        self.rules.get(rule)
    }

    /// Which family a rule belongs to, if registered.
    #[must_use]
    pub fn rule_family(&self, rule: &str) -> Option<RuleFamily> {
        self.rules.get(rule).map(RuleEntry::family)
    }

    /// Display label for a field; the raw name when no alias exists.
    #[must_use]
    pub fn field_label<'a>(&'a self, field: &'a str) -> &'a str {
        self.fields.get(field).map_or(field, String::as_str)
    }

    /// Template of a scalar rule.
    pub fn scalar_template(&self, rule: &str) -> Result<&str, FormatError> {
        match self.rules.get(rule) {
            Some(RuleEntry::Scalar(template)) => Ok(template.as_str()),
            _ => Err(FormatError::MissingTemplate(TemplateKey::rule(rule))),
        }
    }

    /// Sentence template of a magnitude rule for one family.
    pub fn sentence(&self, rule: &str, family: KindFamily) -> Result<&str, FormatError> {
        self.magnitude(rule)
            .and_then(|m| m.sentence(family))
            .ok_or_else(|| FormatError::MissingTemplate(TemplateKey::sentence(rule, family)))
    }

    /// Unit-noun template of a magnitude rule for one family and category.
    pub fn unit(
        &self,
        rule: &str,
        family: KindFamily,
        category: PluralCategory,
    ) -> Result<&str, FormatError> {
        self.magnitude(rule)
            .and_then(|m| m.units(family))
            .and_then(|forms| forms.select(category))
            .ok_or_else(|| FormatError::MissingTemplate(TemplateKey::unit(rule, family, category)))
    }

    fn magnitude(&self, rule: &str) -> Option<&MagnitudeRule> {
        match self.rules.get(rule) {
            Some(RuleEntry::Magnitude(m)) => Some(m),
            _ => None,
        }
    }

    /// Registered rule identifiers, sorted.
    #[must_use]
    pub fn rule_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn field_alias_count(&self) -> usize {
        self.fields.len()
    }

    // -----------------------------------------------------------------------
    // Coverage
    // -----------------------------------------------------------------------

    /// List every template a registered rule claims to support but lacks.
    ///
    /// Counted families need a unit form for each category the catalog's
    /// plural rule can produce.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let mut missing = Vec::new();

        for rule in self.rule_ids() {
            let Some(m) = self.magnitude(rule) else {
                continue;
            };
            for family in m.supported_families() {
                if m.sentence(family).is_none() {
                    missing.push(TemplateKey::sentence(rule, family));
                }
                if !family.is_counted() {
                    continue;
                }
                for &category in self.plural_rule.categories() {
                    if m.units(family).and_then(|f| f.select(category)).is_none() {
                        missing.push(TemplateKey::unit(rule, family, category));
                    }
                }
            }
        }

        CoverageReport {
            locale: self.locale.clone(),
            rules: self.rules.len(),
            missing,
        }
    }

    /// Whether the coverage report is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.coverage_report().missing.is_empty()
    }
}

/// Coverage report for a template catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Locale of the catalog.
    pub locale: String,
    /// Number of registered rules.
    pub rules: usize,
    /// Templates claimed by a rule but absent, in rule order.
    pub missing: Vec<TemplateKey>,
}
