//! Message formatter: failure record in, localized sentence out.
//!
//! # Algorithm
//!
//! 1. Resolve the field's display label (alias table, else the raw name).
//! 2. Scalar rule: substitute `(label, raw parameter)` into its template.
//! 3. Magnitude rule: classify the value kind and pick the template family.
//!    Date/time values use the rule's fixed "relative to now" sentence.
//!    Otherwise the parameter is parsed, rendered with its source precision,
//!    and, for text and collections, wrapped in the unit noun selected by the
//!    catalog's plural rule before substitution into the sentence.
//!
//! Any failure short-circuits to the record's fallback description. The
//! failure is reported through `tracing` and never reaches the caller of
//! [`MessageFormatter::format`].

use std::collections::BTreeMap;

use crate::catalog::{RuleEntry, TemplateCatalog};
use crate::error::{FormatError, TemplateKey};
use crate::kind::KindFamily;
use crate::number::Magnitude;
use crate::record::FailureRecord;
use crate::template::interpolate;

/// Renders failure records against a borrowed catalog.
///
/// Holds only a shared reference, so one formatter (or many) can be used from
/// any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct MessageFormatter<'a> {
    catalog: &'a TemplateCatalog,
}

impl<'a> MessageFormatter<'a> {
    #[must_use]
    pub const fn new(catalog: &'a TemplateCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a TemplateCatalog {
        self.catalog
    }

    /// Render `record`, falling back to its unlocalized description.
    ///
    /// Never returns an empty string.
    #[must_use]
    pub fn format(&self, record: &FailureRecord) -> String {
        match self.try_format(record) {
            Ok(message) => message,
            Err(err) => {
                tracing::warn!(
                    locale = self.catalog.locale(),
                    rule = record.rule(),
                    field = record.field(),
                    param = record.param(),
                    error = %err,
                    "validation message fell back to unlocalized text"
                );
                record.fallback_message()
            }
        }
    }

    /// Render `record` or report why the catalog could not.
    pub fn try_format(&self, record: &FailureRecord) -> Result<String, FormatError> {
        let label = self.catalog.field_label(record.field());

        match self.catalog.rule(record.rule()) {
            Some(RuleEntry::Scalar(template)) => {
                Ok(interpolate(template, &[label, record.param()]))
            }
            Some(RuleEntry::Magnitude(templates)) => {
                let kind = record.kind().classify();
                let family = templates.family_for(kind).ok_or_else(|| {
                    FormatError::UnsupportedKind {
                        rule: record.rule().to_owned(),
                        kind,
                    }
                })?;
                self.format_magnitude(record.rule(), family, label, record.param())
            }
            None => Err(FormatError::MissingTemplate(TemplateKey::rule(record.rule()))),
        }
    }

    fn format_magnitude(
        &self,
        rule: &str,
        family: KindFamily,
        label: &str,
        param: &str,
    ) -> Result<String, FormatError> {
        let sentence = self.catalog.sentence(rule, family)?;
        if family == KindFamily::Datetime {
            return Ok(interpolate(sentence, &[label]));
        }

        let magnitude = Magnitude::parse(param)?;
        let number = self.catalog.number_format().format(&magnitude);
        if !family.is_counted() {
            return Ok(interpolate(sentence, &[label, number.as_str()]));
        }

        let category = self.catalog.plural_rule().select(&magnitude);
        let unit_template = self.catalog.unit(rule, family, category)?;
        let unit = interpolate(unit_template, &[number.as_str()]);
        Ok(interpolate(sentence, &[label, unit.as_str()]))
    }

    /// Render every record, keyed by namespace. Later records for the same
    /// namespace replace earlier ones.
    #[must_use]
    pub fn format_all<'r, I>(&self, records: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = &'r FailureRecord>,
    {
        records
            .into_iter()
            .map(|record| (record.namespace().to_owned(), self.format(record)))
            .collect()
    }
}
