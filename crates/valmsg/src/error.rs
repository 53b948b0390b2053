//! Formatting error taxonomy.
//!
//! None of these escape [`MessageFormatter::format`](crate::MessageFormatter::format):
//! they are recovered into a fallback string and reported as a diagnostic.
//! [`MessageFormatter::try_format`](crate::MessageFormatter::try_format)
//! exposes them to callers that want the typed failure.

use std::fmt;

use crate::kind::{KindFamily, ValueKind};
use crate::number::ParseError;
use crate::plural::PluralCategory;

/// Address of a template in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub rule: String,
    pub family: Option<KindFamily>,
    pub category: Option<PluralCategory>,
}

impl TemplateKey {
    /// Key of a rule's top-level entry.
    #[must_use]
    pub fn rule(rule: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            family: None,
            category: None,
        }
    }

    /// Key of a magnitude rule's sentence for one family.
    #[must_use]
    pub fn sentence(rule: impl Into<String>, family: KindFamily) -> Self {
        Self {
            rule: rule.into(),
            family: Some(family),
            category: None,
        }
    }

    /// Key of a unit-noun form.
    #[must_use]
    pub fn unit(rule: impl Into<String>, family: KindFamily, category: PluralCategory) -> Self {
        Self {
            rule: rule.into(),
            family: Some(family),
            category: Some(category),
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rule)?;
        if let Some(family) = self.family {
            write!(f, "-{family}")?;
        }
        if let Some(category) = self.category {
            write!(f, "[{category}]")?;
        }
        Ok(())
    }
}

/// Why a failure record could not be rendered from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A magnitude rule's parameter is not a decimal numeral.
    Parse(ParseError),
    /// The rule has no template variant for the field's value kind.
    UnsupportedKind { rule: String, kind: ValueKind },
    /// The catalog has no template for the key.
    MissingTemplate(TemplateKey),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parameter parse error: {e}"),
            Self::UnsupportedKind { rule, kind } => {
                write!(f, "unsupported rule/kind combination: '{rule}' on {kind} value")
            }
            Self::MissingTemplate(key) => write!(f, "missing template '{key}'"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for FormatError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}
