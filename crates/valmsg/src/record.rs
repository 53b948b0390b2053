//! Validation failure records.

use std::fmt;

use crate::kind::FieldKind;

/// One constraint violation reported by the validation engine.
///
/// Immutable once built. `param` is the constraint bound exactly as written on
/// the rule (`"10"`, `"3.50"`, or a field name for cross-field rules).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    rule: String,
    field: String,
    param: String,
    kind: FieldKind,
    namespace: Option<String>,
}

impl FailureRecord {
    /// Build a record for `field` failing `rule` with parameter `param`.
    #[must_use]
    pub fn new(
        rule: impl Into<String>,
        field: impl Into<String>,
        param: impl Into<String>,
        kind: impl Into<FieldKind>,
    ) -> Self {
        Self {
            rule: rule.into(),
            field: field.into(),
            param: param.into(),
            kind: kind.into(),
            namespace: None,
        }
    }

    /// Attach the field's full path (e.g. `"Event.Title"`).
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn param(&self) -> &str {
        &self.param
    }

    #[must_use]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// The field's full path, or the bare field name when none was given.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(&self.field)
    }

    /// Unlocalized description used when no catalog message can be built.
    #[must_use]
    pub fn fallback_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key: '{}' Error:Field validation for '{}' failed on the '{}' tag",
            self.namespace(),
            self.field,
            self.rule
        )?;
        if !self.param.is_empty() {
            write!(f, " (param '{}')", self.param)?;
        }
        Ok(())
    }
}
