//! Value-kind classification.
//!
//! The validation engine reports the runtime shape of the offending field as
//! a [`FieldKind`]. Classification collapses it to a [`ValueKind`], which in
//! turn selects the template bucket ([`KindFamily`]) of a magnitude rule.

use std::fmt;

/// Runtime shape of a field value as reported by the validation engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Sequence,
    Array,
    Set,
    Map,
    Signed,
    Unsigned,
    Float,
    Bool,
    /// A date/time instant.
    Temporal,
    /// A composite value that is not a date/time instant.
    Struct,
    /// A nullable wrapper around another shape.
    Optional(Box<FieldKind>),
}

impl FieldKind {
    /// Wrap this shape in a nullable wrapper.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    /// Classify the shape, unwrapping exactly one `Optional` level.
    #[must_use]
    pub fn classify(&self) -> ValueKind {
        match self {
            Self::Optional(inner) => inner.classify_direct(),
            other => other.classify_direct(),
        }
    }

    fn classify_direct(&self) -> ValueKind {
        match self {
            Self::Text => ValueKind::Text,
            Self::Sequence | Self::Array | Self::Set | Self::Map => ValueKind::Collection,
            Self::Signed | Self::Unsigned | Self::Float | Self::Bool => ValueKind::Number,
            Self::Temporal => ValueKind::Temporal,
            Self::Struct | Self::Optional(_) => ValueKind::Other,
        }
    }
}

impl From<ValueKind> for FieldKind {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Text => Self::Text,
            ValueKind::Collection => Self::Sequence,
            ValueKind::Number => Self::Float,
            ValueKind::Temporal => Self::Temporal,
            ValueKind::Other => Self::Struct,
        }
    }
}

/// Classified value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Collection,
    Number,
    Temporal,
    Other,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Collection => write!(f, "collection"),
            Self::Number => write!(f, "number"),
            Self::Temporal => write!(f, "temporal"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Template bucket of a magnitude rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KindFamily {
    /// Character-count sentence with a pluralized character noun.
    String,
    /// Item-count sentence with a pluralized item noun.
    Items,
    /// Plain numeric comparison.
    Number,
    /// Comparison against the current instant, without a count.
    Datetime,
}

impl KindFamily {
    /// All families in declaration order.
    pub const ALL: [Self; 4] = [Self::String, Self::Items, Self::Number, Self::Datetime];

    /// Whether sentences of this family embed a pluralized unit noun.
    #[must_use]
    pub const fn is_counted(self) -> bool {
        matches!(self, Self::String | Self::Items)
    }
}

impl fmt::Display for KindFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Items => write!(f, "items"),
            Self::Number => write!(f, "number"),
            Self::Datetime => write!(f, "datetime"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_basic_shapes() {
        assert_eq!(FieldKind::Text.classify(), ValueKind::Text);
        assert_eq!(FieldKind::Map.classify(), ValueKind::Collection);
        assert_eq!(FieldKind::Set.classify(), ValueKind::Collection);
        assert_eq!(FieldKind::Array.classify(), ValueKind::Collection);
        assert_eq!(FieldKind::Unsigned.classify(), ValueKind::Number);
        assert_eq!(FieldKind::Bool.classify(), ValueKind::Number);
        assert_eq!(FieldKind::Temporal.classify(), ValueKind::Temporal);
        assert_eq!(FieldKind::Struct.classify(), ValueKind::Other);
    }

    #[test]
    fn optional_unwraps_one_level() {
        assert_eq!(FieldKind::Text.optional().classify(), ValueKind::Text);
        assert_eq!(FieldKind::Temporal.optional().classify(), ValueKind::Temporal);
        assert_eq!(
            FieldKind::Text.optional().optional().classify(),
            ValueKind::Other
        );
    }

    #[test]
    fn value_kind_round_trips_through_field_kind() {
        for kind in [
            ValueKind::Text,
            ValueKind::Collection,
            ValueKind::Number,
            ValueKind::Temporal,
            ValueKind::Other,
        ] {
            assert_eq!(FieldKind::from(kind).classify(), kind);
        }
    }

    #[test]
    fn counted_families() {
        assert!(KindFamily::String.is_counted());
        assert!(KindFamily::Items.is_counted());
        assert!(!KindFamily::Number.is_counted());
        assert!(!KindFamily::Datetime.is_counted());
    }
}
