#![forbid(unsafe_code)]

//! Localized messages for field-validation failures.
//!
//! Given a failed validation rule (`"min"`, `"len"`, `"gt"`, …), the field it
//! failed on, the rule's raw parameter and the field's value shape, produce a
//! human-readable sentence in the catalog's locale, with the count noun in the
//! grammatically correct plural form (`1 символ`, `3 символа`, `5 символов`).
//!
//! # Pieces
//!
//! - [`plural`]: CLDR-style plural rules over a parsed [`Magnitude`].
//! - [`number`]: parameter parsing that preserves written precision, and
//!   locale number rendering.
//! - [`kind`]: value-shape classification into template families.
//! - [`catalog`]: per-locale templates, field aliases and coverage checks;
//!   [`TemplateCatalog::russian`] is the built-in Russian catalog.
//! - [`formatter`]: the [`MessageFormatter`] that ties them together and
//!   falls back to an unlocalized description instead of failing.
//!
//! # Example
//!
//! ```
//! use valmsg::{FailureRecord, MessageFormatter, TemplateCatalog, ValueKind};
//!
//! let catalog = TemplateCatalog::russian();
//! let formatter = MessageFormatter::new(&catalog);
//!
//! let record = FailureRecord::new("min", "Title", "5", ValueKind::Text);
//! assert_eq!(
//!     formatter.format(&record),
//!     "Поле Название должно содержать минимум 5 символов"
//! );
//! ```

pub mod catalog;
#[cfg(feature = "catalog-config")]
pub mod config;
pub mod error;
pub mod formatter;
pub mod kind;
pub mod number;
pub mod plural;
pub mod record;
mod ru;
pub mod template;

pub use catalog::{
    CatalogError, CoverageReport, MagnitudeRule, RuleEntry, RuleFamily, TemplateCatalog,
};
#[cfg(feature = "catalog-config")]
pub use config::{CatalogConfig, CatalogConfigError};
pub use error::{FormatError, TemplateKey};
pub use formatter::MessageFormatter;
pub use kind::{FieldKind, KindFamily, ValueKind};
pub use number::{Magnitude, NumberFormat, ParseError};
pub use plural::{PluralCategory, PluralForms, PluralRule};
pub use record::FailureRecord;
