//! Per-field filter configuration.

use crate::record::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The predicate kind a filterable field supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Case-insensitive substring search with pipe-separated OR terms.
    Text,
    /// Inclusive numeric range with optional bounds.
    Number,
    /// Calendar date range with optional bounds.
    Date,
    /// Exact equality against one of an enumerated option set.
    Select,
}

/// One choice offered by a select filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Human-readable label shown by the presentation layer.
    pub label: String,
    /// The value compared against record cells.
    pub value: FieldValue,
}

impl SelectOption {
    /// Creates a new option.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Declaration of a single filterable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// The predicate kind for this field.
    pub kind: FilterKind,
    /// Option set for [`FilterKind::Select`] fields; empty otherwise.
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

/// Declares which fields are filterable and how.
///
/// A field absent from the config is never filterable: filter input for it
/// is dropped at the state boundary. Declaration order is preserved and
/// drives the narrowing order in AND mode.
///
/// # Examples
///
/// ```
/// use gridsift::{FilterConfig, SelectOption};
///
/// let config = FilterConfig::new()
///     .text("sku")
///     .number("price")
///     .date("received")
///     .select("status", vec![
///         SelectOption::new("Active", "Active"),
///         SelectOption::new("Discontinued", "Discontinued"),
///     ]);
/// assert_eq!(config.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterConfig {
    fields: IndexMap<String, FieldSpec>,
}

impl FilterConfig {
    /// Creates an empty config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a text-filterable field.
    #[must_use]
    pub fn text(self, key: impl Into<String>) -> Self {
        self.declare(key, FilterKind::Text, Vec::new())
    }

    /// Declares a numeric-range-filterable field.
    #[must_use]
    pub fn number(self, key: impl Into<String>) -> Self {
        self.declare(key, FilterKind::Number, Vec::new())
    }

    /// Declares a date-range-filterable field.
    #[must_use]
    pub fn date(self, key: impl Into<String>) -> Self {
        self.declare(key, FilterKind::Date, Vec::new())
    }

    /// Declares a select-filterable field with its option set.
    #[must_use]
    pub fn select(self, key: impl Into<String>, options: Vec<SelectOption>) -> Self {
        self.declare(key, FilterKind::Select, options)
    }

    fn declare(mut self, key: impl Into<String>, kind: FilterKind, options: Vec<SelectOption>) -> Self {
        self.fields.insert(key.into(), FieldSpec { kind, options });
        self
    }

    /// Looks up the declaration for a field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.get(key)
    }

    /// Iterates the declared field keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
