//! Typed filter values, validated at the input boundary.

use crate::filter::config::FilterKind;
use crate::record::FieldValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The current raw user input for one field, tagged by predicate kind.
///
/// The variant must agree with the field's declared [`FilterKind`]; the
/// state store enforces that at set time, so the predicate evaluator never
/// has to type-sniff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    /// Free-text search; `|` separates OR terms.
    Text(String),
    /// Numeric range, either bound optional, both inclusive.
    NumberRange(Option<f64>, Option<f64>),
    /// Date range, either bound optional.
    DateRange(Option<NaiveDate>, Option<NaiveDate>),
    /// One configured option's value, or nothing selected.
    Select(Option<FieldValue>),
}

impl FilterValue {
    /// Convenience constructor for a text filter.
    #[must_use]
    pub fn text(input: impl Into<String>) -> Self {
        Self::Text(input.into())
    }

    /// Convenience constructor for a numeric range filter.
    #[must_use]
    pub const fn number_range(min: Option<f64>, max: Option<f64>) -> Self {
        Self::NumberRange(min, max)
    }

    /// Convenience constructor for a date range filter.
    #[must_use]
    pub const fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self::DateRange(start, end)
    }

    /// Convenience constructor for a select filter.
    #[must_use]
    pub fn select(value: impl Into<FieldValue>) -> Self {
        Self::Select(Some(value.into()))
    }

    /// The predicate kind this value's shape belongs to.
    #[must_use]
    pub const fn kind(&self) -> FilterKind {
        match self {
            Self::Text(_) => FilterKind::Text,
            Self::NumberRange(..) => FilterKind::Number,
            Self::DateRange(..) => FilterKind::Date,
            Self::Select(_) => FilterKind::Select,
        }
    }

    /// The activity test: whether this value constitutes a live filter.
    ///
    /// Tuple-shaped values are active when at least one slot is set; a text
    /// value is active when non-empty (a whitespace-only string is active
    /// but yields an empty term list, so it matches nothing).
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::NumberRange(min, max) => min.is_some() || max.is_some(),
            Self::DateRange(start, end) => start.is_some() || end.is_some(),
            Self::Select(value) => value.is_some(),
        }
    }

    /// The empty representation of this value's kind, as left behind by a
    /// per-field clear.
    #[must_use]
    pub const fn cleared(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Text => Self::Text(String::new()),
            FilterKind::Number => Self::NumberRange(None, None),
            FilterKind::Date => Self::DateRange(None, None),
            FilterKind::Select => Self::Select(None),
        }
    }
}
