//! Filter state: the per-field raw filter values and their accounting.

use crate::filter::config::{FilterConfig, FilterKind};
use crate::filter::value::FilterValue;
use indexmap::IndexMap;
use tracing::warn;

/// Holds the current raw filter value per field key.
///
/// The store owns the [`FilterConfig`] and validates every write against
/// it: input for an unconfigured field, or input whose shape disagrees with
/// the field's declared kind, is dropped with a warning rather than stored.
/// That keeps the predicate evaluator free of type sniffing.
#[derive(Debug, Clone)]
pub struct FilterStore {
    config: FilterConfig,
    filters: IndexMap<String, FilterValue>,
}

impl FilterStore {
    /// Creates an empty store for the given field configuration.
    #[must_use]
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            filters: IndexMap::new(),
        }
    }

    /// The field configuration this store validates against.
    #[must_use]
    pub const fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Sets one field's filter value.
    ///
    /// Writes for unconfigured fields, kind mismatches, and select values
    /// outside the configured option set are ignored with a warning; the
    /// remaining state is untouched either way.
    pub fn set(&mut self, field: &str, value: FilterValue) {
        let spec = match self.config.field(field) {
            Some(spec) => spec,
            None => {
                warn!(field, "ignoring filter for unconfigured field");
                return;
            }
        };
        if spec.kind != value.kind() {
            warn!(
                field,
                expected = ?spec.kind,
                got = ?value.kind(),
                "ignoring filter value of mismatched kind"
            );
            return;
        }
        if let FilterValue::Select(Some(selected)) = &value {
            if !spec.options.iter().any(|opt| opt.value == *selected) {
                warn!(field, "ignoring select value outside the configured options");
                return;
            }
        }
        self.filters.insert(field.to_string(), value);
    }

    /// Resets one field's filter to its empty representation.
    pub fn clear(&mut self, field: &str) {
        if let Some(spec) = self.config.field(field) {
            self.filters
                .insert(field.to_string(), FilterValue::cleared(spec.kind));
        }
    }

    /// Wholesale reset: every field back to no filter.
    pub fn clear_all(&mut self) {
        self.filters.clear();
    }

    /// The current raw value for a field, if any was set.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.filters.get(field)
    }

    /// Whether a field currently carries an active filter.
    #[must_use]
    pub fn is_active(&self, field: &str) -> bool {
        self.filters.get(field).is_some_and(FilterValue::is_active)
    }

    /// Number of fields currently carrying an active filter.
    #[must_use]
    pub fn count_active(&self) -> usize {
        self.config.keys().filter(|key| self.is_active(key)).count()
    }

    /// The active field keys, in config declaration order.
    #[must_use]
    pub fn active_fields(&self) -> Vec<&str> {
        self.config
            .keys()
            .filter(|key| self.is_active(key))
            .collect()
    }
}
