//! AND/OR combination of active predicates across a record collection.

use crate::filter::predicate::matches;
use crate::record::Record;
use crate::state::FilterStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How active field predicates combine across a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterMode {
    /// A record survives iff it satisfies every active field's predicate.
    #[default]
    And,
    /// A record survives iff it satisfies at least one active field's predicate.
    Or,
}

/// Produces the filtered view of `records` under the store's current state.
///
/// With zero active filters the source collection is returned unchanged
/// (identity short-circuit). Surviving records keep their source order in
/// both modes; the filter never resorts.
///
/// Cost is O(records x active fields), evaluated in one bounded synchronous
/// pass.
#[must_use]
pub fn apply_filters(store: &FilterStore, records: &[Record], mode: FilterMode) -> Vec<Record> {
    let active = store.active_fields();
    if active.is_empty() {
        return records.to_vec();
    }

    match mode {
        FilterMode::And => {
            // Narrow per field, in config declaration order.
            let mut retained: Vec<Record> = records.to_vec();
            for field in active {
                let filter = match store.get(field) {
                    Some(value) => value,
                    None => continue,
                };
                let before = retained.len();
                retained.retain(|record| matches(record.get(field), filter));
                debug!(field, before, after = retained.len(), "narrowed by field");
            }
            retained
        }
        FilterMode::Or => records
            .iter()
            .filter(|record| {
                active.iter().any(|field| {
                    store
                        .get(field)
                        .is_some_and(|filter| matches(record.get(field), filter))
                })
            })
            .cloned()
            .collect(),
    }
}
