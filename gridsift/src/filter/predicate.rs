//! Predicate evaluation: does one cell value satisfy one filter value?
//!
//! Evaluation never fails. Any shape mismatch or unparsable input resolves
//! to `false` (record excluded), so the view always renders something.

use crate::filter::value::FilterValue;
use crate::record::FieldValue;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Decides whether one record's field value satisfies one filter value.
///
/// Invoked only for fields whose filter is currently active; an inactive
/// filter value still resolves to `false` rather than panicking.
///
/// # Examples
///
/// ```
/// use gridsift::{matches, FieldValue, FilterValue};
///
/// let cell = FieldValue::from("Apple");
/// assert!(matches(Some(&cell), &FilterValue::text("app | cherry")));
/// assert!(!matches(Some(&cell), &FilterValue::text("banana")));
/// ```
#[must_use]
pub fn matches(record_value: Option<&FieldValue>, filter: &FilterValue) -> bool {
    match filter {
        FilterValue::Text(input) => matches_text(record_value, input),
        FilterValue::NumberRange(min, max) => matches_number(record_value, *min, *max),
        FilterValue::DateRange(start, end) => matches_date(record_value, *start, *end),
        FilterValue::Select(selected) => matches_select(record_value, selected.as_ref()),
    }
}

/// Splits raw text input on the literal pipe separator into search terms.
///
/// Each term is trimmed; empty terms (consecutive pipes, stray whitespace)
/// are dropped silently. This is the one user-facing mini-syntax the engine
/// must preserve exactly: `"ABC | XYZ"` yields `["ABC", "XYZ"]`.
#[must_use]
pub fn split_terms(input: &str) -> Vec<&str> {
    input
        .split('|')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect()
}

fn matches_text(record_value: Option<&FieldValue>, input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    let cell = match record_value {
        Some(v) if !v.is_null() => v,
        _ => return false,
    };

    let terms = split_terms(input);
    if terms.is_empty() {
        return false;
    }

    let haystack = cell.to_string().to_lowercase();
    terms
        .iter()
        .any(|term| haystack.contains(&term.to_lowercase()))
}

fn matches_number(record_value: Option<&FieldValue>, min: Option<f64>, max: Option<f64>) -> bool {
    let value = match record_value.and_then(FieldValue::as_number) {
        Some(n) => n,
        None => return false,
    };

    match (min, max) {
        (Some(min), Some(max)) => value >= min && value <= max,
        (Some(min), None) => value >= min,
        (None, Some(max)) => value <= max,
        (None, None) => false,
    }
}

// The both-bounds branch is strictly exclusive at the start-of-day and
// end-of-day instants; each single-bound branch also accepts the bound's own
// calendar day. Callers wanting a start-day-inclusive both-bounds range must
// widen the start by one day.
fn matches_date(
    record_value: Option<&FieldValue>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    let value = match record_value.and_then(FieldValue::as_datetime) {
        Some(dt) => dt,
        None => return false,
    };

    match (start, end) {
        (Some(start), Some(end)) => {
            value > start_of_day(start)
                && end_of_day_exclusive(end).is_some_and(|bound| value < bound)
        }
        (Some(start), None) => value > start_of_day(start) || value.date() == start,
        (None, Some(end)) => {
            end_of_day_exclusive(end).is_some_and(|bound| value < bound) || value.date() == end
        }
        (None, None) => false,
    }
}

fn matches_select(record_value: Option<&FieldValue>, selected: Option<&FieldValue>) -> bool {
    match (record_value, selected) {
        (Some(cell), Some(wanted)) => cell == wanted,
        _ => false,
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

// "Before end of day" expressed as an exclusive bound at the next midnight.
fn end_of_day_exclusive(date: NaiveDate) -> Option<NaiveDateTime> {
    date.succ_opt().map(|next| next.and_time(NaiveTime::MIN))
}
