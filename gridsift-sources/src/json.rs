//! JSON row ingestion.
//!
//! The data collaborator typically hands the engine a JSON array of row
//! objects fetched from an API. This source converts those rows into
//! [`Record`]s: scalar cells map directly, nested arrays and objects
//! collapse to null, and non-object rows are skipped.

use crate::error::{SourceError, SourceResult};
use crate::types::{CollectionReceiver, RecordSource, SourceFuture};
use gridsift::{FieldValue, Record};
use serde_json::Value;
use tracing::warn;

/// A source over a JSON array of row objects.
pub struct JsonSource {
    records: Vec<Record>,
}

impl JsonSource {
    /// Creates a source from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Parse`] if the value is not an array.
    pub fn new(rows: &Value) -> SourceResult<Self> {
        Ok(Self {
            records: records_from_json(rows)?,
        })
    }

    /// Creates a source by parsing a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Parse`] if the input is not valid JSON or not
    /// an array.
    pub fn from_json_str(input: &str) -> SourceResult<Self> {
        let rows: Value = serde_json::from_str(input)?;
        Self::new(&rows)
    }

    /// The converted records.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl RecordSource for JsonSource {
    fn stream(&self) -> SourceFuture<'_, CollectionReceiver> {
        let records = self.records.clone();
        Box::pin(async move {
            let (tx, rx) = flume::bounded(1);
            let _ = tx.send(records);
            drop(tx);
            Ok(rx)
        })
    }
}

/// Converts a JSON array of row objects into records.
///
/// Non-object rows are skipped with a warning rather than failing the whole
/// collection.
///
/// # Errors
///
/// Returns [`SourceError::Parse`] if `rows` is not an array.
pub fn records_from_json(rows: &Value) -> SourceResult<Vec<Record>> {
    let rows = rows
        .as_array()
        .ok_or_else(|| SourceError::Parse("expected a JSON array of rows".to_string()))?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        match row.as_object() {
            Some(fields) => {
                records.push(
                    fields
                        .iter()
                        .map(|(key, value)| (key.clone(), field_value(value)))
                        .collect(),
                );
            }
            None => warn!("skipping non-object row"),
        }
    }
    Ok(records)
}

fn field_value(value: &Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(*b),
        Value::Number(n) => n.as_f64().map_or(FieldValue::Null, FieldValue::Number),
        Value::String(s) => FieldValue::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => {
            warn!("collapsing nested cell value to null");
            FieldValue::Null
        }
    }
}
