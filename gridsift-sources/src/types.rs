//! Common types shared by the record sources.

use crate::error::SourceResult;
use futures::future::BoxFuture;
use gridsift::Record;

/// Boxed future returned by source operations.
pub type SourceFuture<'a, T> = BoxFuture<'a, SourceResult<T>>;

/// Channel on which a source delivers collections of records.
///
/// Each message is a complete replacement collection; the channel closes
/// when the source is exhausted.
pub type CollectionReceiver = flume::Receiver<Vec<Record>>;

/// A producer of record collections for the filter engine.
pub trait RecordSource: Send + Sync {
    /// Starts streaming collections.
    fn stream(&self) -> SourceFuture<'_, CollectionReceiver>;
}
