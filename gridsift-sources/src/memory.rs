//! In-memory sources.

use crate::types::{CollectionReceiver, RecordSource, SourceFuture};
use gridsift::Record;

/// A source that delivers one fixed collection and then closes.
///
/// Useful for views over data that was fetched once, and for tests.
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    /// Creates a source over the given collection.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for StaticSource {
    fn stream(&self) -> SourceFuture<'_, CollectionReceiver> {
        let records = self.records.clone();
        Box::pin(async move {
            let (tx, rx) = flume::bounded(1);
            // Capacity 1 and a single send: cannot block.
            let _ = tx.send(records);
            drop(tx);
            Ok(rx)
        })
    }
}

/// A source fed by hand: every pushed collection replaces the previous one
/// downstream.
///
/// Models fresh data arriving while filters are active; the engine
/// re-filters each new collection under the current state.
pub struct ChannelSource {
    receiver: CollectionReceiver,
}

impl ChannelSource {
    /// Creates the source and the sender used to push collections into it.
    #[must_use]
    pub fn new() -> (flume::Sender<Vec<Record>>, Self) {
        let (tx, rx) = flume::unbounded();
        (tx, Self { receiver: rx })
    }
}

impl RecordSource for ChannelSource {
    fn stream(&self) -> SourceFuture<'_, CollectionReceiver> {
        let receiver = self.receiver.clone();
        Box::pin(async move { Ok(receiver) })
    }
}
