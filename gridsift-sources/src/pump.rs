//! Forwarding collections from a source into a running engine.

use crate::error::SourceResult;
use crate::types::RecordSource;
use gridsift::EngineHandle;
use tracing::debug;

/// Streams every collection a source produces into the engine.
///
/// Each delivered collection replaces the engine's source wholesale and is
/// immediately re-filtered under the current filter state. Returns once the
/// source's channel closes.
///
/// # Errors
///
/// Returns [`SourceError::Engine`](crate::SourceError::Engine) if the
/// engine has stopped accepting commands.
pub async fn pump(source: &dyn RecordSource, handle: &EngineHandle) -> SourceResult<()> {
    let collections = source.stream().await?;
    while let Ok(batch) = collections.recv_async().await {
        debug!(len = batch.len(), "forwarding collection to engine");
        handle.set_source(batch)?;
    }
    debug!("source exhausted");
    Ok(())
}
