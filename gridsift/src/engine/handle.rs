//! Command-side surface of a running engine.

use crate::error::EngineError;
use crate::filter::combine::FilterMode;
use crate::filter::value::FilterValue;
use crate::record::Record;

/// A state-change request sent to the engine task.
///
/// Filter and mode changes are debounced; source replacement, clear-all,
/// and flush recompute immediately.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Set one field's filter value.
    SetFilter {
        /// Field key the value applies to.
        field: String,
        /// The new raw filter value.
        value: FilterValue,
    },
    /// Reset one field's filter to its empty representation.
    ClearFilter {
        /// Field key to clear.
        field: String,
    },
    /// Switch the AND/OR combination mode.
    SetMode(FilterMode),
    /// Replace the source collection.
    SetSource(Vec<Record>),
    /// Record which field's input currently holds focus.
    Focus(Option<String>),
    /// Reset every field's filter and recompute immediately.
    ClearAll,
    /// Force an immediate recomputation, skipping any pending debounce.
    Flush,
}

/// Cloneable handle for driving a spawned [`FilterEngine`](crate::FilterEngine).
///
/// Every method resolves to [`EngineError::Closed`] once the engine task
/// has shut down.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    commands: flume::Sender<EngineCommand>,
}

impl EngineHandle {
    pub(crate) fn new(commands: flume::Sender<EngineCommand>) -> Self {
        Self { commands }
    }

    /// Sets one field's filter value (debounced).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Closed`] if the engine task has stopped.
    pub fn set_filter(
        &self,
        field: impl Into<String>,
        value: FilterValue,
    ) -> Result<(), EngineError> {
        self.send(EngineCommand::SetFilter {
            field: field.into(),
            value,
        })
    }

    /// Clears one field's filter (debounced).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Closed`] if the engine task has stopped.
    pub fn clear_filter(&self, field: impl Into<String>) -> Result<(), EngineError> {
        self.send(EngineCommand::ClearFilter {
            field: field.into(),
        })
    }

    /// Switches the combination mode (debounced).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Closed`] if the engine task has stopped.
    pub fn set_mode(&self, mode: FilterMode) -> Result<(), EngineError> {
        self.send(EngineCommand::SetMode(mode))
    }

    /// Replaces the source collection; the new collection is immediately
    /// filtered under the current state.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Closed`] if the engine task has stopped.
    pub fn set_source(&self, records: Vec<Record>) -> Result<(), EngineError> {
        self.send(EngineCommand::SetSource(records))
    }

    /// Records which field's input last received focus, so every view
    /// update can tell the presentation layer where to restore it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Closed`] if the engine task has stopped.
    pub fn focus(&self, field: Option<String>) -> Result<(), EngineError> {
        self.send(EngineCommand::Focus(field))
    }

    /// Atomically resets every filter and recomputes immediately, without
    /// waiting out the debounce window.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Closed`] if the engine task has stopped.
    pub fn clear_all(&self) -> Result<(), EngineError> {
        self.send(EngineCommand::ClearAll)
    }

    /// Forces an immediate recomputation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Closed`] if the engine task has stopped.
    pub fn flush(&self) -> Result<(), EngineError> {
        self.send(EngineCommand::Flush)
    }

    fn send(&self, command: EngineCommand) -> Result<(), EngineError> {
        self.commands
            .send(command)
            .map_err(|_| EngineError::Closed)
    }
}
