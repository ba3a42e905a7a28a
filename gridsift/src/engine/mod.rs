//! The reactive engine: debounced recomputation of the filtered view.

pub mod handle;

pub use handle::{EngineCommand, EngineHandle};

use crate::filter::combine::{apply_filters, FilterMode};
use crate::filter::config::FilterConfig;
use crate::record::Record;
use crate::state::FilterStore;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Configuration for a [`FilterEngine`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The per-field filter declarations.
    pub filters: FilterConfig,
    /// Combination mode the engine starts in.
    pub default_mode: FilterMode,
    /// Quiet period after the last filter change before recomputation runs.
    pub debounce: Duration,
}

impl EngineConfig {
    /// Creates a config with the default mode and debounce window.
    #[must_use]
    pub fn new(filters: FilterConfig) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    /// Overrides the starting combination mode.
    #[must_use]
    pub const fn with_default_mode(mut self, mode: FilterMode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Overrides the debounce window.
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            filters: FilterConfig::new(),
            default_mode: FilterMode::And,
            debounce: Duration::from_millis(300),
        }
    }
}

/// One recomputation result, pushed to the view subscriber.
///
/// The filtered view is derived data: it is replaced wholesale on every
/// recomputation and never mutated in place. `focused_field` names the
/// field whose input last held focus, so the presentation layer can restore
/// it after re-rendering the new view.
#[derive(Debug, Clone)]
pub struct ViewUpdate {
    /// The surviving records, in source order.
    pub records: Vec<Record>,
    /// Number of currently active filters.
    pub active_filters: usize,
    /// The active field keys, in config declaration order.
    pub active_fields: Vec<String>,
    /// Field whose input should regain focus after re-render.
    pub focused_field: Option<String>,
}

/// Receiving side of a spawned engine, bundled with its handle.
pub struct EngineOutput {
    /// Command handle for driving the engine.
    pub handle: EngineHandle,
    /// Stream of view updates, one per recomputation.
    pub updates: flume::Receiver<ViewUpdate>,
}

/// The reactive faceted filter engine.
///
/// The engine owns the filter state, the combination mode, and the source
/// collection, and runs as a single task: commands arrive on a channel,
/// filter and mode changes arm a debounce deadline (a newer change replaces
/// the pending one, so at most one recomputation is ever pending and it
/// always reflects the latest state), and source replacement, clear-all,
/// and flush recompute immediately. Because everything happens on one task,
/// no recomputation can observe partially applied state.
///
/// # Examples
///
/// ```
/// use gridsift::{EngineConfig, FilterConfig, FilterEngine, FilterValue, Record};
/// use std::time::Duration;
/// use tokio::sync::broadcast;
///
/// fn main() {
///     let rt = tokio::runtime::Runtime::new().unwrap();
///     rt.block_on(async {
///         let config = EngineConfig::new(FilterConfig::new().text("sku"))
///             .with_debounce(Duration::from_millis(10));
///         let (engine, output) = FilterEngine::new(config);
///         let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
///         tokio::spawn(engine.run(shutdown_rx));
///
///         let records = vec![
///             Record::new().with("sku", "A1"),
///             Record::new().with("sku", "B2"),
///         ];
///         output.handle.set_source(records).unwrap();
///         let full = output.updates.recv_async().await.unwrap();
///         assert_eq!(full.records.len(), 2);
///
///         output.handle.set_filter("sku", FilterValue::text("a1")).unwrap();
///         let filtered = output.updates.recv_async().await.unwrap();
///         assert_eq!(filtered.records.len(), 1);
///
///         let _ = shutdown_tx.send(());
///     });
/// }
/// ```
pub struct FilterEngine {
    store: FilterStore,
    mode: FilterMode,
    source: Vec<Record>,
    focused: Option<String>,
    debounce: Duration,
    commands: flume::Receiver<EngineCommand>,
    updates: flume::Sender<ViewUpdate>,
}

impl FilterEngine {
    /// Creates an engine and the output bundle for driving and observing it.
    ///
    /// The engine does nothing until [`run`](Self::run) is awaited, usually
    /// on a spawned task.
    #[must_use]
    pub fn new(config: EngineConfig) -> (Self, EngineOutput) {
        let (command_tx, command_rx) = flume::unbounded();
        let (update_tx, update_rx) = flume::unbounded();

        let engine = Self {
            store: FilterStore::new(config.filters),
            mode: config.default_mode,
            source: Vec::new(),
            focused: None,
            debounce: config.debounce,
            commands: command_rx,
            updates: update_tx,
        };
        let output = EngineOutput {
            handle: EngineHandle::new(command_tx),
            updates: update_rx,
        };
        (engine, output)
    }

    /// Drives the engine until shutdown is signalled or every handle is
    /// dropped.
    #[instrument(skip(self, shutdown))]
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        info!("filter engine started");
        let commands = self.commands.clone();
        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    warn!("received shutdown signal");
                    break;
                }
                command = commands.recv_async() => {
                    match command {
                        Ok(command) => self.handle_command(command, &mut deadline),
                        Err(_) => {
                            debug!("command channel closed");
                            break;
                        }
                    }
                }
                () = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)),
                    if deadline.is_some() =>
                {
                    deadline = None;
                    self.recompute();
                }
            }
        }
        debug!("filter engine stopped");
    }

    fn handle_command(&mut self, command: EngineCommand, deadline: &mut Option<Instant>) {
        match command {
            EngineCommand::SetFilter { field, value } => {
                debug!(field, "filter changed");
                self.store.set(&field, value);
                self.arm(deadline);
            }
            EngineCommand::ClearFilter { field } => {
                debug!(field, "filter cleared");
                self.store.clear(&field);
                self.arm(deadline);
            }
            EngineCommand::SetMode(mode) => {
                debug!(?mode, "combination mode changed");
                self.mode = mode;
                self.arm(deadline);
            }
            EngineCommand::SetSource(records) => {
                debug!(len = records.len(), "source collection replaced");
                self.source = records;
                *deadline = None;
                self.recompute();
            }
            EngineCommand::Focus(field) => {
                self.focused = field;
            }
            EngineCommand::ClearAll => {
                debug!("clearing all filters");
                self.store.clear_all();
                *deadline = None;
                self.recompute();
            }
            EngineCommand::Flush => {
                *deadline = None;
                self.recompute();
            }
        }
    }

    // A fresh deadline supersedes any pending one; the superseded sleep is
    // dropped on the next loop turn, never fired.
    fn arm(&self, deadline: &mut Option<Instant>) {
        *deadline = Some(Instant::now() + self.debounce);
    }

    fn recompute(&self) {
        let records = apply_filters(&self.store, &self.source, self.mode);
        debug!(
            source = self.source.len(),
            filtered = records.len(),
            active = self.store.count_active(),
            "recomputed view"
        );
        let update = ViewUpdate {
            records,
            active_filters: self.store.count_active(),
            active_fields: self
                .store
                .active_fields()
                .into_iter()
                .map(String::from)
                .collect(),
            focused_field: self.focused.clone(),
        };
        if self.updates.send(update).is_err() {
            debug!("view subscriber dropped");
        }
    }
}
