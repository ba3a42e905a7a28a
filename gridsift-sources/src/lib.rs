//! Gridsift Sources
//!
//! This crate provides ready-made record collection sources that can be
//! used with the gridsift filter engine.

#![warn(missing_docs)]

pub mod error;
pub mod json;
pub mod memory;
pub mod pump;
pub mod types;

// Re-export main types for easier access
pub use error::{SourceError, SourceResult};
pub use json::{records_from_json, JsonSource};
pub use memory::{ChannelSource, StaticSource};
pub use pump::pump;
pub use types::{CollectionReceiver, RecordSource, SourceFuture};
