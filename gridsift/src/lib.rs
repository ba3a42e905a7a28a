pub mod engine;
pub mod error;
pub mod filter;
pub mod record;
pub mod state;

// Re-export main types for easier access
pub use engine::handle::{EngineCommand, EngineHandle};
pub use engine::{EngineConfig, EngineOutput, FilterEngine, ViewUpdate};
pub use error::EngineError;
pub use filter::combine::{apply_filters, FilterMode};
pub use filter::config::{FieldSpec, FilterConfig, FilterKind, SelectOption};
pub use filter::predicate::{matches, split_terms};
pub use filter::value::FilterValue;
pub use record::{FieldValue, Record};
pub use state::FilterStore;
