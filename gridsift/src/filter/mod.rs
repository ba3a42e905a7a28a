//! Filter configuration, values, predicates, and combination.

pub mod combine;
pub mod config;
pub mod predicate;
pub mod value;
