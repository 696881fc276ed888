//! This module defines the core data structures used across the synonym manager.
//! It re-exports the index and synonym map definitions used by the gateway and
//! the request/response bodies used by the HTTP layer.

pub mod request;
pub mod response;
pub mod search_index;
pub mod synonym_map;

pub use search_index::{SearchField, SearchIndex};
pub use synonym_map::{EquivalenceGroup, SynonymMap};
