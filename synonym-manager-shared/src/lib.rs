//! # Synonym Manager Shared
//!
//! This crate defines shared data structures used across the synonym map manager.
//! It includes the remote index and synonym map definitions as well as the
//! request and response bodies of the HTTP API.

pub mod types;

pub use types::request::{IndexLookupRequest, MapDeletionRequest, SynonymMapRequest};
pub use types::response::{ResponseEnvelope, SynonymMapEntry, SUCCESS_MESSAGE};
pub use types::search_index::{SearchField, SearchIndex};
pub use types::synonym_map::{EquivalenceGroup, SynonymMap};
