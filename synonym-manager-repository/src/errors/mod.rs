//! Error types for the synonym manager repository.
//!
//! This module provides a unified error type for validation, lookup and gateway
//! failures, together with the coarse classification used by the HTTP boundary.

mod synonym_map_error;

pub use synonym_map_error::{ErrorKind, SynonymMapError};
