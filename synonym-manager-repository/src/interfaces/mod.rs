//! Interface definitions for the search service gateway.
//!
//! This module defines the abstract `SearchGateway` trait that allows for
//! dependency injection and swappable search service implementations.

mod search_gateway;

pub use search_gateway::SearchGateway;
