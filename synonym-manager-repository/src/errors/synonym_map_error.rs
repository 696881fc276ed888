//! Synonym map error types.
//!
//! This module defines the unified error type for request validation, missing
//! remote entities and failed calls to the search service.

use thiserror::Error;

/// Coarse classification of a [`SynonymMapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself is malformed.
    Validation,
    /// A referenced index or synonym map does not exist.
    NotFound,
    /// The search service call failed.
    Gateway,
}

/// Unified errors from synonym map operations.
///
/// Used by the `SearchGateway` trait, the validator and `SynonymMapService`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynonymMapError {
    /// Map name is not lowercase or not 1 to 10 characters long.
    #[error("Invalid map name '{0}': must be lowercase and 1 to 10 characters long")]
    InvalidMapName(String),

    /// The synonym list has no groups.
    #[error("SynonymList cannot be empty")]
    EmptyGroupList,

    /// A group has fewer than two terms.
    #[error("SubSynonymList at position {group} should contain at least two non-empty elements")]
    InvalidGroupCardinality { group: usize },

    /// A term is an empty string.
    #[error("Element {term} of SubSynonymList at position {group} should be a non-empty string")]
    InvalidTerm { group: usize, term: usize },

    /// The referenced index could not be resolved.
    #[error("Index '{index}' does not exist in Azure AI Search: {reason}")]
    IndexNotFound { index: String, reason: String },

    /// The referenced synonym map could not be resolved.
    #[error("Synonym map '{map}' does not exist in Azure AI Search: {reason}")]
    MapNotFound { map: String, reason: String },

    /// The search service answered 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A synonym map with the same name already exists.
    #[error("Synonym map '{0}' already exists")]
    MapAlreadyExists(String),

    /// Failed to reach the search service.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The search service rejected the request.
    #[error("Request error: {0}")]
    RequestError(String),

    /// Failed to parse a response from the search service.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to build or serialize a request.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SynonymMapError {
    /// Create an invalid map name error.
    pub fn invalid_map_name(name: impl Into<String>) -> Self {
        Self::InvalidMapName(name.into())
    }

    /// Create an index not found error carrying the underlying failure.
    pub fn index_not_found(index: impl Into<String>, reason: impl ToString) -> Self {
        Self::IndexNotFound {
            index: index.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a map not found error carrying the underlying failure.
    pub fn map_not_found(map: impl Into<String>, reason: impl ToString) -> Self {
        Self::MapNotFound {
            map: map.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a raw not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a map already exists error.
    pub fn map_already_exists(name: impl Into<String>) -> Self {
        Self::MapAlreadyExists(name.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::RequestError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Classify the error for the HTTP boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMapName(_)
            | Self::EmptyGroupList
            | Self::InvalidGroupCardinality { .. }
            | Self::InvalidTerm { .. } => ErrorKind::Validation,
            Self::IndexNotFound { .. } | Self::MapNotFound { .. } | Self::NotFound(_) => {
                ErrorKind::NotFound
            }
            Self::MapAlreadyExists(_)
            | Self::ConnectionError(_)
            | Self::RequestError(_)
            | Self::ParseError(_)
            | Self::SerializationError(_) => ErrorKind::Gateway,
        }
    }
}

impl From<reqwest::Error> for SynonymMapError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::ParseError(err.to_string())
        } else if err.is_builder() || err.is_body() {
            Self::serialization(err.to_string())
        } else {
            Self::ConnectionError(err.to_string())
        }
    }
}
