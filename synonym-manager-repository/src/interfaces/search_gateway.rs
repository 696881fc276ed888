//! Search gateway trait definition.
//!
//! This module defines the abstract interface for the index and synonym map
//! management operations of a hosted search service.

use async_trait::async_trait;
use synonym_manager_shared::{SearchIndex, SynonymMap};

use crate::errors::SynonymMapError;

/// Abstracts the remote search service that owns indexes and synonym maps.
///
/// Implementations are injected into `SynonymMapService`, which lets tests run the
/// full orchestration against recording mocks. The gateway is the only source of
/// truth: nothing read through it is cached.
///
/// Implementations should report a missing index or map as
/// `SynonymMapError::NotFound` and every other failure with one of the gateway
/// error variants.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Fetch the full definition of an index.
    async fn get_index(&self, index_name: &str) -> Result<SearchIndex, SynonymMapError>;

    /// Write back an index definition, replacing the stored one.
    async fn update_index(&self, index: &SearchIndex) -> Result<(), SynonymMapError>;

    /// List the names of every synonym map, in the service's enumeration order.
    async fn list_synonym_map_names(&self) -> Result<Vec<String>, SynonymMapError>;

    /// Fetch a synonym map by name.
    async fn get_synonym_map(&self, map_name: &str) -> Result<SynonymMap, SynonymMapError>;

    /// Create a synonym map.
    ///
    /// Fails with `SynonymMapError::MapAlreadyExists` if the name is taken.
    async fn create_synonym_map(&self, map: &SynonymMap) -> Result<(), SynonymMapError>;

    /// Create a synonym map, or replace it if it already exists.
    async fn create_or_update_synonym_map(&self, map: &SynonymMap)
        -> Result<(), SynonymMapError>;

    /// Delete a synonym map.
    async fn delete_synonym_map(&self, map_name: &str) -> Result<(), SynonymMapError>;
}
