//! Synonym map request validation.
//!
//! Checks run in a fixed order and stop at the first violation:
//!
//! 1. map name casing and length
//! 2. index existence (remote lookup)
//! 3. map existence, for updates only (remote lookup)
//! 4. non-empty group list
//! 5. at least two terms per group
//! 6. non-empty terms
//!
//! No mutating gateway call is made here.

use synonym_manager_shared::{
    EquivalenceGroup, MapDeletionRequest, SearchIndex, SynonymMapRequest,
};
use tracing::debug;

use crate::errors::SynonymMapError;
use crate::interfaces::SearchGateway;

/// Maximum length of a synonym map name, in characters.
pub const MAX_MAP_NAME_LEN: usize = 10;

/// Minimum number of terms in an equivalence group.
pub const MIN_GROUP_LEN: usize = 2;

/// Check that a map name is lowercase and 1 to 10 characters long.
pub fn validate_map_name(map_name: &str) -> Result<(), SynonymMapError> {
    let len = map_name.chars().count();
    if len == 0 || len > MAX_MAP_NAME_LEN || map_name != map_name.to_lowercase() {
        debug!(map_name = %map_name, "Rejected map name");
        return Err(SynonymMapError::invalid_map_name(map_name));
    }
    Ok(())
}

/// Check the structure of a submitted group list.
pub fn validate_groups(groups: &[EquivalenceGroup]) -> Result<(), SynonymMapError> {
    if groups.is_empty() {
        return Err(SynonymMapError::EmptyGroupList);
    }

    for (group_pos, group) in groups.iter().enumerate() {
        if group.len() < MIN_GROUP_LEN {
            return Err(SynonymMapError::InvalidGroupCardinality { group: group_pos });
        }
        if let Some(term_pos) = group.iter().position(|term| term.is_empty()) {
            return Err(SynonymMapError::InvalidTerm {
                group: group_pos,
                term: term_pos,
            });
        }
    }

    Ok(())
}

/// Validates requests, resolving referenced entities through a gateway.
pub struct RequestValidator<'a> {
    gateway: &'a dyn SearchGateway,
}

impl<'a> RequestValidator<'a> {
    pub fn new(gateway: &'a dyn SearchGateway) -> Self {
        Self { gateway }
    }

    /// Resolve an index, turning any failure into `IndexNotFound`.
    pub async fn validate_index_lookup(
        &self,
        index_name: &str,
    ) -> Result<SearchIndex, SynonymMapError> {
        self.gateway
            .get_index(index_name)
            .await
            .map_err(|e| SynonymMapError::index_not_found(index_name, e))
    }

    /// Validate a create request and return the resolved index.
    pub async fn validate_create(
        &self,
        request: &SynonymMapRequest,
    ) -> Result<SearchIndex, SynonymMapError> {
        validate_map_name(&request.map_name)?;
        let index = self.validate_index_lookup(&request.index_name).await?;
        validate_groups(&request.synonym_list)?;
        Ok(index)
    }

    /// Validate an update request; the map must already exist.
    pub async fn validate_update(&self, request: &SynonymMapRequest) -> Result<(), SynonymMapError> {
        validate_map_name(&request.map_name)?;
        self.validate_index_lookup(&request.index_name).await?;
        self.gateway
            .get_synonym_map(&request.map_name)
            .await
            .map_err(|e| SynonymMapError::map_not_found(&request.map_name, e))?;
        validate_groups(&request.synonym_list)?;
        Ok(())
    }

    /// Validate a delete request and return the resolved index.
    pub async fn validate_delete(
        &self,
        request: &MapDeletionRequest,
    ) -> Result<SearchIndex, SynonymMapError> {
        validate_map_name(&request.map_name)?;
        self.validate_index_lookup(&request.index_name).await
    }
}
