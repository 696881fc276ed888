//! Request bodies accepted by the synonym manager HTTP API.

use serde::{Deserialize, Serialize};

use crate::types::synonym_map::EquivalenceGroup;

/// Body of the create and update endpoints.
///
/// `synonym_list` defaults to empty when omitted; the validator rejects an empty
/// list, so a missing list is reported the same way as an explicit `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynonymMapRequest {
    /// Index whose configured field receives the map.
    pub index_name: String,
    /// Name of the synonym map.
    pub map_name: String,
    /// Equivalence groups, each with at least two terms.
    #[serde(default)]
    pub synonym_list: Vec<EquivalenceGroup>,
}

/// Body of the delete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDeletionRequest {
    pub index_name: String,
    pub map_name: String,
}

/// Body of the list-by-index endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexLookupRequest {
    pub index_name: String,
}
