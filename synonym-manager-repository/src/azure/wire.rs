//! Request and response bodies of the Azure AI Search REST API.

use serde::{Deserialize, Serialize};
use synonym_manager_shared::SynonymMap;

/// The only synonym map format supported by the service.
pub const SOLR_FORMAT: &str = "solr";

/// Synonym map as sent to and received from the service.
///
/// Rules are stored as a single newline separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymMapBody {
    pub name: String,
    #[serde(default = "solr_format")]
    pub format: String,
    #[serde(default)]
    pub synonyms: String,
}

fn solr_format() -> String {
    SOLR_FORMAT.to_string()
}

/// Body of a synonym map listing; only the names are read.
#[derive(Debug, Deserialize)]
pub struct SynonymMapList {
    #[serde(default)]
    pub value: Vec<NamedEntry>,
}

#[derive(Debug, Deserialize)]
pub struct NamedEntry {
    pub name: String,
}

impl From<&SynonymMap> for SynonymMapBody {
    fn from(map: &SynonymMap) -> Self {
        Self {
            name: map.name.clone(),
            format: solr_format(),
            synonyms: map.rules.join("\n"),
        }
    }
}

impl From<SynonymMapBody> for SynonymMap {
    fn from(body: SynonymMapBody) -> Self {
        let rules = body
            .synonyms
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        SynonymMap::new(body.name, rules)
    }
}
