//! Synonym map types.
//!
//! A synonym map is held in its rule form: one rule string per equivalence group,
//! exactly as stored by the remote search service.

/// An ordered group of mutually equivalent terms.
pub type EquivalenceGroup = Vec<String>;

/// A named synonym map in wire-rule form.
///
/// Each entry of `rules` is one equivalency rule such as `"run, sprint, jog"`.
/// Conversion to and from [`EquivalenceGroup`]s lives in the repository codec.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SynonymMap {
    /// Map name, unique within the search service.
    pub name: String,
    /// Rule strings in their stored order.
    pub rules: Vec<String>,
}

impl SynonymMap {
    /// Create a synonym map from a name and its rules.
    pub fn new(name: impl Into<String>, rules: Vec<String>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }
}
