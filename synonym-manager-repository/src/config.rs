//! Configuration types for the SynonymMapService.

/// Configuration for the SynonymMapService.
#[derive(Debug, Clone, Default)]
pub struct SynonymMapServiceConfig {
    /// Name of the index field whose synonym map list is managed.
    ///
    /// If the field does not exist in an index, create and delete leave that
    /// index untouched.
    pub field_name: String,
}

impl SynonymMapServiceConfig {
    /// Create a config managing `field_name`.
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}
