//! Azure AI Search connection configuration.

/// REST API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2023-11-01";

/// Connection settings for the Azure AI Search service.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Service endpoint, e.g. `https://my-service.search.windows.net`.
    pub endpoint: String,
    /// Admin key sent in the `api-key` header.
    pub api_key: String,
    /// Value of the `api-version` query parameter.
    pub api_version: String,
}

impl GatewayConfig {
    /// Create a configuration using [`DEFAULT_API_VERSION`].
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The search service URL
    /// * `api_key` - The admin key
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Override the REST API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }
}

// Keeps the admin key out of logs.
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .finish()
    }
}
