//! Dependency initialization and wiring for the synonym manager.

use std::sync::Arc;
use tracing::info;

use crate::config::Settings;
use crate::ServerError;
use synonym_manager_repository::azure::GatewayConfig;
use synonym_manager_repository::{AzureSearchGateway, SynonymMapService, SynonymMapServiceConfig};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The service shared by every request handler.
    pub service: Arc<SynonymMapService>,
}

impl Dependencies {
    /// Build the gateway and service from settings.
    ///
    /// No request is sent to the search service here; connectivity and
    /// credentials are only exercised by the first API call.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(ServerError)` - If the HTTP client cannot be created
    pub fn new(settings: &Settings) -> Result<Self, ServerError> {
        info!(
            search_endpoint = %settings.search_endpoint,
            index_field_name = %settings.index_field_name,
            api_version = %settings.api_version,
            "Initializing dependencies"
        );

        let gateway_config =
            GatewayConfig::new(&settings.search_endpoint, &settings.search_admin_key)
                .with_api_version(&settings.api_version);
        let gateway = AzureSearchGateway::new(gateway_config).map_err(|e| {
            ServerError::config(format!("Failed to create search gateway: {}", e))
        })?;

        let service = SynonymMapService::new(
            Arc::new(gateway),
            SynonymMapServiceConfig::new(&settings.index_field_name),
        );

        Ok(Self {
            service: Arc::new(service),
        })
    }
}
