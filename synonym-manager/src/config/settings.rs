//! Environment settings for the synonym manager.

use std::env;
use std::net::{IpAddr, SocketAddr};

use synonym_manager_repository::azure::DEFAULT_API_VERSION;
use tracing::warn;

use crate::ServerError;

/// Default bind host.
const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default bind port.
const DEFAULT_SERVER_PORT: u16 = 8000;

/// Settings read from the environment at startup.
#[derive(Clone)]
pub struct Settings {
    /// Search service endpoint URL.
    pub search_endpoint: String,
    /// Search service admin key.
    pub search_admin_key: String,
    /// Index field whose synonym map list is managed.
    pub index_field_name: String,
    /// Search service REST API version.
    pub api_version: String,
    /// Address the HTTP server binds to.
    pub server_addr: SocketAddr,
}

impl Settings {
    /// Read settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AZURE_SEARCH_SERVICE_ENDPOINT`: Search service URL (required at first call)
    /// - `AZURE_SEARCH_ADMIN_KEY`: Admin key (required at first call)
    /// - `AZURE_SEARCH_INDEX_FIELD_NAME`: Managed index field name
    /// - `AZURE_SEARCH_API_VERSION`: REST API version (default: 2023-11-01)
    /// - `SERVER_HOST`: Bind host (default: 127.0.0.1)
    /// - `SERVER_PORT`: Bind port (default: 8000)
    ///
    /// Missing search service settings only produce a warning; calls to the service
    /// fail until they are provided.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).unwrap_or_else(|| {
                warn!(variable = key, "Environment variable not set");
                String::new()
            })
        };

        let search_endpoint = required("AZURE_SEARCH_SERVICE_ENDPOINT");
        let search_admin_key = required("AZURE_SEARCH_ADMIN_KEY");
        let index_field_name = required("AZURE_SEARCH_INDEX_FIELD_NAME");
        let api_version =
            lookup("AZURE_SEARCH_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let host = lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string());
        let host: IpAddr = host
            .parse()
            .map_err(|e| ServerError::config(format!("Invalid SERVER_HOST '{}': {}", host, e)))?;
        let port = match lookup("SERVER_PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ServerError::config(format!("Invalid SERVER_PORT '{}': {}", port, e)))?,
            None => DEFAULT_SERVER_PORT,
        };

        Ok(Self {
            search_endpoint,
            search_admin_key,
            index_field_name,
            api_version,
            server_addr: SocketAddr::new(host, port),
        })
    }
}

// Keeps the admin key out of logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("search_endpoint", &self.search_endpoint)
            .field("search_admin_key", &"<redacted>")
            .field("index_field_name", &self.index_field_name)
            .field("api_version", &self.api_version)
            .field("server_addr", &self.server_addr)
            .finish()
    }
}
