//! # Synonym Manager
//!
//! HTTP service that manages synonym maps of an Azure AI Search service and keeps
//! one configured index field's synonym map list in step with them.
//!
//! ## Architecture
//!
//! 1. **Server**: axum routes, one handler per endpoint
//! 2. **Service**: `SynonymMapService` from `synonym-manager-repository` validates,
//!    encodes and reconciles
//! 3. **Gateway**: `AzureSearchGateway` performs the REST calls
//!
//! ## Modules
//!
//! - [`config`]: Environment settings and dependency initialization
//! - [`errors`]: Mapping of service errors to response envelopes
//! - [`server`]: Router, handlers and shared state

pub mod config;
pub mod errors;
pub mod server;

pub use config::{Dependencies, Settings};

use thiserror::Error;

/// Errors that can occur during startup or while serving.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O error while binding or serving.
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
