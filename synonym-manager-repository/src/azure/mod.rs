//! Azure AI Search implementation of the search gateway.
//!
//! This module provides a concrete implementation of `SearchGateway` that talks
//! to the Azure AI Search management REST API.

mod gateway;
mod gateway_config;
mod wire;

pub use gateway::AzureSearchGateway;
pub use gateway_config::{GatewayConfig, DEFAULT_API_VERSION};
