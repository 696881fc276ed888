//! Azure AI Search gateway implementation.
//!
//! This module provides the concrete implementation of `SearchGateway` on top of
//! the Azure AI Search REST API, using `reqwest`.

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use synonym_manager_shared::{SearchIndex, SynonymMap};
use tracing::{debug, error, info};
use url::Url;

use crate::azure::gateway_config::GatewayConfig;
use crate::azure::wire::{SynonymMapBody, SynonymMapList};
use crate::errors::SynonymMapError;
use crate::interfaces::SearchGateway;

/// Header carrying the admin key.
const API_KEY_HEADER: &str = "api-key";

/// Index properties returned by a read that must not be sent back on write.
const READ_ONLY_INDEX_PROPERTIES: &[&str] = &["@odata.context"];

/// Azure AI Search gateway.
///
/// Every call is a single HTTP request: there is no retry, no caching and no
/// optimistic concurrency check. An empty or malformed endpoint is not rejected
/// up front; it surfaces as a `ConnectionError` on the first call.
///
/// # Example
///
/// ```ignore
/// use synonym_manager_repository::azure::{AzureSearchGateway, GatewayConfig};
///
/// let config = GatewayConfig::new("https://my-service.search.windows.net", "admin-key");
/// let gateway = AzureSearchGateway::new(config)?;
///
/// let index = gateway.get_index("products").await?;
/// ```
pub struct AzureSearchGateway {
    client: ReqwestClient,
    config: GatewayConfig,
}

impl AzureSearchGateway {
    /// Create a new gateway for the configured service.
    ///
    /// # Returns
    ///
    /// * `Ok(AzureSearchGateway)` - A new gateway instance
    /// * `Err(SynonymMapError)` - If the HTTP client cannot be built
    pub fn new(config: GatewayConfig) -> Result<Self, SynonymMapError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(|e| SynonymMapError::connection(e.to_string()))?;

        info!(
            endpoint = %config.endpoint,
            api_version = %config.api_version,
            "Created Azure AI Search gateway"
        );

        Ok(Self { client, config })
    }

    /// Build the URL of a resource such as `indexes('products')`.
    ///
    /// `resource` is appended as a single path segment, so reserved characters in
    /// entity names (`?`, `#`, `%`, `/`) are percent-encoded.
    fn url(&self, resource: &str) -> Result<Url, SynonymMapError> {
        let invalid_endpoint = |reason: String| {
            SynonymMapError::connection(format!(
                "Invalid search service endpoint '{}': {}",
                self.config.endpoint, reason
            ))
        };

        let mut url =
            Url::parse(&self.config.endpoint).map_err(|e| invalid_endpoint(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid_endpoint("cannot be a base URL".to_string()))?
            .pop_if_empty()
            .push(resource);
        url.query_pairs_mut()
            .append_pair("api-version", &self.config.api_version);
        Ok(url)
    }

    /// Single entity in a collection, e.g. `synonymmaps('colors')`.
    fn entity_path(collection: &str, name: &str) -> String {
        format!("{}('{}')", collection, name.replace('\'', "''"))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, SynonymMapError> {
        let url = self.url(path)?;
        Ok(self
            .client
            .request(method, url)
            .header(API_KEY_HEADER, &self.config.api_key))
    }

    /// Send a request and turn a non-success status into an error.
    async fn send(
        &self,
        builder: RequestBuilder,
        operation: &str,
    ) -> Result<Response, SynonymMapError> {
        let response = builder.send().await?;
        Self::check(response, operation).await
    }

    async fn check(response: Response, operation: &str) -> Result<Response, SynonymMapError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, operation, "Search service request failed");
        Err(Self::status_error(status, operation, &body))
    }

    async fn read_json<T: DeserializeOwned>(
        response: Response,
        operation: &str,
    ) -> Result<T, SynonymMapError> {
        response
            .json::<T>()
            .await
            .map_err(|e| SynonymMapError::parse(format!("{}: {}", operation, e)))
    }

    /// Map a failed status to an error.
    fn status_error(status: StatusCode, operation: &str, body: &str) -> SynonymMapError {
        if status == StatusCode::NOT_FOUND {
            SynonymMapError::not_found(format!("{}: {}", operation, body))
        } else {
            SynonymMapError::request(format!(
                "{} failed with status {}: {}",
                operation, status, body
            ))
        }
    }
}

#[async_trait]
impl SearchGateway for AzureSearchGateway {
    async fn get_index(&self, index_name: &str) -> Result<SearchIndex, SynonymMapError> {
        let path = Self::entity_path("indexes", index_name);
        let response = self.send(self.request(Method::GET, &path)?, "get index").await?;
        let index = Self::read_json::<SearchIndex>(response, "get index").await?;

        debug!(index_name = %index.name, fields = index.fields.len(), "Fetched index");
        Ok(index)
    }

    async fn update_index(&self, index: &SearchIndex) -> Result<(), SynonymMapError> {
        let mut body = index.clone();
        for property in READ_ONLY_INDEX_PROPERTIES {
            body.extra.remove(*property);
        }

        let path = Self::entity_path("indexes", &index.name);
        let builder = self.request(Method::PUT, &path)?.json(&body);
        self.send(builder, "update index").await?;

        debug!(index_name = %index.name, "Index updated");
        Ok(())
    }

    async fn list_synonym_map_names(&self) -> Result<Vec<String>, SynonymMapError> {
        let response = self
            .send(self.request(Method::GET, "synonymmaps")?, "list synonym maps")
            .await?;
        let list = Self::read_json::<SynonymMapList>(response, "list synonym maps").await?;

        Ok(list.value.into_iter().map(|entry| entry.name).collect())
    }

    async fn get_synonym_map(&self, map_name: &str) -> Result<SynonymMap, SynonymMapError> {
        let path = Self::entity_path("synonymmaps", map_name);
        let response = self
            .send(self.request(Method::GET, &path)?, "get synonym map")
            .await?;
        let body = Self::read_json::<SynonymMapBody>(response, "get synonym map").await?;

        Ok(body.into())
    }

    async fn create_synonym_map(&self, map: &SynonymMap) -> Result<(), SynonymMapError> {
        let builder = self
            .request(Method::POST, "synonymmaps")?
            .json(&SynonymMapBody::from(map));

        let response = builder.send().await?;
        if response.status() == StatusCode::CONFLICT {
            error!(map_name = %map.name, "Synonym map already exists");
            return Err(SynonymMapError::map_already_exists(&map.name));
        }
        Self::check(response, "create synonym map").await?;

        debug!(map_name = %map.name, rules = map.rules.len(), "Synonym map created");
        Ok(())
    }

    async fn create_or_update_synonym_map(
        &self,
        map: &SynonymMap,
    ) -> Result<(), SynonymMapError> {
        let path = Self::entity_path("synonymmaps", &map.name);
        let builder = self
            .request(Method::PUT, &path)?
            .json(&SynonymMapBody::from(map));
        self.send(builder, "create or update synonym map").await?;

        debug!(map_name = %map.name, rules = map.rules.len(), "Synonym map upserted");
        Ok(())
    }

    async fn delete_synonym_map(&self, map_name: &str) -> Result<(), SynonymMapError> {
        let path = Self::entity_path("synonymmaps", map_name);
        let response = self.request(Method::DELETE, &path)?.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(map_name = %map_name, "Synonym map already absent");
            return Ok(());
        }
        Self::check(response, "delete synonym map").await?;

        debug!(map_name = %map_name, "Synonym map deleted");
        Ok(())
    }
}
