//! Synonym map service implementation.
//!
//! This module provides the main service behind the HTTP endpoints. Each operation
//! validates its request, converts between equivalence groups and rule strings, and
//! keeps the managed index field in step with map creation and deletion.
//!
//! # Note on Updates
//!
//! Only `create` and `delete` touch the managed field. `update` replaces the rules
//! of an existing map and leaves every index definition as it is.

use std::sync::Arc;

use synonym_manager_shared::{
    EquivalenceGroup, IndexLookupRequest, MapDeletionRequest, SynonymMap, SynonymMapEntry,
    SynonymMapRequest,
};
use tracing::{debug, info, instrument};

use crate::codec;
use crate::config::SynonymMapServiceConfig;
use crate::errors::SynonymMapError;
use crate::interfaces::SearchGateway;
use crate::reconciler::FieldReconciler;
use crate::types::{CreateOutcome, DeleteOutcome};
use crate::validator::RequestValidator;

/// The main service for managing synonym maps.
///
/// This is the high-level API used by the HTTP handlers. It holds no state of its
/// own besides the injected gateway and the managed field name; every operation
/// reads the current definitions from the gateway.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use synonym_manager_repository::{AzureSearchGateway, SynonymMapService, SynonymMapServiceConfig};
/// use synonym_manager_repository::azure::GatewayConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let gateway = AzureSearchGateway::new(GatewayConfig::new(
///     "https://my-service.search.windows.net",
///     "admin-key",
/// ))?;
/// let service = SynonymMapService::new(
///     Arc::new(gateway),
///     SynonymMapServiceConfig::new("content"),
/// );
///
/// for entry in service.list_all().await? {
///     println!("{}: {:?}", entry.map_name, entry.synonym_list);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SynonymMapService {
    gateway: Arc<dyn SearchGateway>,
    reconciler: FieldReconciler,
}

impl SynonymMapService {
    /// Create a new SynonymMapService.
    ///
    /// # Arguments
    ///
    /// * `gateway` - The search service gateway (e.g., `AzureSearchGateway`)
    /// * `config` - Service configuration naming the managed field
    pub fn new(gateway: Arc<dyn SearchGateway>, config: SynonymMapServiceConfig) -> Self {
        Self {
            gateway,
            reconciler: FieldReconciler::new(config.field_name),
        }
    }

    /// Name of the managed index field.
    pub fn field_name(&self) -> &str {
        self.reconciler.field_name()
    }

    fn validator(&self) -> RequestValidator<'_> {
        RequestValidator::new(self.gateway.as_ref())
    }

    async fn fetch_groups(&self, map_name: &str) -> Result<Vec<EquivalenceGroup>, SynonymMapError> {
        let map = self.gateway.get_synonym_map(map_name).await?;
        Ok(codec::decode(&map.rules))
    }

    /// List every synonym map of the search service in decoded form.
    ///
    /// Entries follow the gateway's enumeration order and carry no index name.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<SynonymMapEntry>, SynonymMapError> {
        let names = self.gateway.list_synonym_map_names().await?;

        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let groups = self.fetch_groups(&name).await?;
            entries.push(SynonymMapEntry::new(name, groups));
        }

        debug!(count = entries.len(), "Listed synonym maps");
        Ok(entries)
    }

    /// List the synonym maps attached to the managed field of an index.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<SynonymMapEntry>)` - Entries tagged with the index name, unique by map
    /// * `Err(SynonymMapError::IndexNotFound)` - If the index cannot be resolved
    /// * `Err(SynonymMapError)` - If fetching an attached map fails
    #[instrument(skip(self, request), fields(index_name = %request.index_name))]
    pub async fn list_for_index(
        &self,
        request: &IndexLookupRequest,
    ) -> Result<Vec<SynonymMapEntry>, SynonymMapError> {
        let index = self
            .validator()
            .validate_index_lookup(&request.index_name)
            .await?;

        let names = self.reconciler.attached_map_names(&index);

        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let groups = self.fetch_groups(&name).await?;
            entries.push(SynonymMapEntry::for_index(&request.index_name, name, groups));
        }

        debug!(count = entries.len(), "Listed synonym maps for index");
        Ok(entries)
    }

    /// Create a synonym map and attach it to the managed field.
    ///
    /// The index is written back only if the field did not already list the map.
    ///
    /// # Returns
    ///
    /// * `Ok(CreateOutcome)` - `field_updated` tells whether the index was written
    /// * `Err(SynonymMapError)` - Validation failure, or `MapAlreadyExists`, or a gateway error
    #[instrument(skip(self, request), fields(index_name = %request.index_name, map_name = %request.map_name))]
    pub async fn create(
        &self,
        request: &SynonymMapRequest,
    ) -> Result<CreateOutcome, SynonymMapError> {
        let mut index = self.validator().validate_create(request).await?;

        let map = SynonymMap::new(&request.map_name, codec::encode(&request.synonym_list));
        self.gateway.create_synonym_map(&map).await?;
        info!("Synonym map created");

        let mutation = self.reconciler.plan_attach(&index, &request.map_name);
        let field_updated = !mutation.is_noop() && mutation.apply(&mut index);
        if field_updated {
            self.gateway.update_index(&index).await?;
            info!(field_name = %self.field_name(), "Synonym map added to index");
        } else {
            info!("Synonym map already present in index");
        }

        Ok(CreateOutcome { field_updated })
    }

    /// Replace the rules of an existing synonym map.
    ///
    /// Field associations are not touched.
    #[instrument(skip(self, request), fields(index_name = %request.index_name, map_name = %request.map_name))]
    pub async fn update(&self, request: &SynonymMapRequest) -> Result<(), SynonymMapError> {
        self.validator().validate_update(request).await?;

        let map = SynonymMap::new(&request.map_name, codec::encode(&request.synonym_list));
        self.gateway.create_or_update_synonym_map(&map).await?;
        info!("Synonym map updated");

        Ok(())
    }

    /// Delete a synonym map and detach it from the managed field.
    ///
    /// The map is deleted whether or not the field lists it; the index is written
    /// back only if the field did.
    #[instrument(skip(self, request), fields(index_name = %request.index_name, map_name = %request.map_name))]
    pub async fn delete(
        &self,
        request: &MapDeletionRequest,
    ) -> Result<DeleteOutcome, SynonymMapError> {
        let mut index = self.validator().validate_delete(request).await?;

        self.gateway.delete_synonym_map(&request.map_name).await?;
        info!("Synonym map deleted");

        let mutation = self.reconciler.plan_detach(&index, &request.map_name);
        let field_updated = !mutation.is_noop() && mutation.apply(&mut index);
        if field_updated {
            self.gateway.update_index(&index).await?;
            info!(field_name = %self.field_name(), "Synonym map removed from index");
        } else {
            info!("Synonym map not found in index");
        }

        Ok(DeleteOutcome { field_updated })
    }
}
