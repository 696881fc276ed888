// HTTP request handlers
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use synonym_manager_shared::{
    IndexLookupRequest, MapDeletionRequest, ResponseEnvelope, SynonymMapRequest,
};
use tracing::info;

use crate::errors::{error_response, rejection_response, ApiResponse};
use crate::server::state::AppState;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Synonym manager is running")
}

/// List every synonym map of the search service
pub async fn get_all_synonym_maps(State(state): State<AppState>) -> ApiResponse {
    info!("Received list request");

    match state.service.list_all().await {
        Ok(entries) => (StatusCode::OK, Json(ResponseEnvelope::success(entries))),
        Err(e) => error_response("list synonym maps", &e),
    }
}

/// List the synonym maps attached to the managed field of one index
pub async fn get_synonym_maps_by_index(
    State(state): State<AppState>,
    payload: Result<Json<IndexLookupRequest>, JsonRejection>,
) -> ApiResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response("list synonym maps by index", &rejection),
    };
    info!(index_name = %request.index_name, "Received list by index request");

    match state.service.list_for_index(&request).await {
        Ok(entries) => (StatusCode::OK, Json(ResponseEnvelope::success(entries))),
        Err(e) => error_response("list synonym maps by index", &e),
    }
}

/// Create a synonym map and attach it to the managed field
pub async fn create_synonym_map(
    State(state): State<AppState>,
    payload: Result<Json<SynonymMapRequest>, JsonRejection>,
) -> ApiResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response("create synonym map", &rejection),
    };
    info!(
        index_name = %request.index_name,
        map_name = %request.map_name,
        groups = request.synonym_list.len(),
        "Received create request"
    );

    match state.service.create(&request).await {
        Ok(outcome) => {
            let message = outcome.message(&request.map_name, &request.index_name);
            (StatusCode::OK, Json(ResponseEnvelope::ok_with_message(message)))
        }
        Err(e) => error_response("create synonym map", &e),
    }
}

/// Replace the rules of an existing synonym map
pub async fn update_synonym_map(
    State(state): State<AppState>,
    payload: Result<Json<SynonymMapRequest>, JsonRejection>,
) -> ApiResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response("update synonym map", &rejection),
    };
    info!(
        index_name = %request.index_name,
        map_name = %request.map_name,
        groups = request.synonym_list.len(),
        "Received update request"
    );

    match state.service.update(&request).await {
        Ok(()) => (StatusCode::OK, Json(ResponseEnvelope::success(Vec::new()))),
        Err(e) => error_response("update synonym map", &e),
    }
}

/// Delete a synonym map and detach it from the managed field
pub async fn delete_synonym_map(
    State(state): State<AppState>,
    payload: Result<Json<MapDeletionRequest>, JsonRejection>,
) -> ApiResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response("delete synonym map", &rejection),
    };
    info!(
        index_name = %request.index_name,
        map_name = %request.map_name,
        "Received delete request"
    );

    match state.service.delete(&request).await {
        Ok(outcome) => {
            let message = outcome.message(&request.index_name);
            (StatusCode::OK, Json(ResponseEnvelope::ok_with_message(message)))
        }
        Err(e) => error_response("delete synonym map", &e),
    }
}
