//! Integration tests for the synonym manager endpoints.
//!
//! These tests use the real handlers and `SynonymMapService` but a mock
//! `SearchGateway` so no search service is needed.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, Method, Request, StatusCode};
use axum::Json;
use tokio::sync::Mutex;
use tower::ServiceExt;

use synonym_manager::server::{create_app, handlers};
use synonym_manager::server::state::AppState;
use synonym_manager_repository::{
    SearchGateway, SynonymMapError, SynonymMapService, SynonymMapServiceConfig,
};
use synonym_manager_shared::{
    IndexLookupRequest, MapDeletionRequest, ResponseEnvelope, SearchField, SearchIndex,
    SynonymMap, SynonymMapRequest,
};

const FIELD: &str = "content";

// Mock gateway keeping indexes and maps in memory
#[derive(Default)]
struct MockGateway {
    indexes: Mutex<HashMap<String, SearchIndex>>,
    maps: Mutex<Vec<SynonymMap>>,
    index_updates: Mutex<Vec<SearchIndex>>,
    deleted: Mutex<Vec<String>>,
    unreachable: bool,
}

impl MockGateway {
    fn new(indexes: Vec<SearchIndex>, maps: Vec<SynonymMap>) -> Self {
        Self {
            indexes: Mutex::new(
                indexes
                    .into_iter()
                    .map(|index| (index.name.clone(), index))
                    .collect(),
            ),
            maps: Mutex::new(maps),
            ..Default::default()
        }
    }

    fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Default::default()
        }
    }

    fn check_reachable(&self) -> Result<(), SynonymMapError> {
        if self.unreachable {
            Err(SynonymMapError::connection("Mock service unreachable"))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl SearchGateway for MockGateway {
    async fn get_index(&self, index_name: &str) -> Result<SearchIndex, SynonymMapError> {
        self.check_reachable()?;
        self.indexes
            .lock()
            .await
            .get(index_name)
            .cloned()
            .ok_or_else(|| SynonymMapError::not_found(format!("No index named {}", index_name)))
    }

    async fn update_index(&self, index: &SearchIndex) -> Result<(), SynonymMapError> {
        self.check_reachable()?;
        self.index_updates.lock().await.push(index.clone());
        self.indexes
            .lock()
            .await
            .insert(index.name.clone(), index.clone());
        Ok(())
    }

    async fn list_synonym_map_names(&self) -> Result<Vec<String>, SynonymMapError> {
        self.check_reachable()?;
        Ok(self.maps.lock().await.iter().map(|m| m.name.clone()).collect())
    }

    async fn get_synonym_map(&self, map_name: &str) -> Result<SynonymMap, SynonymMapError> {
        self.check_reachable()?;
        self.maps
            .lock()
            .await
            .iter()
            .find(|m| m.name == map_name)
            .cloned()
            .ok_or_else(|| SynonymMapError::not_found(format!("No synonym map named {}", map_name)))
    }

    async fn create_synonym_map(&self, map: &SynonymMap) -> Result<(), SynonymMapError> {
        self.check_reachable()?;
        let mut maps = self.maps.lock().await;
        if maps.iter().any(|m| m.name == map.name) {
            return Err(SynonymMapError::map_already_exists(&map.name));
        }
        maps.push(map.clone());
        Ok(())
    }

    async fn create_or_update_synonym_map(&self, map: &SynonymMap) -> Result<(), SynonymMapError> {
        self.check_reachable()?;
        let mut maps = self.maps.lock().await;
        match maps.iter_mut().find(|m| m.name == map.name) {
            Some(existing) => *existing = map.clone(),
            None => maps.push(map.clone()),
        }
        Ok(())
    }

    async fn delete_synonym_map(&self, map_name: &str) -> Result<(), SynonymMapError> {
        self.check_reachable()?;
        self.maps.lock().await.retain(|m| m.name != map_name);
        self.deleted.lock().await.push(map_name.to_string());
        Ok(())
    }
}

fn index_with(maps: &[&str]) -> SearchIndex {
    SearchIndex::new(
        "idx",
        vec![
            SearchField::new("id"),
            SearchField::new(FIELD).with_synonym_maps(maps.iter().copied()),
        ],
    )
}

fn map(name: &str, rules: &[&str]) -> SynonymMap {
    SynonymMap::new(name, rules.iter().map(|r| r.to_string()).collect())
}

fn state_for(gateway: &Arc<MockGateway>) -> AppState {
    let service = SynonymMapService::new(gateway.clone(), SynonymMapServiceConfig::new(FIELD));
    AppState {
        service: Arc::new(service),
    }
}

fn groups(groups: &[&[&str]]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|group| group.iter().map(|term| term.to_string()).collect())
        .collect()
}

fn map_request(index: &str, map: &str, synonym_list: Vec<Vec<String>>) -> SynonymMapRequest {
    SynonymMapRequest {
        index_name: index.to_string(),
        map_name: map.to_string(),
        synonym_list,
    }
}

fn deletion(index: &str, map: &str) -> MapDeletionRequest {
    MapDeletionRequest {
        index_name: index.to_string(),
        map_name: map.to_string(),
    }
}

fn assert_envelope(
    response: (StatusCode, Json<ResponseEnvelope>),
    status: StatusCode,
    message: &str,
) -> ResponseEnvelope {
    let (actual_status, Json(envelope)) = response;
    assert_eq!(actual_status, status);
    assert_eq!(envelope.code, status.as_u16());
    assert_eq!(envelope.message, message);
    envelope
}

#[tokio::test]
async fn test_create_attaches_map_to_field() {
    let gateway = Arc::new(MockGateway::new(vec![index_with(&[])], vec![]));
    let request = map_request("idx", "m1", groups(&[&["run", "sprint", "jog"]]));

    let response =
        handlers::create_synonym_map(State(state_for(&gateway)), Ok(Json(request))).await;

    let envelope = assert_envelope(response, StatusCode::OK, "Success");
    assert!(envelope.data.is_empty());

    let maps = gateway.maps.lock().await;
    assert_eq!(maps.len(), 1);
    assert_eq!(maps[0].rules, vec!["run, sprint, jog".to_string()]);

    let updates = gateway.index_updates.lock().await;
    assert_eq!(updates.len(), 1);
    let field = updates[0].field(FIELD).unwrap();
    assert_eq!(field.synonym_maps, Some(vec!["m1".to_string()]));
}

#[tokio::test]
async fn test_create_when_field_already_lists_map() {
    let gateway = Arc::new(MockGateway::new(vec![index_with(&["m1"])], vec![]));
    let request = map_request("idx", "m1", groups(&[&["tv", "television"]]));

    let response =
        handlers::create_synonym_map(State(state_for(&gateway)), Ok(Json(request))).await;

    assert_envelope(
        response,
        StatusCode::OK,
        "Synonym map m1 already exists in idx index",
    );
    assert_eq!(gateway.maps.lock().await.len(), 1);
    assert!(gateway.index_updates.lock().await.is_empty());
}

#[tokio::test]
async fn test_create_rejects_invalid_requests() {
    let gateway = Arc::new(MockGateway::new(vec![index_with(&[])], vec![]));
    let state = state_for(&gateway);

    let too_long = map_request("idx", "abcdefghijk", groups(&[&["a", "b"]]));
    let response = handlers::create_synonym_map(State(state.clone()), Ok(Json(too_long))).await;
    assert_envelope(
        response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Invalid map name 'abcdefghijk': must be lowercase and 1 to 10 characters long",
    );

    let single_term = map_request("idx", "m1", groups(&[&["a", "b"], &["solo"]]));
    let response = handlers::create_synonym_map(State(state.clone()), Ok(Json(single_term))).await;
    assert_envelope(
        response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "SubSynonymList at position 1 should contain at least two non-empty elements",
    );

    let empty = map_request("idx", "m1", Vec::new());
    let response = handlers::create_synonym_map(State(state), Ok(Json(empty))).await;
    assert_envelope(
        response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "SynonymList cannot be empty",
    );

    assert!(gateway.maps.lock().await.is_empty());
    assert!(gateway.index_updates.lock().await.is_empty());
}

#[tokio::test]
async fn test_create_on_unknown_index_is_not_found() {
    let gateway = Arc::new(MockGateway::new(vec![], vec![]));
    let request = map_request("missing", "m1", groups(&[&["a", "b"]]));

    let response =
        handlers::create_synonym_map(State(state_for(&gateway)), Ok(Json(request))).await;

    let (status, Json(envelope)) = response;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(envelope.code, 404);
    assert!(envelope.message.starts_with("Index 'missing' does not exist"));
    assert!(gateway.maps.lock().await.is_empty());
}

#[tokio::test]
async fn test_update_replaces_rules_without_touching_index() {
    let gateway = Arc::new(MockGateway::new(
        vec![index_with(&[])],
        vec![map("m1", &["a, b"])],
    ));
    let request = map_request("idx", "m1", groups(&[&["x", "y"], &["p", "q", "r"]]));

    let response =
        handlers::update_synonym_map(State(state_for(&gateway)), Ok(Json(request))).await;

    assert_envelope(response, StatusCode::OK, "Success");
    let maps = gateway.maps.lock().await;
    assert_eq!(
        maps[0].rules,
        vec!["x, y".to_string(), "p, q, r".to_string()]
    );
    assert!(gateway.index_updates.lock().await.is_empty());
}

#[tokio::test]
async fn test_update_of_unknown_map_is_not_found() {
    let gateway = Arc::new(MockGateway::new(vec![index_with(&[])], vec![]));
    let request = map_request("idx", "ghost", groups(&[&["a", "b"]]));

    let response =
        handlers::update_synonym_map(State(state_for(&gateway)), Ok(Json(request))).await;

    let (status, Json(envelope)) = response;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(envelope.message.starts_with("Synonym map 'ghost' does not exist"));
    assert!(gateway.maps.lock().await.is_empty());
}

#[tokio::test]
async fn test_delete_detaches_map_from_field() {
    let gateway = Arc::new(MockGateway::new(
        vec![index_with(&["m1", "m2"])],
        vec![map("m1", &["a, b"]), map("m2", &["c, d"])],
    ));

    let response =
        handlers::delete_synonym_map(State(state_for(&gateway)), Ok(Json(deletion("idx", "m1"))))
            .await;

    assert_envelope(response, StatusCode::OK, "Success");
    assert_eq!(*gateway.deleted.lock().await, vec!["m1".to_string()]);

    let updates = gateway.index_updates.lock().await;
    assert_eq!(updates.len(), 1);
    let field = updates[0].field(FIELD).unwrap();
    assert_eq!(field.synonym_maps, Some(vec!["m2".to_string()]));
}

#[tokio::test]
async fn test_delete_map_not_on_field_still_deletes() {
    let gateway = Arc::new(MockGateway::new(
        vec![index_with(&["other"])],
        vec![map("m9", &["a, b"])],
    ));

    let response =
        handlers::delete_synonym_map(State(state_for(&gateway)), Ok(Json(deletion("idx", "m9"))))
            .await;

    assert_envelope(response, StatusCode::OK, "Synonym map not found in idx index");
    assert_eq!(*gateway.deleted.lock().await, vec!["m9".to_string()]);
    assert!(gateway.index_updates.lock().await.is_empty());
}

#[tokio::test]
async fn test_get_all_synonym_maps() {
    let gateway = Arc::new(MockGateway::new(
        vec![],
        vec![map("a", &["x, y"]), map("b", &["p, q", "r, s, t"])],
    ));

    let response = handlers::get_all_synonym_maps(State(state_for(&gateway))).await;

    let envelope = assert_envelope(response, StatusCode::OK, "Success");
    assert_eq!(envelope.data.len(), 2);
    assert_eq!(envelope.data[0].map_name, "a");
    assert_eq!(envelope.data[0].index_name, None);
    assert_eq!(envelope.data[0].synonym_list, groups(&[&["x", "y"]]));
    assert_eq!(envelope.data[1].map_name, "b");
    assert_eq!(
        envelope.data[1].synonym_list,
        groups(&[&["p", "q"], &["r", "s", "t"]])
    );
}

#[tokio::test]
async fn test_get_synonym_maps_by_index() {
    let gateway = Arc::new(MockGateway::new(
        vec![index_with(&["b"])],
        vec![map("a", &["x, y"]), map("b", &["p, q"])],
    ));
    let request = IndexLookupRequest {
        index_name: "idx".to_string(),
    };

    let response =
        handlers::get_synonym_maps_by_index(State(state_for(&gateway)), Ok(Json(request))).await;

    let envelope = assert_envelope(response, StatusCode::OK, "Success");
    assert_eq!(envelope.data.len(), 1);
    assert_eq!(envelope.data[0].index_name.as_deref(), Some("idx"));
    assert_eq!(envelope.data[0].map_name, "b");
    assert_eq!(envelope.data[0].synonym_list, groups(&[&["p", "q"]]));
}

#[tokio::test]
async fn test_unreachable_service_is_server_error() {
    let gateway = Arc::new(MockGateway::unreachable());

    let response = handlers::get_all_synonym_maps(State(state_for(&gateway))).await;

    let envelope = assert_envelope(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Connection error: Mock service unreachable",
    );
    assert!(envelope.data.is_empty());
}

async fn send_raw(
    gateway: &Arc<MockGateway>,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, ResponseEnvelope) {
    let app = create_app(state_for(gateway).service);

    let mut request = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }
    let response = app
        .oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_malformed_body_gets_error_envelope() {
    let gateway = Arc::new(MockGateway::new(vec![index_with(&[])], vec![]));

    let (status, envelope) = send_raw(
        &gateway,
        Method::POST,
        "/create-synonym-map",
        Some("application/json"),
        "{\"indexName\": \"idx\",",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(envelope.code, 400);
    assert!(!envelope.message.is_empty());
    assert!(envelope.data.is_empty());
    assert!(gateway.maps.lock().await.is_empty());
}

#[tokio::test]
async fn test_missing_field_gets_error_envelope() {
    let gateway = Arc::new(MockGateway::new(vec![index_with(&["m1"])], vec![]));

    let (status, envelope) = send_raw(
        &gateway,
        Method::DELETE,
        "/delete-synonym-map",
        Some("application/json"),
        "{\"indexName\": \"idx\"}",
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(envelope.code, 422);
    assert!(envelope.message.contains("mapName"));
    assert!(envelope.data.is_empty());
    assert!(gateway.deleted.lock().await.is_empty());
}

#[tokio::test]
async fn test_missing_content_type_gets_error_envelope() {
    let gateway = Arc::new(MockGateway::new(vec![index_with(&[])], vec![]));

    let (status, envelope) = send_raw(
        &gateway,
        Method::POST,
        "/get-synonymmap-by-aisearchindexname",
        None,
        "{\"indexName\": \"idx\"}",
    )
    .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(envelope.code, 415);
    assert!(envelope.data.is_empty());
}

#[tokio::test]
async fn test_routed_create_returns_success_envelope() {
    let gateway = Arc::new(MockGateway::new(vec![index_with(&[])], vec![]));

    let (status, envelope) = send_raw(
        &gateway,
        Method::POST,
        "/create-synonym-map",
        Some("application/json"),
        "{\"indexName\": \"idx\", \"mapName\": \"m1\", \"synonymList\": [[\"tv\", \"television\"]]}",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.code, 200);
    assert_eq!(envelope.message, "Success");
    assert_eq!(gateway.maps.lock().await[0].rules, vec!["tv, television"]);
}
