// App state for the Axum server
use std::sync::Arc;

use synonym_manager_repository::SynonymMapService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SynonymMapService>,
}
