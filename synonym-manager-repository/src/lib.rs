//! # Synonym Manager Repository
//!
//! This crate provides the gateway trait for a hosted search service, an Azure AI
//! Search implementation of it, and the synonym map logic built on top: the
//! equivalence rule codec, request validation, index field reconciliation and the
//! orchestrating `SynonymMapService`.

pub mod azure;
pub mod codec;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod reconciler;
pub mod service;
pub mod types;
pub mod utils;
pub mod validator;

pub use azure::AzureSearchGateway;
pub use config::SynonymMapServiceConfig;
pub use errors::{ErrorKind, SynonymMapError};
pub use interfaces::SearchGateway;
pub use reconciler::{FieldMutation, FieldReconciler};
pub use service::SynonymMapService;
pub use types::{CreateOutcome, DeleteOutcome};
pub use utils::unique_in_order;
pub use validator::RequestValidator;
