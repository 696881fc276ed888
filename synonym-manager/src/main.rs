//! Synonym Manager Main Entry Point
//!
//! Serves the synonym map endpoints on top of an Azure AI Search service.

use dotenv::dotenv;
use std::env;
use synonym_manager::server::{create_app, run_server};
use synonym_manager::{Dependencies, ServerError, Settings};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("synonym_manager=info,synonym_manager_repository=info,tower_http=info")
    });

    let json_output = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();

        info!(
            service_name = "synonym-manager",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with JSON format"
        );
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();

        info!(
            service_name = "synonym-manager",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with console output"
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    info!("Starting Synonym Manager");

    let settings = Settings::from_env()?;
    info!(settings = ?settings, "Settings loaded");

    let deps = match Dependencies::new(&settings) {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let app = create_app(deps.service);
    match run_server(app, settings.server_addr).await {
        Ok(()) => {
            info!("Synonym manager stopped");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Synonym manager failed");
            Err(e)
        }
    }
}
