use std::sync::Arc;
use tracing::{info, warn};

use smartlang::nmt::{HuggingFaceProvider, NeuralTranslator};
use smartlang::{Dictionaries, Translator};
use smartlang_web::config::ServerConfig;
use smartlang_web::reports::ReportStore;
use smartlang_web::{AppState, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let config = ServerConfig::from_env();

    let dictionaries = match &config.data_dir {
        Some(dir) => {
            info!("Loading dictionaries from {}", dir.display());
            Dictionaries::load_from_dir(dir)
        }
        None => Dictionaries::builtin(),
    }
    .map_err(|e| format!("Failed to load dictionaries: {}", e))?;

    let nmt: Option<Arc<dyn NeuralTranslator>> = match HuggingFaceProvider::from_env(None) {
        Ok(provider) => {
            info!("Neural translation enabled with model {}", provider.model());
            Some(Arc::new(provider))
        }
        Err(e) => {
            warn!("Neural translation disabled: {}", e);
            None
        }
    };

    let reports = ReportStore::open(&config.reports_path)
        .await
        .map_err(|e| format!("Failed to open report store: {}", e))?;

    let state = AppState {
        translator: Arc::new(Translator::new(dictionaries)),
        nmt,
        reports: Arc::new(reports),
    };

    info!("Starting SmartLang API");
    let app = router(state, config.cors_layer());

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("Server running at http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
