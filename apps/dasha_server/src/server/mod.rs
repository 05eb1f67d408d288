mod handlers;
mod router;
mod state;

pub use handlers::{compare, dasha, health, method_not_allowed, not_found, numerology, records};
pub use router::create_router;
pub use state::AppState;

use jyotish_config::ServerSettings;

use crate::store::RecordStore;

pub async fn open_store(settings: &ServerSettings) -> anyhow::Result<RecordStore> {
    match &settings.records_path {
        Some(path) => RecordStore::open(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to open record store {}: {e}", path.display())),
        None => {
            log::info!("No storage.records_path set; saved records live in memory only");
            Ok(RecordStore::in_memory())
        }
    }
}

/// Run the HTTP server
pub async fn run(settings: ServerSettings) -> anyhow::Result<()> {
    let records = open_store(&settings).await?;
    let addr = settings.addr();
    let state = AppState::new(settings, records);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {addr}: {e}"))?;

    log::info!("Dasha server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {e}"))?;

    Ok(())
}
