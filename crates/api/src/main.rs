use std::sync::Arc;

use anyhow::Context;

use stockroom_api::app::{build_app, services::AppServices};
use stockroom_infra::StockroomConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = StockroomConfig::load().context("failed to load configuration")?;
    tracing::info!(
        backend = ?config.storage.backend,
        data_dir = %config.storage.data_dir.display(),
        slot_key = %config.storage.slot_key,
        "opening inventory"
    );

    let services = Arc::new(AppServices::from_config(&config));
    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(&config.http.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.http.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
