use std::sync::Arc;

use dalil_core::core::client::SessionClient;
use dalil_core::core::config::Config;
use dalil_core::core::error::AppError;
use dalil_core::features::auth::{FileSessionStore, Session};
use dalil_core::features::dashboard::DashboardService;
use dalil_core::features::directory::{
    DirectoryGateway, DirectoryLoader, DirectoryService, SnapshotCache,
};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully (API: {})", config.api.base_url);

    let session_store = Arc::new(FileSessionStore::new(&config.storage.session_file));
    let session = Arc::new(Session::restore(session_store).await?);
    let client = Arc::new(SessionClient::new(config.api.clone(), Arc::clone(&session))?);
    let gateway = Arc::new(DirectoryGateway::new(Arc::clone(&client)));
    let cache = Arc::new(SnapshotCache::new(&config.storage.cache_file));
    tracing::info!("Directory gateway initialized");

    // A restored token may have been revoked; a 401 here clears it
    if client.is_authenticated().await {
        match client.verify().await {
            Ok(()) => tracing::info!("Persisted session is still valid"),
            Err(AppError::Unauthorized) => tracing::warn!("Persisted session was rejected"),
            Err(e) => tracing::warn!("Could not verify persisted session: {}", e),
        }
    }

    if !client.is_authenticated().await {
        if let Some(credentials) = &config.credentials {
            if let Err(e) = client
                .login(&credentials.identifier, &credentials.password)
                .await
            {
                tracing::error!("Login failed: {}", e);
            }
        }
    }

    let visitors = cache.record_visit().await?;
    tracing::info!("Visit recorded (total: {})", visitors);

    let directory_service = DirectoryService::new(
        DirectoryLoader::new(Arc::clone(&gateway)),
        Arc::clone(&cache),
    );

    let public = directory_service.load_public_or_fallback().await?;
    if public.is_fallback() {
        tracing::warn!("Showing {:?} data for the public directory", public.source);
    }

    let mut output = json!({ "public": public });

    if client.is_authenticated().await {
        let dashboard = directory_service.load_dashboard_or_fallback().await?;
        let dashboard_service = DashboardService::new(Arc::clone(&gateway), Arc::clone(&cache));
        let statistics = dashboard_service.statistics(&dashboard.data).await?;
        let summary = dashboard_service.summary().await.unwrap_or_else(|e| {
            tracing::warn!("Dashboard summary unavailable: {}", e);
            Default::default()
        });
        output["dashboard"] = json!({
            "data": dashboard,
            "statistics": statistics,
            "summary": summary,
        });
    }

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
