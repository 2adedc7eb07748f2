//! Sky admin API server
//!
//! Main entry point for the Sky shop admin backend.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sky_api::{AppState, create_router};
use sky_core::audit::AutoFill;
use sky_core::shop::ShopService;
use sky_core::storage::{StorageConfig, StorageService};
use sky_shared::{AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sky=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    let external_timeout = Duration::from_secs(config.timeouts.external_secs);

    let jwt_service = JwtService::new(JwtConfig {
        secret: config.jwt.secret.clone(),
        ttl_secs: config.jwt.ttl_secs,
    });

    let storage = StorageService::from_config(StorageConfig::from_settings(
        &config.storage,
        external_timeout,
    ))?;
    info!(
        provider = storage.provider_name(),
        max_file_size = config.storage.max_file_size,
        "Object storage configured"
    );

    let store = sky_store::connect(config.redis.url.as_deref()).await?;
    let shop = ShopService::new(store).with_timeout(external_timeout);

    let auto_fill = AutoFill::new(config.audit.into());
    info!(policy = ?auto_fill.policy(), "Audit auto-fill configured");

    let state = AppState {
        jwt_service: Arc::new(jwt_service),
        storage: Arc::new(storage),
        shop,
        auto_fill,
    };

    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
