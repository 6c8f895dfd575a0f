use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use car_service_shop::config::environment::EnvironmentConfig;
use car_service_shop::database;
use car_service_shop::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use car_service_shop::routes;
use car_service_shop::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Car Service Shop API");
    info!("=======================");

    let config = EnvironmentConfig::from_env();

    let pool = match database::create_pool(Some(&config.database_url)).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Failed to open the store: {}", e);
            return Err(e);
        }
    };

    // Schema + first-run seed data (idempotent).
    database::initialize(&pool).await?;
    info!("✅ Store ready at {}", config.database_url);

    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    let state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::api_router())
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Listening on http://{}", addr);
    info!("🔍 Endpoints:");
    info!("   GET    /health");
    for entity in ["car", "service", "part"] {
        info!("   GET    /api/{}", entity);
        info!("   GET    /api/{}/:id", entity);
        info!("   POST   /api/{}", entity);
        info!("   PUT    /api/{}/:id", entity);
        info!("   DELETE /api/{}/:id", entity);
    }
    info!("   GET    /api/service/bycar/:car_id");
    info!("   GET    /api/service/:id/worksheet");
    info!("   GET    /api/part/byservice/:service_id");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "car-service-shop",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
