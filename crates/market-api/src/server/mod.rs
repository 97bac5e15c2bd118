//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::sync::Arc;

use axum::Router;
use market_common::{AppConfig, AppError};
use market_core::{SnowflakeGenerator, StoreHealth};
use market_db::{
    create_pool, ensure_schema, DatabaseConfig, PgModelRepository, PgPool, PgStoreHealth,
    PgSubscriptionRepository, PgUserRepository,
};
use market_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes sit outside the middleware stack so probes are never
/// rate limited.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(api.merge(health_routes()).with_state(state))
}

/// Connect to PostgreSQL, prepare the schema and wire the services
///
/// Returns the pool alongside the state so the caller can close it on
/// shutdown.
pub async fn create_app_state(config: AppConfig) -> Result<(AppState, PgPool), AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig::new(
        config.database.url.clone(),
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let store_health = Arc::new(PgStoreHealth::new(pool.clone()));
    store_health.ping().await?;
    info!("PostgreSQL connection established");

    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .model_repo(Arc::new(PgModelRepository::new(pool.clone())))
        .subscription_repo(Arc::new(PgSubscriptionRepository::new(pool.clone())))
        .store_health(store_health)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(AppError::internal)?;

    Ok((AppState::new(service_context, config), pool))
}

/// Serve `app` on `addr` until ctrl-c or SIGTERM
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let (state, pool) = create_app_state(config).await?;
    let app = create_app(state)?;

    let result = run_server(app, &addr).await;
    pool.close().await;
    result
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
