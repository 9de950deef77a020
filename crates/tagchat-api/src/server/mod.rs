//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tagchat_cache::{MemoryRateLimiter, RedisPool, RedisRateLimiter};
use tagchat_common::{AppConfig, AppError, Backing, JwtService};
use tagchat_core::SnowflakeGenerator;
use tagchat_db::{
    create_pool, MemoryFriendRepository, MemoryMessageRepository, MemoryUserRepository,
    PgFriendRepository, PgMessageRepository, PgUserRepository,
};
use tagchat_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();
    let router = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    // Health stays outside the HTTP rate limit
    router.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// The storage backing is selected by configuration: Postgres + Redis for
/// deployments, in-memory for local runs without external services.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let service_context = match config.backing {
        Backing::Postgres => postgres_context(&config).await?,
        Backing::Memory => memory_context(&config)?,
    };

    Ok(AppState::new(service_context, config))
}

async fn postgres_context(config: &AppConfig) -> Result<ServiceContext, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = tagchat_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    info!("Connecting to Redis...");
    let redis_pool =
        RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    info!("Redis connection pool created");

    build_context(
        config,
        ServiceContextBuilder::new()
            .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
            .friend_repo(Arc::new(PgFriendRepository::new(pool.clone())))
            .message_repo(Arc::new(PgMessageRepository::new(pool)))
            .rate_limiter(Arc::new(RedisRateLimiter::new(redis_pool))),
    )
}

fn memory_context(config: &AppConfig) -> Result<ServiceContext, AppError> {
    warn!("Using in-memory storage backing; all data is lost on restart");

    build_context(
        config,
        ServiceContextBuilder::new()
            .user_repo(Arc::new(MemoryUserRepository::new()))
            .friend_repo(Arc::new(MemoryFriendRepository::new()))
            .message_repo(Arc::new(MemoryMessageRepository::new()))
            .rate_limiter(Arc::new(MemoryRateLimiter::new())),
    )
}

fn build_context(
    config: &AppConfig,
    builder: ServiceContextBuilder,
) -> Result<ServiceContext, AppError> {
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    builder
        .rate_limits(config.rate_limit.clone())
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
