use anyhow::Context;
use std::sync::Arc;
use storage::{
    Database,
    kv::{KeyValueStore, MemoryStore, PgKeyValueStore},
    repository::lift::LiftRepository,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::lifts::handlers::log_lift,
        features::lifts::handlers::list_recent_lifts,
        features::lifts::handlers::list_lift_types,
        features::leaderboard::handlers::get_leaderboard,
        features::leaderboard::handlers::stream_leaderboard,
        features::dashboard::handlers::get_challenge,
        features::dashboard::handlers::get_dashboard,
        features::dashboard::handlers::stream_dashboard,
        features::dashboard::handlers::get_countdown,
        features::dashboard::handlers::stream_countdown,
    ),
    components(
        schemas(
            storage::dto::lift::LogLiftRequest,
            storage::dto::lift::LiftResponse,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::leaderboard::LeaderboardSummary,
            storage::dto::leaderboard::LeaderboardResponse,
            storage::dto::dashboard::DashboardStats,
            storage::dto::dashboard::ChallengeInfo,
            storage::dto::dashboard::DashboardResponse,
            storage::services::countdown::TimeRemaining,
            storage::models::LiftType,
            storage::models::LiftRecord,
        )
    ),
    tags(
        (name = "lifts", description = "Lift logging endpoints"),
        (name = "leaderboard", description = "Ranking by total weight lifted"),
        (name = "dashboard", description = "Challenge countdown and statistics"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Lift Challenge API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!(
        challenge = %config.challenge.name,
        starts_at = %config.challenge.starts_at,
        "Configuration loaded successfully"
    );

    let store = open_store(&config).await?;
    let state = AppState::new(LiftRepository::new(store), config.challenge.clone());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = features::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}

async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, lifts are kept in memory and lost on restart");
        return Ok(Arc::new(MemoryStore::new()));
    };

    tracing::info!(
        "Connecting to database at: {}",
        database_url.split('@').next_back().unwrap_or("unknown")
    );
    let db = Database::new(database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(PgKeyValueStore::new(&db)))
}
