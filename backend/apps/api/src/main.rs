//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use accounts::{AccountConfig, PgAccountRepository, accounts_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use curriculum::{CurriculumConfig, FsModuleStore, curriculum_router};
use progress::{PgProgressRepository, progress_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tutor::{TutorConfig, tutor_router};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,accounts=info,curriculum=info,progress=info,tutor=info,tower_http=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    let account_store = PgAccountRepository::new(pool.clone());
    match account_store.cleanup_expired().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }

    // Account configuration
    let account_config = if cfg!(debug_assertions) {
        AccountConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AccountConfig {
            session_secret: secret,
            ..AccountConfig::default()
        }
    };

    // Curriculum configuration
    let curriculum_config = CurriculumConfig {
        modules_dir: env::var("MODULES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("modules")),
    };

    // Tutor configuration
    let tutor_defaults = TutorConfig::default();
    let tutor_config = TutorConfig {
        solver_url: env::var("SOLVER_URL").unwrap_or(tutor_defaults.solver_url),
        recognizer_url: env::var("RECOGNIZER_URL").unwrap_or(tutor_defaults.recognizer_url),
        recognizer_app_id: env::var("RECOGNIZER_APP_ID").unwrap_or_default(),
        recognizer_app_key: env::var("RECOGNIZER_APP_KEY").unwrap_or_default(),
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true);

    // Build router
    let api = Router::new()
        .merge(accounts_router(
            PgAccountRepository::new(pool.clone()),
            account_config,
        ))
        .merge(curriculum_router(FsModuleStore::new(curriculum_config)))
        .merge(progress_router(PgProgressRepository::new(pool.clone())))
        .merge(tutor_router(pool.clone(), tutor_config));

    let app = Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
