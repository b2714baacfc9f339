//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, InMemoryUserRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trivia::{ChatCompletionsGenerator, InMemoryReviewRepository, TriviaConfig, trivia_router};

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
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,trivia=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Session configuration
    let auth_config = Arc::new(load_auth_config()?);

    // Generator configuration
    let trivia_config = Arc::new(load_trivia_config()?);

    // In-memory stores; all state is lost on restart
    let users = Arc::new(InMemoryUserRepository::new());
    let reviews = Arc::new(InMemoryReviewRepository::new());
    let generator = Arc::new(ChatCompletionsGenerator::new(&trivia_config)?);

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
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(users.clone(), auth_config.clone()))
        .nest(
            "/api",
            trivia_router(generator, users, reviews, trivia_config, auth_config),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Load session configuration from the environment
///
/// Development builds fall back to a random per-process secret, which
/// invalidates all sessions on restart. Production requires an explicit
/// secret so sessions survive redeploys.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        let secret_b64 = env::var("SESSION_SECRET")
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET must be set in production"))?;
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        let mut secret = [0u8; 32];
        if secret_bytes.len() != secret.len() {
            anyhow::bail!("SESSION_SECRET must decode to exactly 32 bytes");
        }
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            session_secret: secret,
            ..AuthConfig::default()
        }
    };

    if let Ok(pepper) = env::var("PASSWORD_PEPPER") {
        config.password_pepper = Some(pepper.into_bytes());
    }

    Ok(config)
}

/// Load generator configuration from the environment
fn load_trivia_config() -> anyhow::Result<TriviaConfig> {
    let mut config = TriviaConfig::default();

    if let Ok(url) = env::var("GENERATOR_URL") {
        config.generator_url = url;
    }
    if let Ok(model) = env::var("GENERATOR_MODEL") {
        config.generator_model = model;
    }
    if let Ok(timeout) = env::var("GENERATOR_TIMEOUT_SECS") {
        config.generator_timeout = Duration::from_secs(timeout.parse()?);
    }

    match env::var("GENERATOR_API_KEY") {
        Ok(key) => config.generator_api_key = key,
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("GENERATOR_API_KEY not set; quiz generation will fail");
        }
        Err(_) => anyhow::bail!("GENERATOR_API_KEY must be set in production"),
    }

    Ok(config)
}
