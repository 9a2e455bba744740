//! Slides Backend
//!
//! REST backend for a password-gated slideshow presentation app: a viewer
//! role browses the deck, an admin role authors it. The whole presentation
//! persists as one JSON document in a SQLite key-value slot.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionMap;
use config::Config;
use store::DocumentStore;

/// Headroom over the inline video cap so a capped payload still fits in a
/// JSON request body.
const BODY_LIMIT_BYTES: usize = store::VIDEO_MAX_BYTES + 16 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub sessions: SessionMap,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Slides Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database and load the document
    let pool = db::init_database(&config.db_path).await?;
    let kv = db::KvStore::new(pool);
    let store = Arc::new(DocumentStore::load(kv).await?);
    tracing::info!(
        "Loaded document with {} slides",
        store.document().await.slides.len()
    );

    // Create application state
    let state = AppState {
        store,
        sessions: SessionMap::new(),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone the session map for the auth layer
    let sessions = state.sessions.clone();

    // Routes any authenticated role may call
    let session_routes = Router::new()
        .route("/auth/session", get(api::get_session))
        .route("/auth/logout", post(api::logout))
        .route("/document", get(api::get_document))
        .route("/document/export", get(api::export_document))
        .route("/slides", get(api::list_slides));

    // Routes that mutate the document require the admin role
    let admin_routes = Router::new()
        .route("/slides", post(api::create_slide))
        .route("/slides/reorder", put(api::reorder_slides))
        .route("/slides/{id}", put(api::update_slide))
        .route("/slides/{id}", delete(api::delete_slide))
        .route("/document/meta", put(api::update_meta))
        .route("/document/bgm", put(api::update_bgm))
        .route("/document/import", post(api::import_document))
        .route("/document/reset", post(api::reset_document))
        .layer(middleware::from_fn(auth::require_admin_layer));

    let api_routes = session_routes
        .merge(admin_routes)
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(sessions.clone(), req, next)
        }))
        // Login happens before a session exists
        .route("/auth/login", post(api::login));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
