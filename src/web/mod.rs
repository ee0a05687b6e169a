//! Web layer - HTTP routes, auth, and pages

pub mod auth;
pub mod error;
pub mod handlers;
pub mod pages;

use crate::infrastructure::{FileSystemStore, Settings, UserTable};
use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

/// Largest accepted request body, in bytes
pub const BODY_LIMIT: usize = 2_000_000;

/// Shared state for every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub store: FileSystemStore,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let store = FileSystemStore::new(settings.data_dir.clone());
        AppState { settings, store }
    }
}

/// Build the full application router
pub fn router(state: Arc<AppState>) -> Router {
    let public = state.settings.public_dir.clone();
    let plugins = state.settings.plugins_dir.clone();

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::index))
        .route("/doc/", get(handlers::open_newest))
        .route("/doc/:slug", get(handlers::open))
        .route("/new", get(handlers::new_document))
        .route("/save", post(handlers::save))
        .route("/search", get(handlers::search_page))
        .route("/find", get(handlers::find))
        .route("/preview", post(handlers::preview))
        .route_service("/main.css", ServeFile::new(public.join("main.css")))
        .nest_service("/media", ServeDir::new(public.join("media")))
        .nest_service("/vendor", ServeDir::new(public.join("vendor")))
        .nest_service("/view", ServeDir::new(public.join("view")))
        .nest_service("/plugins", ServeDir::new(plugins))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_basic_auth,
        ))
        .with_state(state)
}

/// Bind the listener and serve until Ctrl-C
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let addr = settings.listen_addr();
    let users = UserTable::load(&settings.users_file)
        .with_context(|| format!("Failed to read {}", settings.users_file.display()))?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    log::info!("Slipbox listening on http://{}", addr);
    log::info!("Documents in {}", settings.data_dir.display());
    if users.is_default() {
        log::warn!(
            "No users configured in {}; accepting default credentials admin/admin",
            settings.users_file.display()
        );
    } else {
        log::info!("{} user(s) loaded from {}", users.user_count(), settings.users_file.display());
    }

    let app = router(Arc::new(AppState::new(settings)));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Slipbox stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
