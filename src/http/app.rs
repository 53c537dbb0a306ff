use axum::{
    Router,
    routing::{get, post},
};
use std::sync::{Arc, Mutex};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// Central shared state, passed as `Arc<AppState>` to all handlers.
pub struct AppState {
    pub config: Config,
    /// Single SQLite connection; each request holds the lock for the duration
    /// of its statements only.
    db: Mutex<DbPool>,
}

impl AppState {
    pub fn new(config: Config, pool: DbPool) -> Self {
        Self {
            config,
            db: Mutex::new(pool),
        }
    }

    /// Run `f` with exclusive access to the database.
    pub fn with_db<T>(&self, f: impl FnOnce(&mut DbPool) -> AppResult<T>) -> AppResult<T> {
        let mut pool = self
            .db
            .lock()
            .map_err(|_| AppError::Other("database lock poisoned".into()))?;
        f(&mut pool)
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    use super::{backup, entries, export, health, settings};

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/entries",
            get(entries::list_entries).post(entries::create_entry),
        )
        .route("/entries/defaults", get(entries::entry_defaults))
        .route(
            "/entries/{id}",
            get(entries::get_entry).delete(entries::delete_entry),
        )
        .route("/entries/{id}/paid", post(entries::mark_paid))
        .route("/entries/{id}/toggle_paid", post(entries::toggle_paid))
        .route("/pay_all", post(entries::pay_all))
        .route("/export/pdf", get(export::export_pdf))
        .route(
            "/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/backup", get(backup::backup_json))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
