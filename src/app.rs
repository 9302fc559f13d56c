use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/entries/add", post(handlers::add_entry_form))
        .route("/api/entries", get(handlers::get_entries).post(handlers::add_entry))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
