use axum::{ routing::get, Router };

use crate::{ handlers, state::AppState };

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::health_check))
        .with_state(state)
}
