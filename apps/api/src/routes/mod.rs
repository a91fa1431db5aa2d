pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless assessment API
        .route(
            "/api/v1/assessment/catalog",
            get(handlers::handle_get_catalog),
        )
        .route("/api/v1/assessment/score", post(handlers::handle_score))
        // Session-driven collection
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/answers",
            put(handlers::handle_record_answer),
        )
        .route("/api/v1/sessions/:id/advance", post(handlers::handle_advance))
        .route("/api/v1/sessions/:id/retreat", post(handlers::handle_retreat))
        .route(
            "/api/v1/sessions/:id/results",
            post(handlers::handle_session_results),
        )
        .with_state(state)
}
