pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<services::user_service::UserService>,
    pub auth_service: Arc<services::auth_service::AuthService>,
    pub token_service: Arc<services::token_service::TokenService>,
    pub event_service: Arc<services::event_service::EventService>,
    pub epass_service: Arc<services::epass_service::EPassService>,
    pub pool: sqlx::SqlitePool,
}

/// Builds the application router. Kept in the library so integration
/// tests drive the same routes and middleware as the binary.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/events", post(handlers::event_handlers::create_event))
        .route(
            "/api/epass",
            post(handlers::epass_handlers::issue_epass)
                .get(handlers::epass_handlers::list_my_epasses),
        )
        .route_layer(from_fn_with_state(state.clone(), middleware::require_auth));

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/auth/signup", post(handlers::auth_handlers::signup))
        .route("/api/auth/login", post(handlers::auth_handlers::login))
        .route("/api/events", get(handlers::event_handlers::list_events))
        .merge(protected)
        .with_state(state)
}
