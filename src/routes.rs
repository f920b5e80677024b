use std::sync::Arc;

use axum::routing::{any, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::site::landing_page))
        .route("/health", get(handlers::health::health))
        .route("/api/pricing", get(handlers::site::get_pricing))
        .route("/api/validate", post(handlers::booking::validate_form))
        .route("/api/validate/:field", post(handlers::booking::validate_one))
        .route("/api/chat", post(handlers::chat::send_message))
        .route("/api/chat/quick/:action", post(handlers::chat::quick_action))
        .route(
            "/.netlify/functions/submitBooking",
            any(handlers::booking::submit_booking),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
