//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{auth, friends, health, messages, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(friend_routes())
        .merge(message_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route("/users/:tag", get(users::get_user_by_tag))
}

/// Friend routes
fn friend_routes() -> Router<AppState> {
    Router::new()
        .route("/friends", get(friends::list_friends))
        .route("/friends/requests", post(friends::send_request))
        .route("/friends/requests/incoming", get(friends::incoming_requests))
        .route("/friends/requests/outgoing", get(friends::outgoing_requests))
        .route(
            "/friends/requests/:request_id/accept",
            post(friends::accept_request),
        )
        .route(
            "/friends/requests/:request_id/reject",
            post(friends::reject_request),
        )
}

/// Message routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages/private", post(messages::send_private))
        .route("/messages/private/:tag", get(messages::conversation))
        .route("/messages/conversations", get(messages::conversations))
        .route("/messages/channel", post(messages::send_channel))
        .route("/channels/:channel/messages", get(messages::channel_messages))
}
