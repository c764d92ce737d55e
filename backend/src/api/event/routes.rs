//! Defines the HTTP routes for event management.

use super::handlers::{create_event, delete_event, list_events, toggle_posted, update_event};
use crate::auth::middleware::{require_admin, require_auth};
use axum::handler::Handler;
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

/// Creates the event router. Every route requires a session; deletion
/// additionally requires the admin role.
pub fn event_router() -> Router {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route(
            "/{id}",
            put(update_event).delete(delete_event.layer(middleware::from_fn(require_admin))),
        )
        .route("/{id}/toggle-posted", post(toggle_posted))
        .layer(middleware::from_fn(require_auth))
}
