//! Handler functions for event management API endpoints.

use crate::api::common::service_error_to_http;
use crate::api::event::models::{EventPayload, RangeQuery};
use crate::auth::models::SessionUser;
use crate::errors::ServiceError;
use crate::gateway::Gateway;
use crate::gateway::models::{Event, EventChanges, NewEventRow};
use axum::{
    extract::{Extension, Json, Path, Query},
    http::StatusCode,
    response::Json as ResponseJson,
};
use std::sync::Arc;

/// Retrieves events within an inclusive date range.
#[axum::debug_handler]
pub async fn list_events(
    Extension(gateway): Extension<Arc<dyn Gateway>>,
    Query(range): Query<RangeQuery>,
) -> Result<ResponseJson<Vec<Event>>, (StatusCode, String)> {
    let (start, end) = range.resolve().map_err(service_error_to_http)?;

    let events = gateway
        .events_in_range(start, end)
        .await
        .map_err(|error| service_error_to_http(error.into()))?;

    Ok(ResponseJson(events))
}

/// Creates a new event stamped with the session user.
#[axum::debug_handler]
pub async fn create_event(
    Extension(gateway): Extension<Arc<dyn Gateway>>,
    Extension(user): Extension<SessionUser>,
    Json(payload): Json<EventPayload>,
) -> Result<ResponseJson<Event>, (StatusCode, String)> {
    let fields = payload.into_fields().map_err(service_error_to_http)?;

    // `posted` is left to the store default (false).
    let event = gateway
        .insert_event(NewEventRow {
            date: fields.date,
            time: fields.time,
            title: fields.title,
            channel: fields.channel,
            platform: fields.platform,
            notes: fields.notes,
            created_by: user.id,
        })
        .await
        .map_err(|error| service_error_to_http(error.into()))?;

    Ok(ResponseJson(event))
}

/// Updates an event by id. Any authenticated user may edit any event.
#[axum::debug_handler]
pub async fn update_event(
    Extension(gateway): Extension<Arc<dyn Gateway>>,
    Path(id): Path<i64>,
    Json(payload): Json<EventPayload>,
) -> Result<ResponseJson<Event>, (StatusCode, String)> {
    let fields = payload.into_fields().map_err(service_error_to_http)?;

    let updated = gateway
        .update_event(
            id,
            EventChanges {
                date: fields.date,
                time: fields.time,
                title: fields.title,
                channel: fields.channel,
                platform: fields.platform,
                notes: fields.notes,
            },
        )
        .await
        .map_err(|error| service_error_to_http(error.into()))?;

    match updated {
        Some(event) => Ok(ResponseJson(event)),
        None => Err(service_error_to_http(ServiceError::NotFound)),
    }
}

/// Flips the posted flag of an event.
#[axum::debug_handler]
pub async fn toggle_posted(
    Extension(gateway): Extension<Arc<dyn Gateway>>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<Event>, (StatusCode, String)> {
    let posted = gateway
        .event_posted(id)
        .await
        .map_err(|error| service_error_to_http(error.into()))?
        .ok_or_else(|| service_error_to_http(ServiceError::NotFound))?;

    // Read-then-write: two concurrent toggles on the same id can both read
    // the same value and write the same negation, losing one update.
    let updated = gateway
        .set_event_posted(id, !posted)
        .await
        .map_err(|error| service_error_to_http(error.into()))?;

    match updated {
        Some(event) => Ok(ResponseJson(event)),
        None => Err(service_error_to_http(ServiceError::NotFound)),
    }
}

/// Deletes an event by id. Admin only; a zero-row delete still succeeds.
#[axum::debug_handler]
pub async fn delete_event(
    Extension(gateway): Extension<Arc<dyn Gateway>>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<serde_json::Value>, (StatusCode, String)> {
    gateway
        .delete_event(id)
        .await
        .map_err(|error| service_error_to_http(error.into()))?;

    Ok(ResponseJson(serde_json::json!({ "success": true })))
}
