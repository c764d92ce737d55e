//! Client layer for the remote managed data service.
//!
//! All persistent state lives behind this module: users and events are rows
//! in two tables of an external relational service with a REST interface.
//! The [`Gateway`] trait scopes that surface down to the operations the
//! routes actually perform; the production implementation is a thin HTTP
//! client, and tests swap in an in-memory one.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

pub mod models;
pub mod rest;

#[cfg(test)]
pub mod memory;

pub use rest::RestGateway;

use models::{Event, EventChanges, NewEventRow, UserRecord};

/// Table holding user accounts.
pub const USERS_TABLE: &str = "marketing_users";
/// Table holding calendar events.
pub const EVENTS_TABLE: &str = "marketing_events";

/// Errors surfaced by the data service client.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never completed or the reply body did not decode.
    #[error("request to data service failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The data service answered with a non-success status.
    #[error("data service answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    /// A write asked for its row back and got none.
    #[error("data service returned no rows where one was expected")]
    EmptyReply,
}

/// Access to the remote data service.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Looks up at most one user row by email.
    async fn user_by_email(&self, email: &str) -> Result<Option<UserRecord>, GatewayError>;

    /// Events with `date` in the inclusive range, ordered by date then time.
    async fn events_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Event>, GatewayError>;

    /// Inserts an event and returns the stored row. `posted` comes from the
    /// store default.
    async fn insert_event(&self, event: NewEventRow) -> Result<Event, GatewayError>;

    /// Updates the editable fields of an event. `None` when no row matches.
    async fn update_event(
        &self,
        id: i64,
        changes: EventChanges,
    ) -> Result<Option<Event>, GatewayError>;

    /// Current `posted` flag of an event. `None` when no row matches.
    async fn event_posted(&self, id: i64) -> Result<Option<bool>, GatewayError>;

    /// Writes the `posted` flag and returns the updated row.
    async fn set_event_posted(
        &self,
        id: i64,
        posted: bool,
    ) -> Result<Option<Event>, GatewayError>;

    /// Deletes an event by id. A zero-row delete is not an error at the data
    /// service.
    async fn delete_event(&self, id: i64) -> Result<(), GatewayError>;
}
