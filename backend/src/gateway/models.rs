//! Rust structs that represent rows of the remote data service tables.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the data service. Note that these may differ from API-specific
//! request models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row of the users table. Read-only from this service; `password` holds a
/// bcrypt hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub role: String,
    pub active: bool,
}

/// Row of the events table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub title: String,
    pub channel: Option<String>,
    pub platform: Option<String>,
    pub notes: Option<String>,
    pub created_by: i64,
    pub posted: bool,
}

/// Insert payload for the events table. `id` is assigned by the store and
/// `posted` is absent so the store default (false) applies.
#[derive(Debug, Clone, Serialize)]
pub struct NewEventRow {
    pub date: NaiveDate,
    pub time: String,
    pub title: String,
    pub channel: Option<String>,
    pub platform: Option<String>,
    pub notes: Option<String>,
    pub created_by: i64,
}

/// Update payload for an event. `created_by` and `posted` are never touched
/// by an update.
#[derive(Debug, Clone, Serialize)]
pub struct EventChanges {
    pub date: NaiveDate,
    pub time: String,
    pub title: String,
    pub channel: Option<String>,
    pub platform: Option<String>,
    pub notes: Option<String>,
}
