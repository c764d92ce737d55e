//! In-memory gateway backing the handler tests.

use crate::gateway::models::{Event, EventChanges, NewEventRow, UserRecord};
use crate::gateway::{Gateway, GatewayError};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Default)]
pub struct MemoryGateway {
    users: Mutex<Vec<UserRecord>>,
    events: Mutex<Vec<Event>>,
    next_id: AtomicI64,
}

impl MemoryGateway {
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let gateway = Self::default();
        *gateway.users.lock().unwrap() = users;
        gateway
    }
}

#[async_trait]
impl Gateway for MemoryGateway {
    async fn user_by_email(&self, email: &str) -> Result<Option<UserRecord>, GatewayError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn events_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Event>, GatewayError> {
        let events = self.events.lock().unwrap();
        let mut rows: Vec<Event> = events
            .iter()
            .filter(|event| event.date >= start && event.date <= end)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        Ok(rows)
    }

    async fn insert_event(&self, event: NewEventRow) -> Result<Event, GatewayError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let event = Event {
            id,
            date: event.date,
            time: event.time,
            title: event.title,
            channel: event.channel,
            platform: event.platform,
            notes: event.notes,
            created_by: event.created_by,
            posted: false,
        };
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn update_event(
        &self,
        id: i64,
        changes: EventChanges,
    ) -> Result<Option<Event>, GatewayError> {
        let mut events = self.events.lock().unwrap();
        let Some(event) = events.iter_mut().find(|event| event.id == id) else {
            return Ok(None);
        };

        event.date = changes.date;
        event.time = changes.time;
        event.title = changes.title;
        event.channel = changes.channel;
        event.platform = changes.platform;
        event.notes = changes.notes;
        Ok(Some(event.clone()))
    }

    async fn event_posted(&self, id: i64) -> Result<Option<bool>, GatewayError> {
        let events = self.events.lock().unwrap();
        Ok(events
            .iter()
            .find(|event| event.id == id)
            .map(|event| event.posted))
    }

    async fn set_event_posted(
        &self,
        id: i64,
        posted: bool,
    ) -> Result<Option<Event>, GatewayError> {
        let mut events = self.events.lock().unwrap();
        let Some(event) = events.iter_mut().find(|event| event.id == id) else {
            return Ok(None);
        };

        event.posted = posted;
        Ok(Some(event.clone()))
    }

    async fn delete_event(&self, id: i64) -> Result<(), GatewayError> {
        self.events.lock().unwrap().retain(|event| event.id != id);
        Ok(())
    }
}
