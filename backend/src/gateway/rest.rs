//! REST implementation of the data service gateway.
//!
//! The managed service exposes its tables over a PostgREST-style interface:
//! filters travel as query parameters (`column=op.value`), writes return
//! their rows when asked to with a `Prefer` header, and the service key is
//! attached to every request.

use crate::config::Config;
use crate::gateway::models::{Event, EventChanges, NewEventRow, UserRecord};
use crate::gateway::{EVENTS_TABLE, Gateway, GatewayError, USERS_TABLE};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Writes ask for their rows back with this header.
const PREFER: (&str, &str) = ("Prefer", "return=representation");

/// Thin client for the managed data service.
pub struct RestGateway {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestGateway {
    /// Creates a client from the configured endpoint and service key.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.data_api_url.clone(),
            api_key: config.data_api_key.clone(),
        }
    }

    fn request(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Decodes a row-set reply, folding non-success statuses into
    /// [`GatewayError::Status`] with the service's own message.
    async fn rows<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Vec<T>, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Gateway for RestGateway {
    async fn user_by_email(&self, email: &str) -> Result<Option<UserRecord>, GatewayError> {
        let response = self
            .request(Method::GET, USERS_TABLE)
            .query(&[
                ("select", "*".to_string()),
                ("email", format!("eq.{email}")),
                ("limit", "1".to_string()),
            ])
            .send()
            .await?;

        let mut rows: Vec<UserRecord> = Self::rows(response).await?;
        Ok(rows.pop())
    }

    async fn events_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Event>, GatewayError> {
        let response = self
            .request(Method::GET, EVENTS_TABLE)
            .query(&[
                ("select", "*".to_string()),
                ("date", format!("gte.{start}")),
                ("date", format!("lte.{end}")),
                ("order", "date.asc,time.asc".to_string()),
            ])
            .send()
            .await?;

        Self::rows(response).await
    }

    async fn insert_event(&self, event: NewEventRow) -> Result<Event, GatewayError> {
        let response = self
            .request(Method::POST, EVENTS_TABLE)
            .header(PREFER.0, PREFER.1)
            .json(&event)
            .send()
            .await?;

        let mut rows: Vec<Event> = Self::rows(response).await?;
        rows.pop().ok_or(GatewayError::EmptyReply)
    }

    async fn update_event(
        &self,
        id: i64,
        changes: EventChanges,
    ) -> Result<Option<Event>, GatewayError> {
        let response = self
            .request(Method::PATCH, EVENTS_TABLE)
            .query(&[("id", format!("eq.{id}"))])
            .header(PREFER.0, PREFER.1)
            .json(&changes)
            .send()
            .await?;

        let mut rows: Vec<Event> = Self::rows(response).await?;
        Ok(rows.pop())
    }

    async fn event_posted(&self, id: i64) -> Result<Option<bool>, GatewayError> {
        #[derive(Deserialize)]
        struct PostedRow {
            posted: bool,
        }

        let response = self
            .request(Method::GET, EVENTS_TABLE)
            .query(&[
                ("select", "id,posted".to_string()),
                ("id", format!("eq.{id}")),
                ("limit", "1".to_string()),
            ])
            .send()
            .await?;

        let mut rows: Vec<PostedRow> = Self::rows(response).await?;
        Ok(rows.pop().map(|row| row.posted))
    }

    async fn set_event_posted(
        &self,
        id: i64,
        posted: bool,
    ) -> Result<Option<Event>, GatewayError> {
        let response = self
            .request(Method::PATCH, EVENTS_TABLE)
            .query(&[("id", format!("eq.{id}"))])
            .header(PREFER.0, PREFER.1)
            .json(&serde_json::json!({ "posted": posted }))
            .send()
            .await?;

        let mut rows: Vec<Event> = Self::rows(response).await?;
        Ok(rows.pop())
    }

    async fn delete_event(&self, id: i64) -> Result<(), GatewayError> {
        let response = self
            .request(Method::DELETE, EVENTS_TABLE)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }

        Ok(())
    }
}
