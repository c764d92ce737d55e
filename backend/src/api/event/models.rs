//! Request payloads for the event API.

use crate::errors::{ServiceError, ServiceResult};
use chrono::NaiveDate;
use serde::Deserialize;

/// Create/update payload. Fields are optional so missing ones surface as a
/// 400 instead of a body-level deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct EventPayload {
    pub date: Option<String>,
    pub time: Option<String>,
    pub title: Option<String>,
    pub channel: Option<String>,
    pub platform: Option<String>,
    pub notes: Option<String>,
}

/// Validated form of [`EventPayload`].
#[derive(Debug)]
pub struct EventFields {
    pub date: NaiveDate,
    pub time: String,
    pub title: String,
    pub channel: Option<String>,
    pub platform: Option<String>,
    pub notes: Option<String>,
}

impl EventPayload {
    /// Checks required fields and normalizes blank optionals to null.
    pub fn into_fields(self) -> ServiceResult<EventFields> {
        let date = non_blank(self.date);
        let time = non_blank(self.time);
        let title = non_blank(self.title);

        let (Some(date), Some(time), Some(title)) = (date, time, title) else {
            return Err(ServiceError::validation(
                "date, time y title son obligatorios",
            ));
        };

        let date = date
            .trim()
            .parse::<NaiveDate>()
            .map_err(|_| ServiceError::validation("Fecha inválida"))?;

        Ok(EventFields {
            date,
            time,
            title,
            channel: non_blank(self.channel),
            platform: non_blank(self.platform),
            notes: non_blank(self.notes),
        })
    }
}

/// Date range query for the event listing.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl RangeQuery {
    /// Both bounds are required; the range is inclusive.
    pub fn resolve(self) -> ServiceResult<(NaiveDate, NaiveDate)> {
        let (Some(start), Some(end)) = (non_blank(self.start), non_blank(self.end)) else {
            return Err(ServiceError::validation("start y end requeridos"));
        };

        let start = start
            .trim()
            .parse::<NaiveDate>()
            .map_err(|_| ServiceError::validation("Rango de fechas inválido"))?;
        let end = end
            .trim()
            .parse::<NaiveDate>()
            .map_err(|_| ServiceError::validation("Rango de fechas inválido"))?;

        Ok((start, end))
    }
}

/// Treats absent and blank strings the same way: as null.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
