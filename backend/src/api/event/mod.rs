//! Module for event management API endpoints.
//!
//! This module handles CRUD operations over the marketing events calendar.

pub mod handlers;
pub mod models;
pub mod routes;
