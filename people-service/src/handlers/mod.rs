//! HTTP handlers for people-service.

pub mod body;
pub mod health;
pub mod people;

pub use body::{JsonBody, NamePath};
pub use health::{health_check, metrics_endpoint, readiness_check};
