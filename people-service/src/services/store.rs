//! Data-access seam between the HTTP handlers and the backing store.

use async_trait::async_trait;
use service_core::error::AppError;

use crate::models::Person;

/// Result of a whole-document replace keyed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    Replaced,
    NotMatched,
}

/// Persistence operations for person records.
///
/// Every method is a single round trip to the store. Consistency (uniqueness,
/// existence) is whatever the store provides; implementations add none.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Every record in the collection, unfiltered and unpaginated.
    async fn find_all(&self) -> Result<Vec<Person>, AppError>;

    /// The first record whose name matches exactly (case-sensitive).
    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, AppError>;

    /// Insert a record. Duplicate names are accepted.
    async fn insert(&self, person: &Person) -> Result<(), AppError>;

    /// Replace the first record named `name` with `person` in full. The
    /// replacement may carry a different name.
    async fn replace_by_name(
        &self,
        name: &str,
        person: &Person,
    ) -> Result<ReplaceOutcome, AppError>;

    /// Cheap connectivity probe for health endpoints.
    async fn health_check(&self) -> Result<(), AppError>;
}
