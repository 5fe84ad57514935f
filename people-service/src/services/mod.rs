pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::MongoPersonStore;
pub use memory::InMemoryPersonStore;
pub use metrics::{get_metrics, init_metrics, record_store_error};
pub use store::{PersonStore, ReplaceOutcome};
