//! HTTP front end for the `jyotish` calculations.

pub mod error;
pub mod server;
pub mod store;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use server::{create_router, AppState};
pub use store::{RecordStore, StoredRecord};
