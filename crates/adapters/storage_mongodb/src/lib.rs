//! # rfidgate-adapter-storage-mongodb
//!
//! MongoDB persistence adapter using the official [mongodb](https://docs.rs/mongodb) driver.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `rfidgate-app::ports::storage`
//! - Manage the client lifecycle: connect, liveness ping, shutdown
//! - Map between stored BSON documents and domain types
//!
//! ## Dependency rule
//! Depends on `rfidgate-app` (for port traits) and `rfidgate-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod client;
pub mod document;
pub mod error;
pub mod record_repo;

pub use client::{Config, Store};
pub use document::DeviceDocument;
pub use error::MongoStorageError;
pub use record_repo::MongoDeviceRecordRepository;
