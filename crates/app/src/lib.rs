//! # rfidgate-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRecordRepository`: read-only queries over the device collection
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceRecordService`: latest, list, lookup by RFID, each under its
//!     own deadline
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `rfidgate-domain` only (plus `tokio::time` for deadlines).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
