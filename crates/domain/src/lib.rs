//! # rfidgate-domain
//!
//! Pure domain model for the rfidgate device record gateway.
//!
//! ## Responsibilities
//! - Foundational types: store-assigned identifiers, error conventions, timestamps
//! - Define **Device records** (one sensor capture: RFID tag, measurements,
//!   picture links, ingestion time) and their wire JSON shape
//! - Define **RFID identifiers** and the path parsing that yields them
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod record;
pub mod rfid;
