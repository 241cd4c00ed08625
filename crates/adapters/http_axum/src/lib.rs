//! # rfidgate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the read-only **JSON API** over device records
//!   (`/api/data`, `/api/data/{rfid}`, `/api/showall`) plus the `/` greeting
//!   and the `/api/test` probe
//! - Answer every route with permissive CORS headers and short-circuit
//!   browser preflight (`OPTIONS`) requests
//! - Reject every method other than `GET` with `405 Method Not Allowed`
//!   before any storage access
//! - Map application errors into plain-text HTTP error responses
//!
//! ## Dependency rule
//! Depends on `rfidgate-app` (for port traits and services) and
//! `rfidgate-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod cors;
pub mod error;
pub mod router;
pub mod state;
