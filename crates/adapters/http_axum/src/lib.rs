//! # berlinclock-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for encoding, decoding and interactive editing
//!   (`/api/time`, `/api/time/decode`, `/api/decode/toggle`, …)
//! - Stream the encoded current time as **Server-Sent Events**
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `berlinclock-app` (for port traits and services) and
//! `berlinclock-domain` (for types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
