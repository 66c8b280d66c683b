//! # berlinclock-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TimeSource`: where "now" comes from
//!   - `PreferenceStore`: durable key-value storage between sessions
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ClockService`: encode the current time (`convert` and `decode_record`
//!     handle a given time or record)
//!   - `DecodeSessionService`: toggle lamps of a persisted configuration
//!   - `ConvertSelectionService`: remember the time picked for conversion
//! - Provide **in-process infrastructure** that doesn't need IO (system clock)
//!
//! ## Dependency rule
//! Depends on `berlinclock-domain` only (plus `tokio::sync` for the session lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod clock;
pub mod ports;
pub mod services;
