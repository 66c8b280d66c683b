//! # berlinclock-domain
//!
//! Pure domain model for the Berlin Clock (Mengenlehreuhr).
//!
//! ## Responsibilities
//! - Foundational types: validated clock time, error conventions
//! - Define **lamps and rows** (fixed-length on/off sequences, quarter markers)
//! - Define the **lamp configuration** (a complete `Copy` snapshot of the clock)
//! - **Encode** a time into a configuration and **decode** it back
//! - Run the **toggle state machine** used to build a configuration lamp by lamp
//! - Convert configurations to and from their **wire form** (`Y`/`R`/`O` strings)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod configuration;
pub mod decoder;
pub mod encoder;
pub mod lamp;
pub mod toggle;
pub mod wire;
