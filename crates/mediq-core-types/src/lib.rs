//! Core types shared across MedIQ facilities
//!
//! This crate provides foundational types used by the orchestration,
//! error and logging layers:
//!
//! - **Correlation types**: RequestId attached to every dispatched fetch
//! - **Sensitive data**: Sensitive<T> marker for redacting user input
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RequestId;
pub use sensitive::Sensitive;
