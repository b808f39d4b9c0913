//! Eligibility and match scoring for the career guidance portal.
//!
//! [`matching`] holds the pure engine; the remaining modules carry the
//! configuration, tracing setup, and error types shared with the service.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
