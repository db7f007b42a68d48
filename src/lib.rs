//! Medicaid asset-protection planning: estimation engine plus the thin
//! service and CLI surface that exposes it.

pub mod config;
pub mod error;
pub mod planning;
pub mod telemetry;
