//! Infrastructure Services
//!
//! - **config**: validation thresholds, messages and submission behaviour
//! - **errors**: error types for the submission path

pub mod config;
pub mod errors;
