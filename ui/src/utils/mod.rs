//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: field predicates used by the form schemas

pub mod console_macros;
pub mod validation;

pub use validation::*;
