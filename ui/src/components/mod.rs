//! User Interface Components
//!
//! Dioxus components for the auth portal:
//!
//! - **forms**: the sign-up and sign-in forms
//! - **display**: the sliding toggle overlay
//! - **inputs**: named inputs and their error line

pub mod display;
pub mod forms;
pub mod inputs;
