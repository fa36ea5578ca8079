//! Sign-up / sign-in form model
//!
//! - **types**: field identifiers, value records, per-form state and the
//!   `AuthAction` reducer driving the toggle and both forms
//! - **schema**: ordered field rules and the two form schemas
//! - **submission**: what happens once a form passes validation

pub mod schema;
pub mod submission;
pub mod types;

pub use schema::{FieldErrors, FormValues, Rule, Schema};
pub use submission::{handle_submission, BrowserSink, Submission, SubmissionSink};
pub use types::*;
