//! This crate contains all shared UI components for the auth portal.

pub mod app;
pub use app::AuthPortal;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
