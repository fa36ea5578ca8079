pub mod auth_portal;

pub use auth_portal::AuthPortal;
