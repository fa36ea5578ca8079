pub mod sign_in_form;
pub mod sign_up_form;

pub use sign_in_form::*;
pub use sign_up_form::*;
