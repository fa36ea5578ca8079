pub mod toggle_panel;

pub use toggle_panel::*;
