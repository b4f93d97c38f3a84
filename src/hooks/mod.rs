pub mod use_dark_preference;
pub mod use_route_context;

pub use use_dark_preference::{DarkPreferenceHandle, use_dark_preference};
pub use use_route_context::use_route_context;
