pub mod page_frame;
pub mod theme_preference_toggle;

pub use page_frame::PageFrame;
pub use theme_preference_toggle::{ThemePreferenceToggle, activation_callback, request_toggle};
