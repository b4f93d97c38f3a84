pub mod app;
pub mod components;
pub mod config;
pub mod diagnostics;
pub mod hooks;
pub mod models;

pub use app::App;
pub use components::{PageFrame, ThemePreferenceToggle};
