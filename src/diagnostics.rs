//! Browser console tracing. Only active on wasm32; elsewhere the calls compile
//! to nothing so the rendering logic can be exercised natively.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Trace the preference value as it was before a toggle request.
pub fn preference_toggled(is_dark: bool) {
    log(&format!("theme toggle: is_dark was {is_dark}"));
}

pub fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
