use yew::prelude::*;

use crate::models::Theme;

/// Handle returned by `use_dark_preference` hook
#[derive(Clone, PartialEq)]
pub struct DarkPreferenceHandle {
    pub is_dark: bool,
    pub set_dark: Callback<bool>,
}

impl DarkPreferenceHandle {
    pub const fn theme(&self) -> Theme {
        Theme::from_is_dark(self.is_dark)
    }
}

/// Owns the light/dark boolean for a page. Not persisted across loads.
#[hook]
pub fn use_dark_preference(initial: bool) -> DarkPreferenceHandle {
    let is_dark = use_state(|| initial);

    let set_dark = {
        let is_dark = is_dark.clone();
        Callback::from(move |value: bool| is_dark.set(value))
    };

    DarkPreferenceHandle {
        is_dark: *is_dark,
        set_dark,
    }
}
