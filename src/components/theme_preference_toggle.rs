use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::diagnostics;
use crate::models::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemePreferenceToggleProps {
    pub is_dark: bool,
    pub set_dark: Callback<bool>,
}

/// Ask the owner of the preference to flip it. The toggle keeps no copy of
/// the value and relies on being re-rendered with the new one.
pub fn request_toggle(is_dark: bool, set_dark: &Callback<bool>) {
    diagnostics::preference_toggled(is_dark);
    set_dark.emit(Theme::from_is_dark(is_dark).toggled().is_dark());
}

/// Handler bound to the switch: each activation requests the flipped value once.
pub fn activation_callback<E: 'static>(is_dark: bool, set_dark: Callback<bool>) -> Callback<E> {
    Callback::from(move |_: E| request_toggle(is_dark, &set_dark))
}

/// Checkbox-styled dark mode switch
#[function_component(ThemePreferenceToggle)]
pub fn theme_preference_toggle(props: &ThemePreferenceToggleProps) -> Html {
    let is_dark = props.is_dark;

    // The box shows `is_dark` until the owner re-renders with a new value,
    // so undo the browser's own check-state flip before requesting one.
    let onclick = activation_callback::<MouseEvent>(is_dark, props.set_dark.clone()).reform(
        move |e: MouseEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                input.set_checked(is_dark);
            }
            e
        },
    );

    html! {
        <div class="switch-box">
            <label class="switch">
                <input type="checkbox" checked={is_dark} {onclick} />
                <span class="slider round">{"🌙"}</span>
            </label>
        </div>
    }
}
