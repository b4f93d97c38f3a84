use yew::prelude::*;

use crate::components::{PageFrame, ThemePreferenceToggle};
use crate::config::SiteConfig;
use crate::hooks::{use_dark_preference, use_route_context};
use crate::models::Theme;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub children: Children,
}

/// Hosting page: owns the dark preference and hands it to the toggle,
/// hands the current location to the frame.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let site = use_memo((), |_| SiteConfig::load());
    let location = use_route_context();
    let preference = use_dark_preference(false);

    {
        let theme = preference.theme();
        use_effect_with(theme, move |theme| {
            apply_theme_to_dom(*theme);
            || ()
        });
    }

    html! {
        <PageFrame
            {location}
            title={site.title.clone()}
            home_path={site.home_path()}
        >
            <ThemePreferenceToggle
                is_dark={preference.is_dark}
                set_dark={preference.set_dark.clone()}
            />
            {props.children.clone()}
        </PageFrame>
    }
}

/// Apply theme to DOM by setting data-theme attribute on <html>
fn apply_theme_to_dom(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = html.set_attribute("data-theme", theme.as_str());
    }
}
