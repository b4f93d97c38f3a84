use yew::prelude::*;

use crate::config::Config;
use crate::models::RouteContext;

fn default_home_path() -> AttrValue {
    AttrValue::from(Config::home_path())
}

#[derive(Properties, PartialEq)]
pub struct PageFrameProps {
    pub location: RouteContext,

    /// Site title. The home header is currently empty, so this is not rendered.
    #[prop_or_default]
    pub title: AttrValue,

    /// Path the location is compared against to select the header
    #[prop_or_else(default_home_path)]
    pub home_path: AttrValue,

    #[prop_or_default]
    pub children: Children,
}

/// Page layout: route-dependent header, the page content, and a static footer
#[function_component(PageFrame)]
pub fn page_frame(props: &PageFrameProps) -> Html {
    let is_home = props.location.is_home(&props.home_path);

    let header = if is_home {
        html! {}
    } else {
        html! {
            <a class="header-link-home" href={props.home_path.clone()}>{"← Home"}</a>
        }
    };

    html! {
        <div class="global-wrapper" data-is-root-path={is_home.to_string()}>
            <header class="global-header">{header}</header>
            <main>{props.children.clone()}</main>
            <footer>
                {"Thanks to"}
                {" "}
                <a href={Config::FOOTER_ATTRIBUTION_URL}>{Config::FOOTER_ATTRIBUTION_LABEL}</a>
            </footer>
        </div>
    }
}
