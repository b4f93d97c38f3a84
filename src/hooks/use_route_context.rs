use yew::prelude::*;

use crate::models::RouteContext;

/// Current browser pathname, read once per mount. Each page of a static
/// site is a full load, so there is nothing to subscribe to.
#[hook]
pub fn use_route_context() -> RouteContext {
    let route = use_state(current_route);
    (*route).clone()
}

fn current_route() -> RouteContext {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(RouteContext::new)
        .unwrap_or_default()
}
