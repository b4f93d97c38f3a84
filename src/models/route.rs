use yew::AttrValue;

/// Location of the page currently being displayed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteContext {
    pub pathname: AttrValue,
}

impl RouteContext {
    pub fn new(pathname: impl Into<AttrValue>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }

    /// Exact comparison, no trailing-slash or case normalization.
    pub fn is_home(&self, home_path: &str) -> bool {
        self.pathname.as_str() == home_path
    }
}
