use serde::Deserialize;

use crate::models::AppError;

/// Configuration constants for the site
pub struct Config;

impl Config {
    /// Deployment path prefix, set at build time (e.g. `PATH_PREFIX=/blog trunk build`)
    pub const PATH_PREFIX: &'static str = match option_env!("PATH_PREFIX") {
        Some(prefix) => prefix,
        None => "",
    };

    /// Site configuration shipped with the bundle
    pub const SITE_CONFIG_JSON: &'static str = include_str!("site.json");

    pub const DEFAULT_TITLE: &'static str = "Blog";

    pub const FOOTER_ATTRIBUTION_LABEL: &'static str = "GatsbyJS";
    pub const FOOTER_ATTRIBUTION_URL: &'static str = "https://www.gatsbyjs.com";

    /// Build-time prefix in canonical form
    pub fn path_prefix() -> String {
        normalize_prefix(Self::PATH_PREFIX)
    }

    /// Home path for the build-time prefix
    pub fn home_path() -> String {
        format!("{}/", Self::path_prefix())
    }
}

/// Canonical prefix form: empty, or a leading `/` and no trailing `/`.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Site settings the hosting page hands to the frame. The embedded
/// `site.json` leaves `path_prefix` out so the build-time prefix applies.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub path_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: Config::DEFAULT_TITLE.to_string(),
            path_prefix: Config::path_prefix(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the embedded configuration, falling back to defaults.
    pub fn load() -> Self {
        Self::from_json(Config::SITE_CONFIG_JSON).unwrap_or_else(|e| {
            crate::diagnostics::warn(&format!("Invalid site configuration, using defaults: {e}"));
            Self::default()
        })
    }

    /// The prefix is either empty or `/segment[/segment...]` without a trailing slash.
    pub fn validate(&self) -> Result<(), AppError> {
        let prefix = self.path_prefix.as_str();
        if prefix.is_empty() {
            return Ok(());
        }
        if !prefix.starts_with('/') {
            return Err(AppError::ConfigError(format!(
                "path prefix must start with '/': {prefix:?}"
            )));
        }
        if prefix.ends_with('/') {
            return Err(AppError::ConfigError(format!(
                "path prefix must not end with '/': {prefix:?}"
            )));
        }
        Ok(())
    }

    pub fn home_path(&self) -> String {
        format!("{}/", self.path_prefix)
    }
}
