//! UI configuration shared by every renderer.
//!
//! Every field has a default, so an empty JSON object (or no document at all)
//! yields a working configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::debounce::DebouncePolicy;
use crate::error::ConfigError;
use crate::selector::FetchErrorPolicy;
use crate::table::LIMIT_OPTIONS;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Prefix of every REST call, e.g. `/api` or `https://admin.example.com/api`.
    pub api_base: String,
    /// Settle delay for search and selector input; `0` disables debouncing.
    pub search_debounce_ms: u64,
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
    /// Show selector fetch errors instead of silently emptying the options.
    pub surface_fetch_errors: bool,
    pub notification_hide_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".into(),
            search_debounce_ms: 300,
            default_page_size: 10,
            page_size_options: LIMIT_OPTIONS.to_vec(),
            surface_fetch_errors: false,
            notification_hide_ms: 3000,
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON, [`ConfigError::Invalid`] when
    /// [`UiConfig::validate`] fails.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::Invalid("page_size_options must not be empty".into()));
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::Invalid("page sizes must be positive".into()));
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(ConfigError::Invalid(format!(
                "default_page_size {} is not one of {:?}",
                self.default_page_size, self.page_size_options
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn debounce_policy(&self) -> DebouncePolicy {
        DebouncePolicy::from_millis(self.search_debounce_ms)
    }

    #[must_use]
    pub fn fetch_error_policy(&self) -> FetchErrorPolicy {
        if self.surface_fetch_errors { FetchErrorPolicy::Surface } else { FetchErrorPolicy::Silent }
    }

    /// `api_base` joined with a resource path, without doubled slashes.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
