//! Build-time UI configuration.
//!
//! The JSON document in the `ADMIN_UI_CONFIG` environment variable at compile
//! time (if any) overrides the defaults of [`UiConfig`]. A malformed document
//! is logged and ignored so a bad build setting never blanks the dashboard.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use engine::config::UiConfig;

/// Configuration baked into this build.
pub fn load() -> UiConfig {
    option_env!("ADMIN_UI_CONFIG").map_or_else(UiConfig::default, parse_or_default)
}

fn parse_or_default(text: &str) -> UiConfig {
    match UiConfig::from_json(text) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("ignoring ADMIN_UI_CONFIG: {err}");
            UiConfig::default()
        }
    }
}
