// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration.
//!
//! The console is configured at deploy time through a `window.__APP_CONFIG`
//! object injected by the hosting page, so the same wasm bundle works against
//! any backend without a rebuild.

use dockside_types::truthy;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
    #[serde(rename = "healthPollIntervalMs")]
    #[serde(default = "default_health_poll_interval_ms")]
    pub health_poll_interval_ms: u32,
    #[serde(rename = "startupFailureThreshold")]
    #[serde(default = "default_startup_failure_threshold")]
    pub startup_failure_threshold: u32,
    #[serde(rename = "debugLogging")]
    #[serde(default)]
    pub debug_logging: String,
}

fn default_health_poll_interval_ms() -> u32 {
    2000
}

fn default_startup_failure_threshold() -> u32 {
    3
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = gloo_utils::window();
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn api_base_url() -> Result<String, String> {
    app_config().map(|c| c.api_base_url)
}

pub fn health_poll_interval_ms() -> Result<u32, String> {
    app_config().map(|c| c.health_poll_interval_ms)
}

pub fn startup_failure_threshold() -> Result<u32, String> {
    app_config().map(|c| c.startup_failure_threshold)
}

pub fn debug_logging() -> Result<bool, String> {
    app_config().map(|c| truthy(Some(c.debug_logging.as_str())))
}

/// Join an endpoint path onto a configured base URL, tolerating a trailing
/// slash on the base and a leading slash on the path.
pub fn join_endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn health_url() -> Result<String, String> {
    api_base_url().map(|base| join_endpoint(&base, "health"))
}
