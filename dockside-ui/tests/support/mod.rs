// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for dockside-ui component tests.
//
// Provides mount/cleanup helpers and runtime-config injection so that
// individual test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsValue;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

fn set(config: &js_sys::Object, key: &str, val: &JsValue) {
    js_sys::Reflect::set(config, &key.into(), val).unwrap();
}

fn install(config: js_sys::Object) {
    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Inject a `window.__APP_CONFIG` object with all required `RuntimeConfig`
/// fields. The poll interval is huge so that only the gate's immediate check
/// runs during a test. Call this before rendering any component that reads
/// the runtime config (e.g. `AppRoot`, `BackendGate`).
pub fn inject_app_config() {
    let config = js_sys::Object::new();
    set(&config, "apiBaseUrl", &"http://test:8080".into());
    set(&config, "healthPollIntervalMs", &JsValue::from(600_000));
    set(&config, "startupFailureThreshold", &JsValue::from(3));
    set(&config, "debugLogging", &"false".into());
    install(config);
}

/// Inject a config whose backend is unreachable and whose poll/threshold are
/// small, so the gate reaches the `Failed` phase within a test's lifetime.
/// Port 9 (discard) refuses connections immediately.
pub fn inject_unreachable_app_config() {
    let config = js_sys::Object::new();
    set(&config, "apiBaseUrl", &"http://127.0.0.1:9".into());
    set(&config, "healthPollIntervalMs", &JsValue::from(100));
    set(&config, "startupFailureThreshold", &JsValue::from(2));
    install(config);
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
