/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

/// Shown when `window.__APP_CONFIG` is missing or malformed. Nothing else can
/// render without a backend URL, so this replaces the whole app.
#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="error-container">
            <h2>{"Configuration Error"}</h2>
            <p class="error-message">{ props.message.clone() }</p>
            <p>{"Check the deployment's config.js and reload the page."}</p>
        </div>
    }
}
