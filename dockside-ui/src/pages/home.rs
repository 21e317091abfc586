/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

//! Landing page, rendered once the backend gate reports the backend online.

use crate::context::BackendHealthCtx;
use yew::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let report = use_context::<BackendHealthCtx>().flatten();
    let service = report
        .map(|r| r.service)
        .unwrap_or_else(|| "backend".to_string());

    html! {
        <div class="home-page">
            <div>
                <h1>{ "Dockside" }</h1>
                <p>{ "Your self-hosted services, in one place." }</p>
            </div>
            <div class="status-card card-apple">
                <span class="status-dot status-dot-online"></span>
                <p class="status-text">{ format!("{service} is online") }</p>
            </div>
        </div>
    }
}
