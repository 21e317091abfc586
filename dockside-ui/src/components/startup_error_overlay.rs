/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Full-screen overlay shown when the backend service fails to start.
//!
//! Renders a centered card with troubleshooting instructions (check the
//! container logs, rebuild) and a "Retry Connection" button that reloads the
//! page. Everything on the card is static text; the backend gate decides when
//! to mount and unmount this overlay.

use yew::prelude::*;

const RECOVERY_COMMANDS: &str = "\
# Rebuild and restart the backend
docker compose down && docker compose up --build -d

# Or, if you run the full profile
docker compose --profile full up --build -d";

#[derive(Properties, Debug, PartialEq)]
pub struct StartupErrorOverlayProps {
    /// Invoked instead of the page reload when the user clicks
    /// "Retry Connection". Tests substitute a mock here; production mounts
    /// the overlay with no props and gets the real reload.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// A glass-backdrop overlay that tells the user the backend did not come up
/// and offers a button to retry by reloading the page.
#[function_component(StartupErrorOverlay)]
pub fn startup_error_overlay(props: &StartupErrorOverlayProps) -> Html {
    let on_retry = props.on_retry.clone();
    let on_retry_click = Callback::from(move |_: MouseEvent| match &on_retry {
        Some(cb) => cb.emit(()),
        None => {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    });

    html! {
        <div class="glass-backdrop startup-error-overlay" style="z-index: 9999;">
            <div class="card-apple startup-error-card" style="width: 560px; text-align: left;">
                <svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"
                     viewBox="0 0 24 24" fill="none" stroke="#ff6b6b"
                     stroke-width="2" style="margin: 0 auto 1rem; display: block;">
                    <path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"></path>
                    <line x1="12" y1="9" x2="12" y2="13"></line>
                    <line x1="12" y1="17" x2="12.01" y2="17"></line>
                </svg>
                <h2 class="startup-error-title" style="margin-top: 0; text-align: center;">
                    {"Backend Service Startup Failure"}
                </h2>
                <p class="startup-error-message">
                    {"The backend service did not come up. This usually means the \
                      server container crashed while starting. The container logs \
                      say why."}
                </p>
                <div class="startup-error-steps">
                    <h4>{"Check the container logs:"}</h4>
                    <ol>
                        <li>{"Open Docker Desktop"}</li>
                        <li>{"Find the dockside-server container"}</li>
                        <li>{"Select it to view its logs"}</li>
                        <li>{"Look for error messages near the end of the log"}</li>
                    </ol>
                </div>
                <div class="startup-error-issues">
                    <h4>{"Common issues:"}</h4>
                    <ul>
                        <li>{"Missing or invalid credentials in your .env file"}</li>
                        <li>{"Another application is already using the backend port"}</li>
                    </ul>
                </div>
                <pre class="startup-error-commands"><code>{ RECOVERY_COMMANDS }</code></pre>
                <div style="text-align: center;">
                    <button
                        class="btn-apple btn-primary startup-error-retry-btn"
                        onclick={on_retry_click}>
                        {"Retry Connection"}
                    </button>
                </div>
            </div>
        </div>
    }
}
