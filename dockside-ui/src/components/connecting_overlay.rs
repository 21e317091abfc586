// SPDX-License-Identifier: MIT OR Apache-2.0

//! Spinner overlay shown while the first health checks are in flight.

use yew::prelude::*;

#[function_component(ConnectingOverlay)]
pub fn connecting_overlay() -> Html {
    html! {
        <div class="glass-backdrop connecting-overlay">
            <div class="card-apple" style="width: 320px; text-align: center;">
                <h4>{"Connecting to backend"}</h4>
                <div class="connecting-spinner">
                    <div class="spinner-dot"></div>
                    <div class="spinner-dot"></div>
                    <div class="spinner-dot"></div>
                </div>
            </div>
        </div>
    }
}
