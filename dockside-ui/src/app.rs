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

//! App root: config check, router, and the backend gate around every page.

use crate::components::backend_gate::BackendGate;
use crate::components::config_error::ConfigError;
use crate::constants::app_config;
use crate::pages::home::Home;
use crate::routing::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <BackendGate>
                <Home />
            </BackendGate>
        },
        Route::NotFound => html! { <h1>{ "404" }</h1> },
    }
}

#[function_component(AppRoot)]
pub fn app_root() -> Html {
    // Nothing can render without a backend URL, so config errors short-circuit
    // the whole tree.
    if let Err(e) = app_config() {
        log::error!("Invalid runtime configuration: {e}");
        return html! { <ConfigError message={e} /> };
    }

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
