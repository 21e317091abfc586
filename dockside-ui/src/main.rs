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

use dockside_ui::app::AppRoot;
use dockside_ui::constants::debug_logging;

fn main() {
    // The deploy-time config can force debug logging; dev builds default to it.
    let debug = debug_logging().unwrap_or(cfg!(feature = "debugAssertions"));
    let level = if debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    yew::Renderer::<AppRoot>::new().render();
}
