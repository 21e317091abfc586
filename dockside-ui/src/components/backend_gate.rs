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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Backend health gate - decides what the user sees based on backend health.
//!
//! Polls `GET /health` on an interval and renders one of three things:
//! a connecting spinner while the backend is still starting, its children
//! once the backend is online, or the startup-error overlay after the
//! failure threshold is reached. Polling continues in every phase, so a
//! backend that recovers on its own dismisses the overlay without a reload.

use crate::components::connecting_overlay::ConnectingOverlay;
use crate::components::startup_error_overlay::StartupErrorOverlay;
use crate::constants::{health_poll_interval_ms, startup_failure_threshold};
use crate::context::BackendHealthCtx;
use crate::health_api::{check_health, HealthError};
use crate::monitor::{BackendPhase, StartupMonitor};
use dockside_types::HealthReport;
use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BackendGateProps {
    #[prop_or_default]
    pub children: Children,
}

pub enum BackendGateMsg {
    CheckHealth,
    HealthOk(HealthReport),
    HealthFailed(HealthError),
}

pub struct BackendGate {
    monitor: StartupMonitor,
    last_report: Option<HealthReport>,
    _poll_interval: Option<Interval>,
}

impl Component for BackendGate {
    type Message = BackendGateMsg;
    type Properties = BackendGateProps;

    fn create(ctx: &Context<Self>) -> Self {
        let poll_ms = health_poll_interval_ms().unwrap_or(2000);
        let threshold = startup_failure_threshold().unwrap_or(3);

        // Start polling for backend health
        let link = ctx.link().clone();
        let interval = Interval::new(poll_ms, move || {
            link.send_message(BackendGateMsg::CheckHealth);
        });

        // Check immediately
        ctx.link().send_message(BackendGateMsg::CheckHealth);

        Self {
            monitor: StartupMonitor::new(threshold),
            last_report: None,
            _poll_interval: Some(interval),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BackendGateMsg::CheckHealth => {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match check_health().await {
                        Ok(report) => link.send_message(BackendGateMsg::HealthOk(report)),
                        Err(e) => link.send_message(BackendGateMsg::HealthFailed(e)),
                    }
                });
                false
            }
            BackendGateMsg::HealthOk(report) => {
                let before = self.monitor.phase();
                let after = self.monitor.record_success();
                if before != after {
                    log::info!("Backend phase: {before} -> {after}");
                }
                self.last_report = Some(report);
                true
            }
            BackendGateMsg::HealthFailed(error) => {
                log::warn!("Health check failed: {error}");
                let before = self.monitor.phase();
                let after = self.monitor.record_failure();
                if before != after {
                    log::error!("Backend phase: {before} -> {after}");
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.monitor.phase() {
            BackendPhase::Starting => html! { <ConnectingOverlay /> },
            BackendPhase::Online => html! {
                <ContextProvider<BackendHealthCtx> context={self.last_report.clone()}>
                    { for ctx.props().children.iter() }
                </ContextProvider<BackendHealthCtx>>
            },
            BackendPhase::Failed => html! { <StartupErrorOverlay /> },
        }
    }
}
