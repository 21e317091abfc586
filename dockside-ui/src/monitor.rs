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

//! Startup phase tracking for the backend health gate.
//!
//! Pure state machine so the threshold logic is testable without a browser.
//! The gate feeds it one poll outcome at a time and renders whatever phase
//! comes back.

use enum_display::EnumDisplay;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumDisplay)]
pub enum BackendPhase {
    /// No successful check yet, failure threshold not reached.
    Starting,
    /// Last check succeeded.
    Online,
    /// The failure threshold was reached without an intervening success.
    Failed,
}

#[derive(Debug)]
pub struct StartupMonitor {
    failure_threshold: u32,
    consecutive_failures: u32,
    phase: BackendPhase,
}

impl StartupMonitor {
    /// `failure_threshold` is the number of consecutive failed checks that
    /// flips the phase to `Failed`. Clamped to at least 1.
    pub fn new(failure_threshold: u32) -> Self {
        Self {
            failure_threshold: failure_threshold.max(1),
            consecutive_failures: 0,
            phase: BackendPhase::Starting,
        }
    }

    pub fn phase(&self) -> BackendPhase {
        self.phase
    }

    /// Record a successful health check. Always lands in `Online`, even from
    /// `Failed` — the backend may recover without a page reload.
    pub fn record_success(&mut self) -> BackendPhase {
        self.consecutive_failures = 0;
        self.phase = BackendPhase::Online;
        self.phase
    }

    /// Record a failed health check. The phase only changes once the
    /// consecutive-failure count reaches the threshold, so a transient blip
    /// while `Online` does not flap the UI.
    pub fn record_failure(&mut self) -> BackendPhase {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        if self.consecutive_failures >= self.failure_threshold {
            self.phase = BackendPhase::Failed;
        }
        self.phase
    }
}
