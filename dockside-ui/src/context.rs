// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context shared across the component tree.

use dockside_types::HealthReport;

/// Last successful health report, provided by the backend gate to whatever it
/// renders once the backend is online. `None` until the first success.
pub type BackendHealthCtx = Option<HealthReport>;
