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

//! Shared types for the dockside platform.
//!
//! Both the backend's health proxy and the web console depend on this crate,
//! so the `/health` wire contract lives here rather than in either side.

use serde::{Deserialize, Serialize};

/// The `status` value a healthy backend reports.
pub const HEALTHY_STATUS: &str = "healthy";

/// Body of the backend's `GET /health` endpoint.
///
/// `proxy` is only present when the request was answered by the health proxy
/// that fronts the backend, not by the backend itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

impl HealthReport {
    /// A healthy report for `service`, answered through the proxy.
    pub fn healthy(service: impl Into<String>) -> Self {
        Self {
            status: HEALTHY_STATUS.to_string(),
            service: service.into(),
            proxy: Some("active".to_string()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY_STATUS
    }
}

pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}
