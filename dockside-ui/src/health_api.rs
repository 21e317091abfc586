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

//! Health API client for probing the backend's `/health` endpoint

use crate::constants::health_url;
use dockside_types::HealthReport;

#[derive(Debug, Clone)]
pub enum HealthError {
    NetworkError(String),
    ServerError(u16, String),
    /// The endpoint answered 200 but reported a non-healthy status.
    Unhealthy(String),
}

impl std::fmt::Display for HealthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthError::NetworkError(e) => write!(f, "Network error: {}", e),
            HealthError::ServerError(code, msg) => write!(f, "Server error ({}): {}", code, msg),
            HealthError::Unhealthy(status) => write!(f, "Backend reported status '{}'", status),
        }
    }
}

/// Probe the backend health endpoint once.
pub async fn check_health() -> Result<HealthReport, HealthError> {
    let url = health_url().map_err(HealthError::NetworkError)?;

    let response = reqwest::get(&url)
        .await
        .map_err(|e| HealthError::NetworkError(format!("{e}")))?;

    let status = response.status().as_u16();
    match status {
        200 => {
            let report: HealthReport = response
                .json()
                .await
                .map_err(|e| HealthError::NetworkError(format!("Failed to parse response: {e}")))?;
            if report.is_healthy() {
                log::debug!("Health check ok: service={}", report.service);
                Ok(report)
            } else {
                Err(HealthError::Unhealthy(report.status))
            }
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(HealthError::ServerError(status, text))
        }
    }
}
