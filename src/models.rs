use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use std::time::SystemTime;

use crate::state::AppState;

pub const SERVICE_NAME: &str = "Creator Portfolio Hub Frontend";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: String,
    pub service: String,
    pub version: String,
    pub environment: String,
    pub uptime: f64,
}

impl HealthReport {
    pub fn collect(state: &AppState) -> anyhow::Result<Self> {
        let uptime = SystemTime::now()
            .duration_since(state.started_at)
            .context("failed to read process uptime")?;

        Ok(HealthReport {
            status: HealthStatus::Ok,
            timestamp: Utc::now().to_rfc3339(),
            service: SERVICE_NAME.to_string(),
            version: state.config.server.version.clone(),
            environment: state.config.server.environment.clone(),
            uptime: uptime.as_secs_f64(),
        })
    }
}
