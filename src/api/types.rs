//! API response types.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Name of the initialized backend app.
    pub app: String,
    pub project_id: String,
    pub analytics: AnalyticsStatus,
    pub routes: usize,
    pub timestamp: String,
}

/// Analytics handle state.
#[derive(Debug, Serialize)]
pub struct AnalyticsStatus {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}
