use serde::{Deserialize, Serialize};
use crate::models::domain::ResultPair;

/// Response for the route optimization endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeRoutesResponse {
    pub pairs: Vec<ResultPair>,
    #[serde(rename = "maxTotal")]
    pub max_total: Option<i64>,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

/// Response for the h-index endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HIndexResponse {
    #[serde(rename = "hIndex")]
    pub h_index: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: 400,
        }
    }
}
