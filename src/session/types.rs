use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::ResponseModel;

/// Response for POST /api/create-session
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateSessionResponse {
    pub code: String,
}

/// Response for GET /api/session/:code. Only `exists` is present on a miss.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request payload for POST /api/submit
///
/// Every field is optional at the wire level so that missing values are
/// reported with the validation messages rather than a deserialization error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub nickname: Option<String>,
    pub response: Option<String>,
    pub session_code: Option<String>,
}

/// Request payload for POST /api/clear
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearRequest {
    pub session_code: Option<String>,
}

/// Query string for GET /api/responses
#[derive(Debug, Default, Deserialize)]
pub struct ResponsesQuery {
    pub session: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Response for GET /api/responses
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponsesResponse {
    pub responses: Vec<ResponseModel>,
    pub total_responses: usize,
    pub unique_words: usize,
    pub active_students: usize,
    /// Echoes the code as the caller supplied it
    pub session_code: String,
}
