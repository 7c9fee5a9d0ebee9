use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use std::sync::Arc;
use thiserror::Error;

use crate::session::codes::{CodeGenerator, RandomCodeGenerator};
use crate::session::repository::SessionRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub session_repository: Arc<dyn SessionRepository + Send + Sync>,
    pub code_generator: Arc<dyn CodeGenerator>,
}

impl AppState {
    pub fn new(
        session_repository: Arc<dyn SessionRepository + Send + Sync>,
        code_generator: Arc<dyn CodeGenerator>,
    ) -> Self {
        Self {
            session_repository,
            code_generator,
        }
    }

    /// State with random room codes
    pub fn with_repository(session_repository: Arc<dyn SessionRepository + Send + Sync>) -> Self {
        Self::new(session_repository, Arc::new(RandomCodeGenerator::new()))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("All room codes are in use")]
    CodeSpaceExhausted,

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::CodeSpaceExhausted => (
                StatusCode::SERVICE_UNAVAILABLE,
                "All room codes are in use, try again later".to_string(),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

pub const INVALID_BODY: &str = "Invalid request body";

/// JSON request body that reports failures as `AppError::Validation`.
///
/// The content type is not checked, and a missing or blank body
/// deserializes as `T::default()`, so absent fields reach the service's own
/// validation instead of an extractor rejection.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!(error = %e, "Failed to read request body");
            AppError::Validation(INVALID_BODY.to_string())
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            debug!(error = %e, "Rejected request body");
            AppError::Validation(INVALID_BODY.to_string())
        })
    }
}
