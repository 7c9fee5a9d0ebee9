use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::SessionService,
    types::{
        ClearRequest, CreateSessionResponse, ResponsesQuery, ResponsesResponse,
        SessionStatusResponse, SubmitRequest, SuccessResponse,
    },
};
use crate::shared::{AppError, AppState, JsonBody};

fn service(state: &AppState) -> SessionService {
    SessionService::new(
        Arc::clone(&state.session_repository),
        Arc::clone(&state.code_generator),
    )
}

/// HTTP handler for creating a new session
///
/// POST /api/create-session
/// Returns the generated room code
#[instrument(name = "create_session", skip(state))]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let session = service(&state).create_session().await?;

    info!(code = %session.code, "Session created successfully");

    Ok(Json(CreateSessionResponse { code: session.code }))
}

/// HTTP handler for checking whether a session exists
///
/// GET /api/session/:code
/// Always 200; `exists: false` when the code is unknown or expired
#[instrument(name = "session_status", skip(state))]
pub async fn session_status(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<SessionStatusResponse>, AppError> {
    let status = match service(&state).get_session(&code).await? {
        Some(session) => SessionStatusResponse {
            exists: true,
            response_count: Some(session.responses.len()),
            created_at: Some(session.created_at),
        },
        None => SessionStatusResponse {
            exists: false,
            response_count: None,
            created_at: None,
        },
    };

    Ok(Json(status))
}

/// HTTP handler for a student submission
///
/// POST /api/submit
#[instrument(name = "submit_response", skip(state, request))]
pub async fn submit_response(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SubmitRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    service(&state)
        .submit(
            request.session_code.as_deref(),
            request.nickname.as_deref(),
            request.response.as_deref(),
        )
        .await?;

    Ok(Json(SuccessResponse::ok()))
}

/// HTTP handler for the teacher view
///
/// GET /api/responses?session=<code>
/// Returns every response with aggregate counts
#[instrument(name = "list_responses", skip(state))]
pub async fn list_responses(
    State(state): State<AppState>,
    Query(query): Query<ResponsesQuery>,
) -> Result<Json<ResponsesResponse>, AppError> {
    let (session, stats) = service(&state).responses(query.session.as_deref()).await?;

    Ok(Json(ResponsesResponse {
        responses: session.responses,
        total_responses: stats.total_responses,
        unique_words: stats.unique_words,
        active_students: stats.active_students,
        session_code: query.session.unwrap_or_default(),
    }))
}

/// HTTP handler for clearing a session's responses
///
/// POST /api/clear
#[instrument(name = "clear_responses", skip(state))]
pub async fn clear_responses(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ClearRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    service(&state)
        .clear_responses(request.session_code.as_deref())
        .await?;

    Ok(Json(SuccessResponse::ok()))
}
