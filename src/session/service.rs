use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    codes::{CodeGenerator, RoomCode},
    models::{ResponseModel, SessionModel},
    repository::SessionRepository,
    stats::{self, ResponseStats},
};
use crate::shared::AppError;

/// Most words a single response may contain
pub const MAX_WORDS_PER_RESPONSE: usize = 3;

pub const RESPONSE_REQUIRED: &str = "Response is required";
pub const SESSION_CODE_REQUIRED: &str = "Session code is required";
pub const SESSION_NOT_FOUND: &str = "Session not found";
pub const TOO_MANY_WORDS: &str = "Please enter only 1-3 words";

/// Service for session registry and response business logic
pub struct SessionService {
    repository: Arc<dyn SessionRepository + Send + Sync>,
    code_generator: Arc<dyn CodeGenerator>,
}

impl SessionService {
    pub fn new(
        repository: Arc<dyn SessionRepository + Send + Sync>,
        code_generator: Arc<dyn CodeGenerator>,
    ) -> Self {
        Self {
            repository,
            code_generator,
        }
    }

    /// Creates an empty session under a code no live session holds.
    ///
    /// Each candidate is tried at most once, so this fails with
    /// `CodeSpaceExhausted` instead of looping when every code is taken.
    #[instrument(skip(self))]
    pub async fn create_session(&self) -> Result<SessionModel, AppError> {
        if self.repository.session_count().await? >= RoomCode::space_size() {
            warn!("Every room code is in use");
            return Err(AppError::CodeSpaceExhausted);
        }

        for (attempt, candidate) in self.code_generator.candidates().into_iter().enumerate() {
            let session = SessionModel::new(candidate.to_string());
            if self.repository.insert_if_absent(&session).await? {
                info!(code = %session.code, attempts = attempt + 1, "Session created");
                return Ok(session);
            }
            debug!(code = %candidate, "Room code collision, retrying");
        }

        warn!("No free room code among candidates");
        Err(AppError::CodeSpaceExhausted)
    }

    /// Looks up a live session; absence is a normal outcome
    #[instrument(skip(self))]
    pub async fn get_session(&self, code: &str) -> Result<Option<SessionModel>, AppError> {
        self.repository.get_session(code).await
    }

    /// Validates and records a submission, returning the new response count.
    ///
    /// Checks run in a fixed order: empty text, missing code, unknown
    /// session, then word count.
    #[instrument(skip(self, nickname, text))]
    pub async fn submit(
        &self,
        code: Option<&str>,
        nickname: Option<&str>,
        text: Option<&str>,
    ) -> Result<usize, AppError> {
        let text = text.map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(AppError::Validation(RESPONSE_REQUIRED.to_string()));
        }

        let code = require_code(code)?;
        self.require_session(code).await?;

        let words = stats::word_count(text);
        if words > MAX_WORDS_PER_RESPONSE {
            debug!(code = %code, words, "Response has too many words");
            return Err(AppError::Validation(TOO_MANY_WORDS.to_string()));
        }

        let response = ResponseModel::new(nickname, text);
        let count = self
            .repository
            .append_response(code, response)
            .await?
            .ok_or_else(|| AppError::NotFound(SESSION_NOT_FOUND.to_string()))?;

        info!(code = %code, response_count = count, "Response recorded");
        Ok(count)
    }

    /// Returns the session together with statistics recomputed from its responses
    #[instrument(skip(self))]
    pub async fn responses(
        &self,
        code: Option<&str>,
    ) -> Result<(SessionModel, ResponseStats), AppError> {
        let code = require_code(code)?;
        let session = self.require_session(code).await?;
        let stats = stats::aggregate(&session.responses);

        debug!(
            code = %session.code,
            total_responses = stats.total_responses,
            unique_words = stats.unique_words,
            active_students = stats.active_students,
            "Aggregated responses"
        );

        Ok((session, stats))
    }

    /// Empties a session's responses; the session itself survives
    #[instrument(skip(self))]
    pub async fn clear_responses(&self, code: Option<&str>) -> Result<(), AppError> {
        let code = require_code(code)?;
        if !self.repository.clear_responses(code).await? {
            return Err(AppError::NotFound(SESSION_NOT_FOUND.to_string()));
        }

        info!(code = %code, "Responses cleared");
        Ok(())
    }

    async fn require_session(&self, code: &str) -> Result<SessionModel, AppError> {
        self.repository
            .get_session(code)
            .await?
            .ok_or_else(|| AppError::NotFound(SESSION_NOT_FOUND.to_string()))
    }
}

/// A blank code counts as missing
fn require_code(code: Option<&str>) -> Result<&str, AppError> {
    match code.map(str::trim) {
        Some(code) if !code.is_empty() => Ok(code),
        _ => Err(AppError::Validation(SESSION_CODE_REQUIRED.to_string())),
    }
}
