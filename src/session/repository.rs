use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, error, instrument, warn};

use super::codes::normalize_code;
use super::models::{ResponseModel, SessionModel};
use crate::shared::AppError;

/// Trait for the session registry.
///
/// Codes are matched case-insensitively; implementations normalize every
/// code they are handed before storing or looking it up. Absence is reported
/// as `None`/`false`, never as an error.
#[async_trait]
pub trait SessionRepository {
    /// Inserts the session unless its code is already live. Returns whether it was inserted.
    async fn insert_if_absent(&self, session: &SessionModel) -> Result<bool, AppError>;
    async fn get_session(&self, code: &str) -> Result<Option<SessionModel>, AppError>;
    /// Appends a response, returning the new response count
    async fn append_response(
        &self,
        code: &str,
        response: ResponseModel,
    ) -> Result<Option<usize>, AppError>;
    /// Empties the response list, keeping the session itself
    async fn clear_responses(&self, code: &str) -> Result<bool, AppError>;
    async fn session_count(&self) -> Result<usize, AppError>;
    /// Removes every session older than `ttl` at `now`, returning how many went
    async fn expire_sessions(&self, ttl: Duration, now: DateTime<Utc>) -> Result<u64, AppError>;
}

/// In-memory implementation of SessionRepository
///
/// Data lives only as long as the process. A single mutex guards the map,
/// so insertion, append, clear and the expiry sweep never interleave.
pub struct InMemorySessionRepository {
    sessions: Mutex<HashMap<String, SessionModel>>,
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated sessions
    pub fn with_sessions(sessions: Vec<SessionModel>) -> Self {
        let session_map = sessions
            .into_iter()
            .map(|session| (normalize_code(&session.code), session))
            .collect();

        Self {
            sessions: Mutex::new(session_map),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, SessionModel>>, AppError> {
        self.sessions.lock().map_err(|_| {
            error!("Session registry lock poisoned");
            AppError::Internal
        })
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    #[instrument(skip(self, session), fields(code = %session.code))]
    async fn insert_if_absent(&self, session: &SessionModel) -> Result<bool, AppError> {
        let key = normalize_code(&session.code);
        let mut sessions = self.lock()?;

        if sessions.contains_key(&key) {
            debug!(code = %key, "Code already live");
            return Ok(false);
        }

        let mut stored = session.clone();
        stored.code = key.clone();
        sessions.insert(key, stored);

        debug!("Session stored in memory");
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn get_session(&self, code: &str) -> Result<Option<SessionModel>, AppError> {
        let key = normalize_code(code);
        let session = self.lock()?.get(&key).cloned();

        match &session {
            Some(s) => debug!(code = %key, responses = s.responses.len(), "Session found"),
            None => debug!(code = %key, "Session not found"),
        }

        Ok(session)
    }

    #[instrument(skip(self, response))]
    async fn append_response(
        &self,
        code: &str,
        response: ResponseModel,
    ) -> Result<Option<usize>, AppError> {
        let key = normalize_code(code);
        let mut sessions = self.lock()?;

        let Some(session) = sessions.get_mut(&key) else {
            warn!(code = %key, "Session not found for response append");
            return Ok(None);
        };

        session.responses.push(response);
        Ok(Some(session.responses.len()))
    }

    #[instrument(skip(self))]
    async fn clear_responses(&self, code: &str) -> Result<bool, AppError> {
        let key = normalize_code(code);
        let mut sessions = self.lock()?;

        match sessions.get_mut(&key) {
            Some(session) => {
                debug!(code = %key, cleared = session.responses.len(), "Clearing responses");
                session.responses.clear();
                Ok(true)
            }
            None => {
                warn!(code = %key, "Session not found for clear");
                Ok(false)
            }
        }
    }

    async fn session_count(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.len())
    }

    #[instrument(skip(self))]
    async fn expire_sessions(&self, ttl: Duration, now: DateTime<Utc>) -> Result<u64, AppError> {
        let mut sessions = self.lock()?;
        let initial_count = sessions.len();

        sessions.retain(|_, session| !session.is_expired(ttl, now));

        let removed_count = initial_count - sessions.len();
        debug!(
            expired_sessions_removed = removed_count,
            "Expired sessions cleaned up from memory"
        );
        Ok(removed_count as u64)
    }
}
