use std::sync::Arc;

use axum::Router;
use chrono::{Duration, Utc};

use wordcloud::{build_router, AppState, InMemorySessionRepository, SessionModel};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub repository: Arc<InMemorySessionRepository>,
}

pub struct TestSetupBuilder {
    sessions: Vec<SessionModel>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { sessions: vec![] }
    }

    /// Pre-populate a session with the given code and age
    pub fn with_session_aged(mut self, code: &str, age: Duration) -> Self {
        let mut session = SessionModel::new(code.to_string());
        session.created_at = Utc::now() - age;
        self.sessions.push(session);
        self
    }

    pub fn with_session(self, code: &str) -> Self {
        self.with_session_aged(code, Duration::zero())
    }

    pub fn build(self) -> TestSetup {
        let repository = Arc::new(InMemorySessionRepository::with_sessions(self.sessions));
        let app = build_router(AppState::with_repository(repository.clone()));

        TestSetup { app, repository }
    }
}
