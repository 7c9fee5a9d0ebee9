use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Nickname recorded when a student leaves the field blank
pub const ANONYMOUS_NICKNAME: &str = "Anonymous";

/// A single student submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseModel {
    pub nickname: String,
    #[serde(rename = "response")]
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseModel {
    /// Creates a response stamped with the current time.
    /// Expects `text` to be validated already. A blank `nickname` becomes
    /// [`ANONYMOUS_NICKNAME`]; any other nickname is kept exactly as given.
    pub fn new(nickname: Option<&str>, text: &str) -> Self {
        let nickname = match nickname {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => ANONYMOUS_NICKNAME.to_string(),
        };

        Self {
            nickname,
            text: text.trim().to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// In-memory record for a classroom session
#[derive(Debug, Clone)]
pub struct SessionModel {
    pub code: String, // Uppercase COLOR-ANIMAL
    pub created_at: DateTime<Utc>,
    pub responses: Vec<ResponseModel>, // Submission order
}

impl SessionModel {
    /// Creates an empty session stamped with the current time
    pub fn new(code: String) -> Self {
        Self {
            code,
            created_at: Utc::now(),
            responses: Vec::new(),
        }
    }

    /// Age of the session relative to `now`
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.created_at
    }

    /// True once the session is strictly older than `ttl`
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        self.age(now) > ttl
    }
}
