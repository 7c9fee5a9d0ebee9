//! Test assertion helpers - fluent API for verifying test expectations
#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::http::StatusCode;

use super::actions::ApiResponse;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct ApiAssertion<'a> {
    response: &'a ApiResponse,
}

impl<'a> ApiAssertion<'a> {
    pub fn of(response: &'a ApiResponse) -> Self {
        Self { response }
    }

    pub fn is_ok(self) -> Self {
        assert_eq!(
            self.response.status,
            StatusCode::OK,
            "unexpected body: {}",
            self.response.body
        );
        self
    }

    pub fn is_success(self) -> Self {
        let this = self.is_ok();
        assert_eq!(this.response.body["success"], true);
        this
    }

    /// Asserts an error status with the given message
    pub fn is_error(self, status: StatusCode, message: &str) -> Self {
        assert_eq!(self.response.status, status);
        assert_eq!(self.response.body["error"], message);
        self
    }

    /// Asserts the aggregate counts of a /api/responses body
    pub fn has_stats(self, total: u64, unique_words: u64, active_students: u64) -> Self {
        let body = &self.response.body;
        assert_eq!(body["totalResponses"], total, "totalResponses");
        assert_eq!(body["uniqueWords"], unique_words, "uniqueWords");
        assert_eq!(body["activeStudents"], active_students, "activeStudents");
        self
    }
}
