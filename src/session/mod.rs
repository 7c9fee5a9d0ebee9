// Public API - what other modules can use
pub use cleanup_task::{start_cleanup_task, CleanupConfig, CleanupHandle};
pub use handlers::{
    clear_responses, create_session, list_responses, session_status, submit_response,
};

// Internal modules
pub mod cleanup_task;
pub mod codes;
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod stats;
pub mod types;
