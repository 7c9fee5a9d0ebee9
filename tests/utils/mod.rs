pub mod actions;
pub mod assertions;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use actions::ApiResponse;
#[allow(unused_imports)]
pub use assertions::ApiAssertion;
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
