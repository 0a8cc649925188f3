// Library exports for integration tests and reusable components

pub mod config;
pub mod reddit;
pub mod search;
pub mod ui;

pub use config::Config;
pub use search::{SearchController, SearchState};

// Test support (only available with test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
