// Test Helper Modules for Real Endpoint Testing
//
// Shared by the test targets under tests/ via #[path]:
//
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;
//
// HTTP tests run a real actix-test server over in-memory repositories.
// Repository tests that need MySQL read TEST_DATABASE_URL and are #[ignore]d.

#![allow(dead_code)]

pub mod assertions;

// Re-export commonly used types and functions
pub use assertions::*;
pub use test_data::*;
pub use test_database::*;
pub use test_server::*;
