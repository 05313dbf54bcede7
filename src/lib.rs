//! Credit desk library
//!
//! Customer registration and credit bookkeeping over a MySQL store, exposed
//! through an actix-web JSON API.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::Services;
pub use modules::credits;
pub use modules::customers;
