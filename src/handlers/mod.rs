//! HTTP request handlers for the Jotter web server
//!
//! This module contains the HTTP request handlers organized by functionality.

pub mod health;
pub mod notes;
pub mod types;

// Re-export all handler functions to keep route definitions short
pub use health::*;
pub use notes::*;
pub use types::*;
