//! Shared types for the partner portal core
//!
//! Common types used across the workspace: the domain model (service
//! lines, catalog entries, acts, receipts), the unified error system,
//! and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
