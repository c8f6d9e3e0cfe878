//! Error Types
//!
//! This module defines the API error taxonomy used by all HTTP handlers
//! and its conversion to HTTP responses.
//!
//! # Error Categories
//!
//! - `InvalidInput` - Malformed or missing request fields (400)
//! - `Conflict` - Duplicate identifier at signup (409)
//! - `Unauthorized` - Bad credentials or bad token, deliberately uninformative (401)
//! - `NotFound` - Resource absent or not owned, indistinguishable by design (404)
//! - `UpstreamFailure` - External collaborator error that must surface (502)
//! - `Database` / `Internal` - Server faults, logged and masked (500)

/// Error type definitions
pub mod types;

/// Conversion to HTTP responses
pub mod conversion;

pub use types::ApiError;
