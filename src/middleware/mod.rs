//! Middleware for request processing

/// Bearer token authentication middleware
pub mod auth;

pub use auth::{require_auth, AuthUser, AuthenticatedUser};
