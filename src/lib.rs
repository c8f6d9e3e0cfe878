//! Penscribe - Main Library
//!
//! Penscribe is a writing backend service: password and Google sign-in,
//! short-lived bearer session tokens, per-owner story storage, and an
//! external text-generation endpoint.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, assembly
//! - **`routes`** - Router and endpoint configuration
//! - **`auth`** - Accounts, passwords, session tokens, Google login
//! - **`middleware`** - Bearer token authentication
//! - **`stories`** - Owner-scoped story storage and CRUD handlers
//! - **`generation`** - External text-generation collaborator
//! - **`notify`** - Best-effort welcome notifications
//! - **`error`** - API error taxonomy and HTTP conversion
//!
//! # Security Model
//!
//! - Passwords are bcrypt-hashed; verification never reveals why it
//!   failed
//! - Session tokens are stateless HS256 JWTs with a 30-minute TTL;
//!   verification failures are uniform
//! - Google assertions are verified against Google's published keys
//!   (audience and issuer pinned)
//! - Every story operation is scoped to the authenticated owner inside
//!   the storage query itself

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and account management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Story storage and handlers
pub mod stories;

/// Text generation collaborator
pub mod generation;

/// Welcome notification capability
pub mod notify;

/// API error types
pub mod error;

pub use error::ApiError;
pub use server::{create_app, AppConfig, AppState};
