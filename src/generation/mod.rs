//! Generation Module
//!
//! External text-generation collaborator: the outbound client and the
//! public `/generate` endpoint.

/// Outbound generation API client
pub mod client;

/// HTTP handler for the generation endpoint
pub mod handlers;

pub use client::GenerationClient;
pub use handlers::{generate, GenerateRequest, GenerateResponse};
