//! Route configuration

/// Endpoint-to-handler mapping
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
