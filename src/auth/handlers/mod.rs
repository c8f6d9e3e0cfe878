//! HTTP handlers for authentication endpoints

/// Request/response types
pub mod types;

/// Account registration handler
pub mod signup;

/// Password login handler
pub mod login;

/// Google federated login handler
pub mod google_login;

pub use google_login::google_login;
pub use login::login;
pub use signup::signup;
