//! Authentication Module
//!
//! This module handles account registration, password and Google login,
//! and session token management.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - Identity model and database operations
//! - **`password`** - Password hashing and verification
//! - **`sessions`** - Session token issuance and verification
//! - **`google`** - Google ID token verification
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username + password → user created → acknowledgment
//!    (no token; registration is not a login)
//! 2. **Login**: username + password → credentials verified → 30-minute
//!    bearer token
//! 3. **Google login**: ID token verified against Google's keys →
//!    account resolved or created → bearer token
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed before storage
//! - Session tokens are stateless, signed, and expire after 30 minutes
//! - Login failures are uniform (no account enumeration)
//! - Token verification failures are uniform (no failure-cause oracle)

/// Identity model and database operations
pub mod users;

/// Password hashing and verification
pub mod password;

/// Session token issuance and verification
pub mod sessions;

/// Google ID token verification
pub mod google;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use google::{GoogleIdentity, GoogleVerifier};
pub use handlers::types::{
    GoogleLoginRequest, LoginRequest, MessageResponse, SignupRequest, TokenResponse,
};
pub use handlers::{google_login, login, signup};
pub use sessions::SessionSigner;
