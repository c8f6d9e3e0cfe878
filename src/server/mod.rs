//! Server Module
//!
//! Configuration loading, application state, and server assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports
//! ├── config.rs       - Environment configuration and database setup
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Application assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. `AppConfig::from_env` loads configuration (fail-fast on required
//!    settings)
//! 2. `create_app` connects the store, constructs each service, and
//!    returns the configured router

/// Environment configuration and database setup
pub mod config;

/// Application state and FromRef implementations
pub mod state;

/// Application assembly
pub mod init;

pub use config::{AppConfig, ConfigError};
pub use init::create_app;
pub use state::AppState;
