//! Shared types, errors, and configuration for Hekto Admin.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management (server, document store, admin credentials)

pub mod config;
pub mod error;

pub use config::{AdminConfig, AppConfig, ServerConfig, StoreConfig};
pub use error::{AppError, AppResult};
