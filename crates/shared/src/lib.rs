//! Shared types, errors, and configuration for GFC.
//!
//! This crate provides common pieces used across all other crates:
//! - Amount helpers with decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LogConfig, ReportConfig};
pub use error::{AppError, AppResult};
