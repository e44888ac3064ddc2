//! Shared foundations for the component codec.
//!
//! This crate provides:
//! - The error taxonomy used by every serialization step
//! - Logging configuration and subscriber setup

pub mod error;
pub mod logging;

pub use error::{format_error_human, Error, ErrorCategory, ErrorCode, Result, StructuredError};
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
