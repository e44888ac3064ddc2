//! Error types for component serialization.
//!
//! Every fallible codec operation returns [`Result`]. Errors carry:
//! - A stable [`ErrorCode`] for machine parsing
//! - An [`ErrorCategory`] for grouping
//! - A short headline for humans
//!
//! # Agent-Facing Output
//!
//! Errors serialize to structured JSON:
//! ```json
//! {
//!   "code": 2,
//!   "code_name": "unexpected_null_argument",
//!   "category": "argument",
//!   "message": "unexpected null argument: Memory pool is null."
//! }
//! ```

use arrow::error::ArrowError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable numeric error codes.
///
/// Codes are grouped by category:
/// - 1-9: Argument errors
/// - 10-19: Schema errors
/// - 20-29: Encoding errors
/// - 30-39: Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum ErrorCode {
    UnexpectedNullArgument = 2,
    NotImplemented = 10,
    OutOfMemory = 20,
    ArrowEncoding = 21,
    InvalidConfig = 30,
}

impl ErrorCode {
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnexpectedNullArgument => "unexpected_null_argument",
            ErrorCode::NotImplemented => "not_implemented",
            ErrorCode::OutOfMemory => "out_of_memory",
            ErrorCode::ArrowEncoding => "arrow_encoding",
            ErrorCode::InvalidConfig => "invalid_config",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// A required handle or element slice was missing.
    Argument,
    /// The schema describes something the encoder cannot serialize yet.
    Schema,
    /// Arrow failed while building, finishing or encoding a column.
    Encoding,
    /// Encoder configuration was rejected.
    Config,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Argument => write!(f, "argument"),
            ErrorCategory::Schema => write!(f, "schema"),
            ErrorCategory::Encoding => write!(f, "encoding"),
            ErrorCategory::Config => write!(f, "config"),
        }
    }
}

/// Unified error type for the codec.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected null argument: {0}")]
    UnexpectedNullArgument(String),

    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("invalid encoder configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Shorthand for [`Error::UnexpectedNullArgument`].
    pub fn null_argument(message: impl Into<String>) -> Self {
        Error::UnexpectedNullArgument(message.into())
    }

    /// Shorthand for [`Error::NotImplemented`].
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Error::NotImplemented(message.into())
    }

    /// Returns the stable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::UnexpectedNullArgument(_) => ErrorCode::UnexpectedNullArgument,
            Error::NotImplemented(_) => ErrorCode::NotImplemented,
            Error::Arrow(ArrowError::MemoryError(_)) => ErrorCode::OutOfMemory,
            Error::Arrow(_) => ErrorCode::ArrowEncoding,
            Error::InvalidConfig(_) => ErrorCode::InvalidConfig,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::UnexpectedNullArgument(_) => ErrorCategory::Argument,
            Error::NotImplemented(_) => ErrorCategory::Schema,
            Error::Arrow(_) => ErrorCategory::Encoding,
            Error::InvalidConfig(_) => ErrorCategory::Config,
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self.code() {
            ErrorCode::UnexpectedNullArgument => "Unexpected Null Argument",
            ErrorCode::NotImplemented => "Serialization Not Implemented",
            ErrorCode::OutOfMemory => "Memory Pool Exhausted",
            ErrorCode::ArrowEncoding => "Arrow Encoding Failed",
            ErrorCode::InvalidConfig => "Invalid Encoder Configuration",
        }
    }

    /// Emit this error as a `tracing` event and hand it back.
    ///
    /// Meant for `map_err(Error::logged)` at the point where a caller decides
    /// to drop a logging event.
    pub fn logged(self) -> Self {
        tracing::error!(
            code = %self.code(),
            category = %self.category(),
            "{}",
            self
        );
        self
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable numeric error code.
    pub code: u32,

    /// Symbolic name of the code.
    pub code_name: ErrorCode,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        StructuredError {
            code: err.code().as_u32(),
            code_name: err.code(),
            category: err.category(),
            message: err.to_string(),
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }

    /// Serialize to pretty JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_json())
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, reset) = if use_color {
        ("\x1b[31m", "\x1b[0m")
    } else {
        ("", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}",
        headline = err.headline(),
        message = err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            Error::null_argument("Memory pool is null.").code(),
            ErrorCode::UnexpectedNullArgument
        );
        assert_eq!(Error::not_implemented("x").code(), ErrorCode::NotImplemented);
        assert_eq!(
            Error::from(ArrowError::MemoryError("limit".into())).code(),
            ErrorCode::OutOfMemory
        );
        assert_eq!(
            Error::from(ArrowError::IpcError("bad".into())).code(),
            ErrorCode::ArrowEncoding
        );
        assert_eq!(ErrorCode::UnexpectedNullArgument.as_u32(), 2);
        assert_eq!(ErrorCode::InvalidConfig.as_u32(), 30);
    }

    #[test]
    fn test_error_category() {
        assert_eq!(Error::null_argument("x").category(), ErrorCategory::Argument);
        assert_eq!(Error::not_implemented("x").category(), ErrorCategory::Schema);
        assert_eq!(
            Error::from(ArrowError::ComputeError("x".into())).category(),
            ErrorCategory::Encoding
        );
        assert_eq!(
            Error::InvalidConfig("x".into()).category(),
            ErrorCategory::Config
        );
    }

    #[test]
    fn test_arrow_error_message_is_verbatim() {
        let err = Error::from(ArrowError::MemoryError("pool exhausted".into()));
        assert!(err.to_string().contains("pool exhausted"));
        assert!(matches!(err, Error::Arrow(ArrowError::MemoryError(_))));
    }

    #[test]
    fn test_structured_error_json() {
        let err = Error::null_argument("Passed array builder is null.");
        let structured = StructuredError::from(&err);
        let json = structured.to_json();

        assert!(json.contains(r#""code":2"#));
        assert!(json.contains(r#""code_name":"unexpected_null_argument""#));
        assert!(json.contains(r#""category":"argument""#));
        assert!(json.contains("Passed array builder is null."));

        let parsed: StructuredError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, structured);
    }

    #[test]
    fn test_format_error_human() {
        let err = Error::not_implemented("nullable struct extensions");
        let formatted = format_error_human(&err, false);

        assert!(formatted.contains("Serialization Not Implemented"));
        assert!(formatted.contains("nullable struct extensions"));
        assert!(!formatted.contains("\x1b["));
    }

    #[test]
    fn test_logged_returns_same_error() {
        let err = Error::null_argument("Memory pool is null.").logged();
        assert_eq!(err.code(), ErrorCode::UnexpectedNullArgument);
    }

    #[test]
    fn test_display_impls() {
        assert_eq!(ErrorCategory::Encoding.to_string(), "encoding");
        assert_eq!(ErrorCode::OutOfMemory.to_string(), "out_of_memory");
    }
}
