//! Error types for the marquee client.
//!
//! This module defines the centralized error type [`MarqueeError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for marquee client operations.
///
/// This enum consolidates all error conditions that can occur while talking to
/// the backend, validating user input, or loading configuration. Transport-level
/// failures from `reqwest` and I/O failures convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use marquee::domain::MarqueeError;
///
/// fn validate_rating(rating: u8) -> Result<(), MarqueeError> {
///     if (1..=5).contains(&rating) {
///         Ok(())
///     } else {
///         Err(MarqueeError::Validation("Please select a rating".to_string()))
///     }
/// }
///
/// assert!(validate_rating(3).is_ok());
/// assert!(validate_rating(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// HTTP transport failure.
    ///
    /// Wraps errors from the underlying HTTP client: unreachable host, timeout,
    /// TLS failure, or a body that could not be read or decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered, but not with a usable payload.
    ///
    /// Covers non-success HTTP statuses and envelopes with `success: false`.
    /// `status` is `None` when the envelope itself reported the failure.
    #[error("API error: {message}")]
    Api {
        /// HTTP status code, if the failure came from the status line.
        status: Option<u16>,
        /// Message from the response envelope, or a description of the failure.
        message: String,
    },

    /// User input failed form validation.
    ///
    /// The string is the message shown to the user, e.g. "Please select a rating".
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a config file cannot be parsed or required values are malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for marquee operations.
///
/// This is a type alias for `std::result::Result<T, MarqueeError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, MarqueeError>;
