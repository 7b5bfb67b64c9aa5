//! REST client layer for the catalog backend.
//!
//! Wraps the backend's envelope-based JSON API behind typed methods. The rest
//! of the client never touches HTTP directly: the fetch layer calls these
//! methods from background tasks and posts results back as events.
//!
//! # Modules
//!
//! - [`envelope`]: The `{success, message, data, count}` wrapper and receipts
//! - [`client`]: The `reqwest`-backed endpoint methods

pub mod client;
pub mod envelope;

pub use client::{health_url, ApiClient};
pub use envelope::{ApiEnvelope, CreatedReview};
