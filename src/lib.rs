//! Marquee: a terminal client for browsing a movie catalog and its reviews.
//!
//! Marquee is a REST-backed catalog browser that provides:
//! - A movie list with free-text search, single-select genre facets, and
//!   three sort orders, recomputed reactively on every parameter change
//! - Movie detail, review list, and add-review screens connected by an
//!   explicit navigation stack
//! - A thin client for the backend's envelope-based JSON API
//! - Background fetches with last-request-wins staleness handling
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - Navigation stack                                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Fetch Layer   │
//! │ (ui/)         │   │ (catalog/)    │   │ (fetch/)      │
//! │ - View models │   │ - Filtering   │   │ - Async HTTP  │
//! │ - Rendering   │   │ - Faceting    │   │ - Request ids │
//! │ - Formatting  │   │ - Sorting     │   │ - Channels    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  API, Infrastructure & Domain Layers                │
//! │  - REST client + envelope (api/)                    │
//! │  - Config paths (infrastructure/)                   │
//! │  - Records, validation, errors (domain/)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Pure filter/facet/sort engine over the movie list
//! - [`api`]: REST client for the backend's envelope API
//! - [`fetch`]: Background fetch executor and its message protocol
//! - [`domain`]: Core record types, validation, and errors
//! - [`ui`]: View models and the bundled text renderer
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Tracing setup
//!
//! # Data Flow
//!
//! The backend supplies the full movie list once per screen visit (and on
//! manual refresh); the catalog engine re-derives the genre facet set and the
//! filtered, ordered view whenever the list or any of the three query
//! parameters changes; the rendering layer consumes the result. Recomputation
//! is explicit — every setter re-invokes the engine — because the engine is a
//! cheap, pure function with no failure modes.
//!
//! # Example
//!
//! ```
//! use marquee::app::{handle_event, Event};
//! use marquee::{initialize, Config};
//!
//! let mut state = initialize(&Config::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Init).unwrap();
//! assert_eq!(actions.len(), 1); // the initial movie list fetch
//! ```

pub mod api;
pub mod app;
pub mod catalog;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Screen};
pub use catalog::{genre_facets, visible_movies, CatalogQuery, SortMode};
pub use domain::{MarqueeError, Movie, Result, Review};

use serde::Deserialize;

/// Client configuration.
///
/// Values come from a TOML file (see [`Config::from_file`]) with CLI flags and
/// environment variables layered on top by the binary. Every field has a
/// default, so a partial file — or no file at all — works.
///
/// # Example
///
/// ```toml
/// # ~/.config/marquee/config.toml
/// base_url = "http://192.168.1.2:5000/api"
/// request_timeout_secs = 10
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the catalog API, including any path prefix.
    ///
    /// Default: `http://127.0.0.1:5000/api`
    pub base_url: String,

    /// TCP connect timeout in seconds. Default: 5
    pub connect_timeout_secs: u64,

    /// Whole-request timeout in seconds. Default: 10
    pub request_timeout_secs: u64,

    /// Tracing level for the subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"warn"`,
    /// overridable by `RUST_LOG`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/api".to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 10,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults, so a file configuring only
    /// `base_url` is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration");

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            MarqueeError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }
}

/// Initializes the client with configuration.
///
/// Creates the initial [`AppState`]: a movie list screen waiting for its first
/// load. The caller is expected to feed an [`Event::Init`] through
/// [`handle_event`] to dispatch that load.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(base_url = %config.base_url, "initializing marquee client");
    AppState::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_points_at_localhost() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000/api");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn partial_config_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://10.0.0.2:5000/api\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:5000/api");
        assert_eq!(config.connect_timeout_secs, 5);
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, MarqueeError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::from_file("/nonexistent/marquee.toml").unwrap_err();
        assert!(matches!(err, MarqueeError::Io(_)));
    }
}
