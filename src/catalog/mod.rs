//! Catalog filter engine.
//!
//! The pure derivation layer between the fetched movie list and the UI: given
//! the full catalog and the three query parameters, it computes the visible,
//! ordered subset and the genre facet set. Everything here is synchronous,
//! side-effect free, and safe to re-run on every keystroke.
//!
//! # Modules
//!
//! - [`engine`]: `visible_movies`, `genre_facets`, and the query parameter types

pub mod engine;

pub use engine::{genre_facets, visible_movies, CatalogQuery, SortMode};
