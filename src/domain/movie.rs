//! Movie domain model and operations.
//!
//! This module defines the core `Movie` type as the backend serves it. The record
//! is immutable from the client's perspective: it is deserialized from the movie
//! endpoints and never written back. Genre information arrives as a single
//! comma-separated string with free-form casing and whitespace; helpers here
//! split it into display tokens.

use serde::{Deserialize, Serialize};

/// A movie record as served by the catalog backend.
///
/// Field names match the backend's snake_case JSON. The `genre` field is a raw
/// comma-separated list ("Crime, Drama"); `plot` and `poster_url` may be empty
/// strings, and a payload that omits them entirely deserializes to empty strings
/// rather than failing.
///
/// # Examples
///
/// ```
/// use marquee::domain::Movie;
///
/// let movie: Movie = serde_json::from_str(
///     r#"{"id":1,"title":"Heat","year":1995,"genre":"Crime, Drama","director":"Michael Mann"}"#,
/// ).unwrap();
/// assert_eq!(movie.genre_tokens(), vec!["Crime", "Drama"]);
/// assert!(movie.plot.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identifier assigned by the backend.
    pub id: i64,

    /// Display title.
    pub title: String,

    /// Release year.
    pub year: i32,

    /// Comma-separated genre names, free-form casing and whitespace.
    #[serde(default)]
    pub genre: String,

    /// Director name.
    #[serde(default)]
    pub director: String,

    /// Plot summary; empty when the backend has none.
    #[serde(default)]
    pub plot: String,

    /// Poster image URL; empty when the backend has none.
    #[serde(default)]
    pub poster_url: String,

    /// Backend creation timestamp, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Backend update timestamp, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Movie {
    /// Splits the raw genre field into trimmed tokens.
    ///
    /// Empty tokens (from an empty field, or stray commas like `"Drama,,"`)
    /// are dropped. Casing is preserved.
    #[must_use]
    pub fn genre_tokens(&self) -> Vec<&str> {
        self.genre
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Returns the plot, or a placeholder when the backend sent none.
    #[must_use]
    pub fn plot_or_placeholder(&self) -> &str {
        if self.plot.is_empty() {
            "No description available"
        } else {
            &self.plot
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(genre: &str) -> Movie {
        Movie {
            id: 1,
            title: "Heat".to_string(),
            year: 1995,
            genre: genre.to_string(),
            director: "Michael Mann".to_string(),
            plot: String::new(),
            poster_url: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn genre_tokens_trim_whitespace() {
        assert_eq!(movie(" Crime ,Drama").genre_tokens(), vec!["Crime", "Drama"]);
    }

    #[test]
    fn genre_tokens_skip_empty_segments() {
        assert_eq!(movie("Drama,, ").genre_tokens(), vec!["Drama"]);
        assert!(movie("").genre_tokens().is_empty());
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let movie: Movie =
            serde_json::from_str(r#"{"id":7,"title":"Pi","year":1998}"#).unwrap();
        assert!(movie.genre.is_empty());
        assert!(movie.director.is_empty());
        assert_eq!(movie.plot_or_placeholder(), "No description available");
    }
}
