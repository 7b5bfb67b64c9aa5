//! Filtering, faceting, and sorting over the in-memory movie list.
//!
//! This module is the core of the client: a pure, synchronous derivation of the
//! visible movie list from the full catalog and the three query parameters
//! (free-text search, selected genre, sort mode). It performs no I/O, never
//! mutates its input, and is cheap enough to re-run on every parameter change —
//! callers re-invoke it explicitly instead of tracking dependencies.
//!
//! # Matching Rules
//!
//! - **Search** is a case-insensitive substring match ORed across title,
//!   director, and the raw genre field; an empty query matches everything.
//! - **Genre** is a case-insensitive substring match against the raw genre
//!   field, so selecting "Action" also matches "Action-Adventure".
//! - Both filters conjoin; each only narrows the result.
//!
//! # Ordering
//!
//! All sorts are stable: movies with equal keys keep the relative order the
//! backend returned them in.

use crate::domain::Movie;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sort order applied to the filtered movie list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Descending by release year.
    #[default]
    Newest,

    /// Ascending by release year.
    Oldest,

    /// Ascending by title, compared case-insensitively.
    Title,
}

impl SortMode {
    /// Display label used by the sort selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::Title => "Title A-Z",
        }
    }
}

/// The three independent query parameters driving the visible list.
///
/// A default query (empty search, no genre, newest-first) passes every movie
/// through. The parameters are plain data; [`visible_movies`] interprets them.
///
/// # Examples
///
/// ```
/// use marquee::catalog::{CatalogQuery, SortMode};
///
/// let query = CatalogQuery {
///     search: "mann".to_string(),
///     genre: Some("Crime".to_string()),
///     sort: SortMode::Title,
/// };
/// assert!(!query.is_default());
/// assert!(CatalogQuery::default().is_default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Free-text query; empty means no filter.
    pub search: String,

    /// Selected genre facet; `None` means no genre filter.
    pub genre: Option<String>,

    /// Active sort order.
    pub sort: SortMode,
}

impl CatalogQuery {
    /// Returns `true` when no filter is active and the default sort applies.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.search.is_empty() && self.genre.is_none() && self.sort == SortMode::default()
    }

    /// Toggles the selected genre facet.
    ///
    /// Selecting the facet that is already selected clears the filter;
    /// selecting any other facet replaces it. The comparison is
    /// case-insensitive, matching the filter's own case policy.
    pub fn toggle_genre(&mut self, facet: &str) {
        let already_selected = self
            .genre
            .as_deref()
            .is_some_and(|current| current.eq_ignore_ascii_case(facet));

        self.genre = if already_selected {
            None
        } else {
            Some(facet.to_string())
        };
    }
}

/// Derives the visible, ordered subset of `all` for the given query.
///
/// The result is always a subset of `all` (by identifier), in an order fully
/// determined by `query.sort` with ties broken by input order. The input slice
/// is never mutated; matched movies are cloned into the result.
///
/// Tolerates an empty catalog, a query matching nothing, and movies with empty
/// genre fields — there are no failure modes.
///
/// # Examples
///
/// ```
/// use marquee::catalog::{visible_movies, CatalogQuery, SortMode};
/// use marquee::domain::Movie;
///
/// let movies: Vec<Movie> = serde_json::from_str(
///     r#"[{"id":1,"title":"Apollo 13","year":1995,"genre":"Drama","director":"Ron Howard"},
///         {"id":2,"title":"Heat","year":1995,"genre":"Crime, Drama","director":"Michael Mann"}]"#,
/// ).unwrap();
///
/// let query = CatalogQuery { search: "lo".to_string(), ..CatalogQuery::default() };
/// let visible = visible_movies(&movies, &query);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].title, "Apollo 13");
/// ```
#[must_use]
pub fn visible_movies(all: &[Movie], query: &CatalogQuery) -> Vec<Movie> {
    let _span = tracing::debug_span!(
        "visible_movies",
        total = all.len(),
        search_len = query.search.len(),
        genre = ?query.genre,
        sort = ?query.sort
    )
    .entered();

    let needle = query.search.trim().to_lowercase();
    let genre_needle = query.genre.as_deref().map(str::to_lowercase);

    let mut visible: Vec<Movie> = all
        .iter()
        .filter(|movie| {
            if !needle.is_empty() {
                let hit = movie.title.to_lowercase().contains(&needle)
                    || movie.director.to_lowercase().contains(&needle)
                    || movie.genre.to_lowercase().contains(&needle);
                if !hit {
                    return false;
                }
            }

            match &genre_needle {
                Some(genre) => movie.genre.to_lowercase().contains(genre),
                None => true,
            }
        })
        .cloned()
        .collect();

    // Vec::sort_by is stable, so equal keys keep backend order.
    match query.sort {
        SortMode::Newest => visible.sort_by(|a, b| b.year.cmp(&a.year)),
        SortMode::Oldest => visible.sort_by(|a, b| a.year.cmp(&b.year)),
        SortMode::Title => {
            visible.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
    }

    tracing::debug!(visible = visible.len(), "catalog filter applied");

    visible
}

/// Collects the distinct genre tokens across the whole catalog.
///
/// Each movie's genre field is split on commas and trimmed; the union of all
/// tokens forms the facet set offered by the genre selector. Duplicates
/// collapse (case-sensitively — "Sci-Fi" and "sci-fi" are distinct facets, an
/// inconsistency the source data permits) and first-occurrence order is kept
/// so the facet row is stable across recomputations.
///
/// # Examples
///
/// ```
/// use marquee::catalog::genre_facets;
/// use marquee::domain::Movie;
///
/// let movies: Vec<Movie> = serde_json::from_str(
///     r#"[{"id":1,"title":"A","year":2000,"genre":"Action, Adventure","director":""},
///         {"id":2,"title":"B","year":2001,"genre":"Action","director":""}]"#,
/// ).unwrap();
/// assert_eq!(genre_facets(&movies), vec!["Action", "Adventure"]);
/// ```
#[must_use]
pub fn genre_facets(all: &[Movie]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut facets = Vec::new();

    for movie in all {
        for token in movie.genre_tokens() {
            if seen.insert(token.to_string()) {
                facets.push(token.to_string());
            }
        }
    }

    tracing::debug!(movie_count = all.len(), facet_count = facets.len(), "genre facets derived");

    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str, year: i32, genre: &str, director: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            year,
            genre: genre.to_string(),
            director: director.to_string(),
            plot: String::new(),
            poster_url: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn catalog() -> Vec<Movie> {
        vec![
            movie(1, "Apollo 13", 1995, "Drama, History", "Ron Howard"),
            movie(2, "Heat", 1995, "Crime, Drama", "Michael Mann"),
            movie(3, "Alien", 1979, "Horror, Sci-Fi", "Ridley Scott"),
            movie(4, "Maria", 2012, "Drama", "Ana Lopez"),
        ]
    }

    fn ids(movies: &[Movie]) -> Vec<i64> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn default_query_returns_full_list_sorted_newest() {
        let all = catalog();
        let visible = visible_movies(&all, &CatalogQuery::default());
        assert_eq!(ids(&visible), vec![4, 1, 2, 3]);
    }

    #[test]
    fn result_is_a_subset_of_input() {
        let all = catalog();
        let query = CatalogQuery {
            search: "a".to_string(),
            ..CatalogQuery::default()
        };
        let visible = visible_movies(&all, &query);
        let all_ids: Vec<i64> = ids(&all);
        assert!(visible.iter().all(|m| all_ids.contains(&m.id)));
    }

    #[test]
    fn recomputation_is_idempotent() {
        let all = catalog();
        let query = CatalogQuery {
            search: "drama".to_string(),
            genre: Some("Drama".to_string()),
            sort: SortMode::Title,
        };
        assert_eq!(visible_movies(&all, &query), visible_movies(&all, &query));
    }

    #[test]
    fn search_matches_across_fields_with_or() {
        let all = catalog();
        // "lo" appears in the title "Apollo 13" and in the director "Ana Lopez",
        // but nowhere in Heat or Alien.
        let query = CatalogQuery {
            search: "lo".to_string(),
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&visible_movies(&all, &query)), vec![4, 1]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let all = catalog();
        let query = CatalogQuery {
            search: "HEAT".to_string(),
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&visible_movies(&all, &query)), vec![2]);
    }

    #[test]
    fn genre_filter_matches_substring_of_genre_field() {
        let all = catalog();
        let query = CatalogQuery {
            genre: Some("Drama".to_string()),
            ..CatalogQuery::default()
        };
        // "Drama" is a substring of "Drama, History", "Crime, Drama", and "Drama".
        assert_eq!(ids(&visible_movies(&all, &query)), vec![4, 1, 2]);
    }

    #[test]
    fn genre_filter_allows_partial_token_match() {
        let all = vec![movie(1, "Rush", 2013, "Action-Adventure", "Ron Howard")];
        let query = CatalogQuery {
            genre: Some("Action".to_string()),
            ..CatalogQuery::default()
        };
        assert_eq!(visible_movies(&all, &query).len(), 1);
    }

    #[test]
    fn filters_conjoin() {
        let all = catalog();
        let query = CatalogQuery {
            search: "mann".to_string(),
            genre: Some("History".to_string()),
            ..CatalogQuery::default()
        };
        assert!(visible_movies(&all, &query).is_empty());
    }

    #[test]
    fn newest_sort_is_stable_on_year_ties() {
        let all = vec![
            movie(1, "A", 2000, "", ""),
            movie(2, "B", 2010, "", ""),
            movie(3, "C", 2000, "", ""),
        ];
        let visible = visible_movies(&all, &CatalogQuery::default());
        assert_eq!(ids(&visible), vec![2, 1, 3]);
    }

    #[test]
    fn oldest_sort_ascends_by_year() {
        let all = catalog();
        let query = CatalogQuery {
            sort: SortMode::Oldest,
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&visible_movies(&all, &query)), vec![3, 1, 2, 4]);
    }

    #[test]
    fn title_sort_ignores_case() {
        let all = vec![
            movie(1, "zodiac", 2007, "", ""),
            movie(2, "Alien", 1979, "", ""),
            movie(3, "heat", 1995, "", ""),
        ];
        let query = CatalogQuery {
            sort: SortMode::Title,
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&visible_movies(&all, &query)), vec![2, 3, 1]);
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        assert!(visible_movies(&[], &CatalogQuery::default()).is_empty());
    }

    #[test]
    fn input_order_is_not_mutated() {
        let all = catalog();
        let before = ids(&all);
        let _ = visible_movies(
            &all,
            &CatalogQuery {
                sort: SortMode::Title,
                ..CatalogQuery::default()
            },
        );
        assert_eq!(ids(&all), before);
    }

    #[test]
    fn facets_union_and_deduplicate() {
        let all = vec![
            movie(1, "A", 2000, "Action, Adventure", ""),
            movie(2, "B", 2001, "Action", ""),
        ];
        assert_eq!(genre_facets(&all), vec!["Action", "Adventure"]);
    }

    #[test]
    fn facets_preserve_first_occurrence_order() {
        let all = catalog();
        assert_eq!(
            genre_facets(&all),
            vec!["Drama", "History", "Crime", "Horror", "Sci-Fi"]
        );
    }

    #[test]
    fn empty_genre_fields_contribute_no_facets() {
        let all = vec![movie(1, "A", 2000, "", ""), movie(2, "B", 2001, " , ", "")];
        assert!(genre_facets(&all).is_empty());
    }

    #[test]
    fn facet_dedup_is_case_sensitive() {
        let all = vec![
            movie(1, "A", 2000, "Sci-Fi", ""),
            movie(2, "B", 2001, "sci-fi", ""),
        ];
        assert_eq!(genre_facets(&all), vec!["Sci-Fi", "sci-fi"]);
    }

    #[test]
    fn toggling_the_selected_genre_clears_it() {
        let mut query = CatalogQuery::default();
        query.toggle_genre("Drama");
        assert_eq!(query.genre.as_deref(), Some("Drama"));
        query.toggle_genre("Drama");
        assert_eq!(query.genre, None);
    }

    #[test]
    fn toggling_a_different_genre_replaces_the_selection() {
        let mut query = CatalogQuery::default();
        query.toggle_genre("Drama");
        query.toggle_genre("Crime");
        assert_eq!(query.genre.as_deref(), Some("Crime"));
    }

    #[test]
    fn toggle_comparison_ignores_case() {
        let mut query = CatalogQuery::default();
        query.toggle_genre("Drama");
        query.toggle_genre("drama");
        assert_eq!(query.genre, None);
    }
}
