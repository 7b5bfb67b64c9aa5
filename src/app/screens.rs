//! Per-screen state containers.
//!
//! Each of the four screens owns exactly the state it renders from: the movie
//! list with its query parameters and derived views, the detail screen with one
//! movie, the review list, and the add-review form. Nothing is shared between
//! screens beyond the values passed explicitly on navigation (a movie id, and
//! the movie title for the form header).
//!
//! Every screen that fetches remembers the id of its latest pending request in
//! `pending_fetch`; the event handler uses it to discard responses from
//! superseded fetches.

use crate::catalog::{genre_facets, visible_movies, CatalogQuery, SortMode};
use crate::domain::{Movie, Review, ReviewDraft};

/// State of the movie list screen.
///
/// Holds the full catalog as the backend returned it, plus the derived visible
/// list and genre facet row. The derived fields are recomputed eagerly by the
/// setters — the engine is cheap enough to re-run on every keystroke, so no
/// dependency tracking is needed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieListScreen {
    /// Full movie list from the backend, in backend order.
    pub movies: Vec<Movie>,

    /// Movies matching the current query, in display order.
    pub visible: Vec<Movie>,

    /// Distinct genre tokens derived from `movies`, in first-occurrence order.
    pub facets: Vec<String>,

    /// The three query parameters driving `visible`.
    pub query: CatalogQuery,

    /// Zero-based cursor position within `visible`.
    ///
    /// Clamped by [`apply_filters`](Self::apply_filters); wraps around during
    /// navigation.
    pub selected_index: usize,

    /// True until the initial fetch resolves.
    pub loading: bool,

    /// True while a manual refresh is in flight.
    pub refreshing: bool,

    /// Last fetch error, shown alongside whatever list is already loaded.
    pub error: Option<String>,

    /// Id of the latest in-flight fetch for this screen.
    pub pending_fetch: Option<u64>,
}

impl MovieListScreen {
    /// Creates the screen in its initial loading state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Returns the movie under the cursor, if any.
    #[must_use]
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.visible.get(self.selected_index)
    }

    /// Moves the cursor down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves the cursor up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Replaces the catalog with a fully resolved fetch result.
    ///
    /// Recomputes the facet row and the visible list, and clears the
    /// loading/refreshing/error flags — only successful payloads ever reach
    /// this method.
    pub fn set_movies(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.facets = genre_facets(&self.movies);
        self.loading = false;
        self.refreshing = false;
        self.error = None;
        self.apply_filters();
    }

    /// Re-runs the catalog engine over the current list and query.
    ///
    /// Updates `visible` and clamps the cursor into bounds.
    pub fn apply_filters(&mut self) {
        self.visible = visible_movies(&self.movies, &self.query);

        if self.visible.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
        }
    }

    /// Replaces the free-text query and recomputes the view.
    pub fn set_search(&mut self, search: String) {
        self.query.search = search;
        self.apply_filters();
    }

    /// Toggles a genre facet and recomputes the view.
    ///
    /// Selecting the already-selected facet clears the filter.
    pub fn toggle_genre(&mut self, facet: &str) {
        self.query.toggle_genre(facet);
        self.apply_filters();
    }

    /// Clears the genre filter ("All Movies") and recomputes the view.
    pub fn clear_genre(&mut self) {
        self.query.genre = None;
        self.apply_filters();
    }

    /// Switches the sort order and recomputes the view.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.query.sort = sort;
        self.apply_filters();
    }

    /// Restores the default query (empty search, no genre, newest first).
    pub fn reset_filters(&mut self) {
        self.query = CatalogQuery::default();
        self.apply_filters();
    }
}

/// State of the movie detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailScreen {
    /// Identifier passed from the list screen.
    pub movie_id: i64,

    /// The loaded movie; `None` while loading or after a failed fetch.
    pub movie: Option<Movie>,

    /// True until the fetch resolves.
    pub loading: bool,

    /// Last fetch error.
    pub error: Option<String>,

    /// Id of the latest in-flight fetch for this screen.
    pub pending_fetch: Option<u64>,
}

impl MovieDetailScreen {
    /// Creates the screen in its initial loading state.
    #[must_use]
    pub fn new(movie_id: i64) -> Self {
        Self {
            movie_id,
            movie: None,
            loading: true,
            error: None,
            pending_fetch: None,
        }
    }
}

/// State of the review list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewListScreen {
    /// Identifier passed from the list or detail screen.
    pub movie_id: i64,

    /// Loaded reviews in backend order.
    pub reviews: Vec<Review>,

    /// True until the initial fetch resolves.
    pub loading: bool,

    /// True while a manual refresh is in flight.
    pub refreshing: bool,

    /// Last fetch error, shown alongside already-loaded reviews.
    pub error: Option<String>,

    /// Id of the latest in-flight fetch for this screen.
    pub pending_fetch: Option<u64>,
}

impl ReviewListScreen {
    /// Creates the screen in its initial loading state.
    #[must_use]
    pub fn new(movie_id: i64) -> Self {
        Self {
            movie_id,
            reviews: Vec::new(),
            loading: true,
            refreshing: false,
            error: None,
            pending_fetch: None,
        }
    }
}

/// State of the add-review form screen.
#[derive(Debug, Clone, PartialEq)]
pub struct AddReviewScreen {
    /// Movie the review is for.
    pub movie_id: i64,

    /// Title shown in the form header, passed from the detail screen.
    pub movie_title: String,

    /// Raw form input; validated only on submit.
    pub draft: ReviewDraft,

    /// True while a submission is in flight; blocks re-submission.
    pub submitting: bool,

    /// Last validation or submission error.
    pub error: Option<String>,

    /// Id of the in-flight submission.
    pub pending_fetch: Option<u64>,
}

impl AddReviewScreen {
    /// Creates an empty form for the given movie.
    #[must_use]
    pub fn new(movie_id: i64, movie_title: String) -> Self {
        Self {
            movie_id,
            movie_title,
            draft: ReviewDraft::default(),
            submitting: false,
            error: None,
            pending_fetch: None,
        }
    }
}

/// One entry in the navigation stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// The movie list with search, facets, and sorting.
    MovieList(MovieListScreen),

    /// A single movie's details.
    MovieDetail(MovieDetailScreen),

    /// The reviews attached to one movie.
    ReviewList(ReviewListScreen),

    /// The add-review form.
    AddReview(AddReviewScreen),
}

impl Screen {
    /// Short name of the screen, for logging and prompts.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MovieList(_) => "movies",
            Self::MovieDetail(_) => "detail",
            Self::ReviewList(_) => "reviews",
            Self::AddReview(_) => "add-review",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str, year: i32, genre: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            year,
            genre: genre.to_string(),
            director: String::new(),
            plot: String::new(),
            poster_url: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn set_movies_clears_loading_and_derives_views() {
        let mut screen = MovieListScreen::new();
        assert!(screen.loading);

        screen.set_movies(vec![
            movie(1, "Heat", 1995, "Crime, Drama"),
            movie(2, "Alien", 1979, "Horror"),
        ]);

        assert!(!screen.loading);
        assert_eq!(screen.facets, vec!["Crime", "Drama", "Horror"]);
        assert_eq!(screen.visible.len(), 2);
    }

    #[test]
    fn setters_retrigger_recomputation() {
        let mut screen = MovieListScreen::new();
        screen.set_movies(vec![
            movie(1, "Heat", 1995, "Crime, Drama"),
            movie(2, "Alien", 1979, "Horror"),
        ]);

        screen.set_search("heat".to_string());
        assert_eq!(screen.visible.len(), 1);

        screen.set_search(String::new());
        assert_eq!(screen.visible.len(), 2);

        screen.toggle_genre("Horror");
        assert_eq!(screen.visible.len(), 1);
        assert_eq!(screen.visible[0].id, 2);

        screen.reset_filters();
        assert_eq!(screen.visible.len(), 2);
        assert!(screen.query.is_default());
    }

    #[test]
    fn toggling_selected_genre_clears_the_filter() {
        let mut screen = MovieListScreen::new();
        screen.set_movies(vec![movie(1, "Heat", 1995, "Crime, Drama")]);

        screen.toggle_genre("Drama");
        assert_eq!(screen.query.genre.as_deref(), Some("Drama"));
        screen.toggle_genre("Drama");
        assert_eq!(screen.query.genre, None);
    }

    #[test]
    fn cursor_clamps_when_filter_narrows() {
        let mut screen = MovieListScreen::new();
        screen.set_movies(vec![
            movie(1, "Heat", 1995, "Crime"),
            movie(2, "Alien", 1979, "Horror"),
            movie(3, "Maria", 2012, "Drama"),
        ]);
        screen.selected_index = 2;

        screen.set_search("alien".to_string());
        assert_eq!(screen.selected_index, 0);
    }

    #[test]
    fn cursor_wraps_both_directions() {
        let mut screen = MovieListScreen::new();
        screen.set_movies(vec![movie(1, "Heat", 1995, ""), movie(2, "Alien", 1979, "")]);

        screen.move_selection_up();
        assert_eq!(screen.selected_index, 1);
        screen.move_selection_down();
        assert_eq!(screen.selected_index, 0);
    }

    #[test]
    fn cursor_is_a_noop_on_empty_list() {
        let mut screen = MovieListScreen::new();
        screen.move_selection_down();
        screen.move_selection_up();
        assert_eq!(screen.selected_index, 0);
    }
}
