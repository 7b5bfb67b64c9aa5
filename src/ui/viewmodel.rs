//! View model types representing renderable screen state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are what the rendering layer
//! consumes: the filtered/sorted movie rows, the genre facet chips with their
//! active flags, result summaries, and form echo state. They contain no
//! business logic, only display-ready data, so any renderer — the bundled text
//! renderer or a richer one — can consume them unchanged.

use crate::app::screens::Screen;
use crate::app::AppState;
use crate::catalog::SortMode;
use crate::domain::{Movie, ANONYMOUS_AUTHOR, MAX_COMMENT_LEN};
use crate::ui::helpers;

/// Number of genre tags shown inline per movie row before collapsing to "+N more".
const INLINE_GENRE_TAGS: usize = 2;

/// Header information for the movie list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Screen title.
    pub title: String,

    /// Subtitle, e.g. "Browse 12 movies".
    pub subtitle: String,
}

/// Footer command hints for the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Available commands, formatted for a single line.
    pub commands: String,
}

/// One selectable genre chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetChip {
    /// Display label ("All Movies" or a genre token).
    pub label: String,

    /// Whether this chip reflects the current selection.
    pub active: bool,
}

/// One selectable sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOption {
    /// The sort mode this option activates.
    pub mode: SortMode,

    /// Display label.
    pub label: &'static str,

    /// Whether this is the active order.
    pub active: bool,
}

/// Display information for a single movie row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRow {
    /// Movie identifier (stable row key).
    pub id: i64,

    /// Title.
    pub title: String,

    /// Release year.
    pub year: i32,

    /// Director name.
    pub director: String,

    /// First genre tags, at most [`INLINE_GENRE_TAGS`].
    pub genre_tags: Vec<String>,

    /// Count of genre tags beyond the inline ones ("+N more").
    pub extra_genres: usize,

    /// Plot summary or its placeholder.
    pub plot: String,

    /// Whether the cursor is on this row.
    pub is_selected: bool,
}

/// Empty state message shown when no rows are available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// View model for the movie list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieListView {
    /// Header title and subtitle.
    pub header: HeaderInfo,

    /// Current free-text query, echoed in the search bar.
    pub search_query: String,

    /// Genre chips: "All Movies" first, then each facet in derivation order.
    pub facet_chips: Vec<FacetChip>,

    /// The three sort orders with the active one flagged.
    pub sort_options: Vec<SortOption>,

    /// "N movie(s) found[ in GENRE][ for "QUERY"]".
    pub results_summary: String,

    /// Visible movie rows, in display order.
    pub rows: Vec<MovieRow>,

    /// Shown instead of rows when the filter matches nothing.
    pub empty_state: Option<EmptyState>,

    /// True until the initial fetch resolves.
    pub loading: bool,

    /// True while a manual refresh is in flight.
    pub refreshing: bool,

    /// Last fetch error, if any.
    pub error: Option<String>,

    /// Command hints.
    pub footer: FooterInfo,
}

/// View model for the movie detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetailView {
    /// Movie identifier, shown while loading and in error states.
    pub movie_id: i64,

    /// The loaded movie, if the fetch has resolved successfully.
    pub movie: Option<Movie>,

    /// True until the fetch resolves.
    pub loading: bool,

    /// Fetch error, if any.
    pub error: Option<String>,

    /// Command hints.
    pub footer: FooterInfo,
}

/// One review row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    /// Author display name (blank authors become "Anonymous").
    pub author: String,

    /// Star string, e.g. "★★★★".
    pub stars: String,

    /// Review text.
    pub comment: String,

    /// Formatted creation date.
    pub date: String,
}

/// View model for the review list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewListView {
    /// Review rows in backend order.
    pub rows: Vec<ReviewRow>,

    /// Shown when the movie has no reviews.
    pub empty_state: Option<EmptyState>,

    /// True until the initial fetch resolves.
    pub loading: bool,

    /// True while a manual refresh is in flight.
    pub refreshing: bool,

    /// Fetch error, if any.
    pub error: Option<String>,

    /// Command hints.
    pub footer: FooterInfo,
}

/// View model for the add-review form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReviewView {
    /// Movie title shown in the form header.
    pub movie_title: String,

    /// Author field echo; shows the anonymous placeholder when empty.
    pub author: String,

    /// Selected rating as stars (empty when unset).
    pub rating_stars: String,

    /// Rating helper text.
    pub rating_text: String,

    /// Comment field echo.
    pub comment: String,

    /// Character counter, e.g. "42/500 characters".
    pub comment_count: String,

    /// True while the submission is in flight.
    pub submitting: bool,

    /// Validation or submission error.
    pub error: Option<String>,

    /// Command hints.
    pub footer: FooterInfo,
}

/// View model for whichever screen is on top of the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    /// The movie list.
    MovieList(MovieListView),
    /// A movie's details.
    MovieDetail(MovieDetailView),
    /// A movie's reviews.
    ReviewList(ReviewListView),
    /// The add-review form.
    AddReview(AddReviewView),
}

/// Computes the view model for the current screen.
///
/// Pure function of the state snapshot; called after every handled event that
/// requested a render.
#[must_use]
pub fn compute_view(state: &AppState) -> ScreenView {
    match state.current() {
        Screen::MovieList(list) => ScreenView::MovieList(movie_list_view(list)),
        Screen::MovieDetail(detail) => ScreenView::MovieDetail(MovieDetailView {
            movie_id: detail.movie_id,
            movie: detail.movie.clone(),
            loading: detail.loading,
            error: detail.error.clone(),
            footer: FooterInfo {
                commands: "reviews  review: write one  r: reload  b: back  q: quit".to_string(),
            },
        }),
        Screen::ReviewList(reviews) => ScreenView::ReviewList(review_list_view(reviews)),
        Screen::AddReview(form) => ScreenView::AddReview(add_review_view(form)),
    }
}

fn movie_list_view(list: &crate::app::MovieListScreen) -> MovieListView {
    let mut facet_chips = Vec::with_capacity(list.facets.len() + 1);
    facet_chips.push(FacetChip {
        label: "All Movies".to_string(),
        active: list.query.genre.is_none(),
    });
    for facet in &list.facets {
        let active = list
            .query
            .genre
            .as_deref()
            .is_some_and(|selected| selected.eq_ignore_ascii_case(facet));
        facet_chips.push(FacetChip {
            label: facet.clone(),
            active,
        });
    }

    let sort_options = [SortMode::Newest, SortMode::Oldest, SortMode::Title]
        .into_iter()
        .map(|mode| SortOption {
            mode,
            label: mode.label(),
            active: list.query.sort == mode,
        })
        .collect();

    let rows: Vec<MovieRow> = list
        .visible
        .iter()
        .enumerate()
        .map(|(index, movie)| movie_row(movie, index == list.selected_index))
        .collect();

    let empty_state = if !list.loading && rows.is_empty() {
        Some(EmptyState {
            message: "No movies found".to_string(),
            subtitle: if list.query.search.is_empty() {
                "Try adjusting your filters".to_string()
            } else {
                format!("No results for \"{}\"", list.query.search)
            },
        })
    } else {
        None
    };

    MovieListView {
        header: HeaderInfo {
            title: "Movie Collection".to_string(),
            subtitle: format!("Browse {} movies", list.movies.len()),
        },
        search_query: list.query.search.clone(),
        facet_chips,
        sort_options,
        results_summary: results_summary(list),
        rows,
        empty_state,
        loading: list.loading,
        refreshing: list.refreshing,
        error: list.error.clone(),
        footer: FooterInfo {
            commands: "j/k: move  open  reviews  search <text>  genre <name>  \
                       sort <newest|oldest|title>  reset  r: refresh  q: quit"
                .to_string(),
        },
    }
}

fn movie_row(movie: &Movie, is_selected: bool) -> MovieRow {
    let tokens = movie.genre_tokens();
    let genre_tags: Vec<String> = tokens
        .iter()
        .take(INLINE_GENRE_TAGS)
        .map(|t| (*t).to_string())
        .collect();
    let extra_genres = tokens.len().saturating_sub(INLINE_GENRE_TAGS);

    MovieRow {
        id: movie.id,
        title: movie.title.clone(),
        year: movie.year,
        director: movie.director.clone(),
        genre_tags,
        extra_genres,
        plot: movie.plot_or_placeholder().to_string(),
        is_selected,
    }
}

/// Builds the "N movie(s) found ..." line under the filter controls.
fn results_summary(list: &crate::app::MovieListScreen) -> String {
    let count = list.visible.len();
    let mut summary = format!(
        "{count} movie{} found",
        if count == 1 { "" } else { "s" }
    );
    if let Some(genre) = &list.query.genre {
        summary.push_str(&format!(" in {genre}"));
    }
    if !list.query.search.is_empty() {
        summary.push_str(&format!(" for \"{}\"", list.query.search));
    }
    summary
}

fn review_list_view(reviews: &crate::app::ReviewListScreen) -> ReviewListView {
    let rows: Vec<ReviewRow> = reviews
        .reviews
        .iter()
        .map(|review| ReviewRow {
            author: review.display_author().to_string(),
            stars: helpers::stars(review.rating),
            comment: review.comment.clone(),
            date: helpers::format_review_date(&review.created_at),
        })
        .collect();

    let empty_state = if !reviews.loading && rows.is_empty() {
        Some(EmptyState {
            message: "No reviews yet".to_string(),
            subtitle: "Be the first to review!".to_string(),
        })
    } else {
        None
    };

    ReviewListView {
        rows,
        empty_state,
        loading: reviews.loading,
        refreshing: reviews.refreshing,
        error: reviews.error.clone(),
        footer: FooterInfo {
            commands: "r: refresh  b: back  q: quit".to_string(),
        },
    }
}

fn add_review_view(form: &crate::app::AddReviewScreen) -> AddReviewView {
    let rating = form.draft.rating;
    let comment_chars = form.draft.comment.chars().count();

    AddReviewView {
        movie_title: form.movie_title.clone(),
        author: if form.draft.author.trim().is_empty() {
            ANONYMOUS_AUTHOR.to_string()
        } else {
            form.draft.author.clone()
        },
        rating_stars: helpers::stars(rating),
        rating_text: if rating > 0 {
            format!("{rating} out of 5 stars")
        } else {
            "No rating selected".to_string()
        },
        comment: form.draft.comment.clone(),
        comment_count: format!("{comment_chars}/{MAX_COMMENT_LEN} characters"),
        submitting: form.submitting,
        error: form.error.clone(),
        footer: FooterInfo {
            commands: "author <name>  rating <1-5>  comment <text>  submit  b: cancel  q: quit"
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::MovieListScreen;
    use crate::domain::Movie;

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

    fn loaded_list() -> MovieListScreen {
        let mut list = MovieListScreen::new();
        list.set_movies(vec![
            movie(1, "Heat", 1995, "Crime, Drama, Thriller"),
            movie(2, "Alien", 1979, "Horror"),
        ]);
        list
    }

    #[test]
    fn all_movies_chip_is_active_without_a_selection() {
        let view = movie_list_view(&loaded_list());
        assert_eq!(view.facet_chips[0].label, "All Movies");
        assert!(view.facet_chips[0].active);
    }

    #[test]
    fn selected_facet_chip_is_flagged() {
        let mut list = loaded_list();
        list.toggle_genre("Horror");
        let view = movie_list_view(&list);
        assert!(!view.facet_chips[0].active);
        let horror = view
            .facet_chips
            .iter()
            .find(|chip| chip.label == "Horror")
            .unwrap();
        assert!(horror.active);
    }

    #[test]
    fn genre_tags_collapse_beyond_two() {
        let view = movie_list_view(&loaded_list());
        let heat = view.rows.iter().find(|row| row.id == 1).unwrap();
        assert_eq!(heat.genre_tags, vec!["Crime", "Drama"]);
        assert_eq!(heat.extra_genres, 1);
    }

    #[test]
    fn results_summary_mentions_active_filters() {
        let mut list = loaded_list();
        assert_eq!(results_summary(&list), "2 movies found");

        list.toggle_genre("Crime");
        list.set_search("heat".to_string());
        assert_eq!(results_summary(&list), "1 movie found in Crime for \"heat\"");
    }

    #[test]
    fn empty_state_reflects_the_query() {
        let mut list = loaded_list();
        list.set_search("zzz".to_string());
        let view = movie_list_view(&list);
        let empty = view.empty_state.unwrap();
        assert_eq!(empty.message, "No movies found");
        assert_eq!(empty.subtitle, "No results for \"zzz\"");
    }

    #[test]
    fn no_empty_state_while_loading() {
        let list = MovieListScreen::new();
        let view = movie_list_view(&list);
        assert!(view.empty_state.is_none());
    }
}
