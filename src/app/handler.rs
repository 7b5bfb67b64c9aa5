//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! fetch completions, translating them into state changes and action sequences.
//! It is the primary control flow coordinator for the client.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the runtime shim or the fetch channel
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via screen methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Query**: `Search`, `ToggleGenre`, `ClearGenre`, `Sort`, `ResetFilters` —
//!   every one re-runs the catalog engine immediately
//! - **Navigation**: `OpenDetail`, `OpenReviews`, `OpenAddReview`, `Back`
//! - **Cursor**: `CursorDown`, `CursorUp`
//! - **Form**: `Author`, `Rating`, `Comment`, `Submit`
//! - **Lifecycle**: `Init`, `Refresh`, `Quit`
//! - **Fetch**: `Fetch` wrapping a [`FetchResponse`]
//!
//! # Staleness
//!
//! Fetch responses are applied only to the screen whose `pending_fetch` id
//! matches the response's id. Anything else — a response superseded by a newer
//! fetch, or one whose screen was popped — is logged and dropped, which makes
//! overlapping loads last-request-wins.

use crate::app::actions::Action;
use crate::app::screens::{AddReviewScreen, MovieDetailScreen, ReviewListScreen, Screen};
use crate::app::state::AppState;
use crate::catalog::SortMode;
use crate::domain::error::{MarqueeError, Result};
use crate::fetch::{FetchRequest, FetchResponse};

/// Events triggered by user input or fetch completions.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Starts the initial movie list fetch. Sent once after startup.
    Init,

    /// Moves the list cursor down by one row (wraps to top).
    CursorDown,
    /// Moves the list cursor up by one row (wraps to bottom).
    CursorUp,

    /// Replaces the free-text search query.
    Search(String),
    /// Toggles a genre facet (selecting the selected facet clears it).
    ToggleGenre(String),
    /// Clears the genre filter ("All Movies").
    ClearGenre,
    /// Switches the sort order.
    Sort(SortMode),
    /// Restores the default query parameters.
    ResetFilters,

    /// Opens the detail screen for the movie under the cursor.
    OpenDetail,
    /// Opens the review list for the current movie.
    OpenReviews,
    /// Opens the add-review form for the currently loaded movie.
    OpenAddReview,
    /// Pops the current screen off the navigation stack.
    Back,

    /// Re-fetches the current screen's data.
    Refresh,
    /// Exits the client.
    Quit,

    /// Sets the form's author field.
    Author(String),
    /// Sets the form's rating (1–5; anything else fails validation on submit).
    Rating(u8),
    /// Sets the form's comment field.
    Comment(String),
    /// Validates the form and submits the review.
    Submit,

    /// Wraps a completed fetch from the background executor.
    Fetch(FetchResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls screen mutation
/// methods, and collects actions to be executed by the runtime shim.
///
/// # Returns
///
/// A pair of (`should_render`, actions). `should_render` is `true` when the
/// event changed visible state. The action vector may be empty.
///
/// # Errors
///
/// Reserved for state transitions that can fail; the current set of events is
/// total and always returns `Ok`.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::Init => Ok(fetch_movies(state, false)),

        Event::CursorDown => {
            if let Screen::MovieList(list) = state.current_mut() {
                list.move_selection_down();
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::CursorUp => {
            if let Screen::MovieList(list) = state.current_mut() {
                list.move_selection_up();
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }

        Event::Search(query) => {
            if let Screen::MovieList(list) = state.current_mut() {
                tracing::trace!(query = %query, "search query updated");
                list.set_search(query.clone());
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::ToggleGenre(facet) => {
            if let Screen::MovieList(list) = state.current_mut() {
                list.toggle_genre(facet);
                tracing::debug!(selected = ?list.query.genre, "genre filter toggled");
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::ClearGenre => {
            if let Screen::MovieList(list) = state.current_mut() {
                list.clear_genre();
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::Sort(sort) => {
            if let Screen::MovieList(list) = state.current_mut() {
                list.set_sort(*sort);
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::ResetFilters => {
            if let Screen::MovieList(list) = state.current_mut() {
                list.reset_filters();
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }

        Event::OpenDetail => {
            let Some(movie_id) = selected_movie_id(state) else {
                tracing::debug!("no movie selected");
                return Ok((false, vec![]));
            };

            let request_id = state.next_request_id();
            let mut screen = MovieDetailScreen::new(movie_id);
            screen.pending_fetch = Some(request_id);
            state.push(Screen::MovieDetail(screen));

            Ok((
                true,
                vec![Action::Dispatch(FetchRequest::Movie {
                    request_id,
                    movie_id,
                })],
            ))
        }

        Event::OpenReviews => {
            let movie_id = match state.current() {
                Screen::MovieList(list) => list.selected_movie().map(|m| m.id),
                Screen::MovieDetail(detail) => Some(detail.movie_id),
                _ => None,
            };
            let Some(movie_id) = movie_id else {
                tracing::debug!("no movie to show reviews for");
                return Ok((false, vec![]));
            };

            Ok(push_review_list(state, movie_id))
        }

        Event::OpenAddReview => {
            // The form header needs the title, so the detail fetch must have
            // resolved before the form can open.
            let params = match state.current() {
                Screen::MovieDetail(detail) => detail
                    .movie
                    .as_ref()
                    .map(|movie| (detail.movie_id, movie.title.clone())),
                _ => None,
            };
            let Some((movie_id, movie_title)) = params else {
                tracing::debug!("no loaded movie to review");
                return Ok((false, vec![]));
            };

            state.push(Screen::AddReview(AddReviewScreen::new(movie_id, movie_title)));
            Ok((true, vec![]))
        }

        Event::Back => {
            if state.pop() {
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }

        Event::Refresh => match state.current() {
            Screen::MovieList(_) => Ok(fetch_movies(state, true)),
            Screen::ReviewList(_) => Ok(fetch_reviews_again(state)),
            Screen::MovieDetail(_) => Ok(fetch_detail_again(state)),
            Screen::AddReview(_) => Ok((false, vec![])),
        },

        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::Author(author) => {
            if let Screen::AddReview(form) = state.current_mut() {
                form.draft.author = author.clone();
                form.error = None;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::Rating(rating) => {
            if let Screen::AddReview(form) = state.current_mut() {
                form.draft.rating = *rating;
                form.error = None;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::Comment(comment) => {
            if let Screen::AddReview(form) = state.current_mut() {
                form.draft.comment = comment.clone();
                form.error = None;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::Submit => Ok(submit_review(state)),

        Event::Fetch(response) => Ok(apply_fetch(state, response)),
    }
}

/// Starts (or restarts) the movie list fetch.
///
/// `refresh` distinguishes a manual pull-to-refresh from the initial load; the
/// former keeps the current list on screen while the fetch runs.
fn fetch_movies(state: &mut AppState, refresh: bool) -> (bool, Vec<Action>) {
    let request_id = state.next_request_id();

    for screen in &mut state.screens {
        if let Screen::MovieList(list) = screen {
            if refresh {
                list.refreshing = true;
            } else {
                list.loading = true;
            }
            list.pending_fetch = Some(request_id);

            return (
                true,
                vec![Action::Dispatch(FetchRequest::Movies { request_id })],
            );
        }
    }

    (false, vec![])
}

/// Pushes a review list screen and starts its fetch.
fn push_review_list(state: &mut AppState, movie_id: i64) -> (bool, Vec<Action>) {
    let request_id = state.next_request_id();
    let mut screen = ReviewListScreen::new(movie_id);
    screen.pending_fetch = Some(request_id);
    state.push(Screen::ReviewList(screen));

    (
        true,
        vec![Action::Dispatch(FetchRequest::Reviews {
            request_id,
            movie_id,
        })],
    )
}

/// Re-fetches the review list currently on top of the stack.
fn fetch_reviews_again(state: &mut AppState) -> (bool, Vec<Action>) {
    let request_id = state.next_request_id();
    if let Screen::ReviewList(reviews) = state.current_mut() {
        reviews.refreshing = true;
        reviews.pending_fetch = Some(request_id);
        let movie_id = reviews.movie_id;
        return (
            true,
            vec![Action::Dispatch(FetchRequest::Reviews {
                request_id,
                movie_id,
            })],
        );
    }
    (false, vec![])
}

/// Re-fetches the movie on the detail screen currently on top of the stack.
fn fetch_detail_again(state: &mut AppState) -> (bool, Vec<Action>) {
    let request_id = state.next_request_id();
    if let Screen::MovieDetail(detail) = state.current_mut() {
        detail.loading = true;
        detail.error = None;
        detail.pending_fetch = Some(request_id);
        let movie_id = detail.movie_id;
        return (
            true,
            vec![Action::Dispatch(FetchRequest::Movie {
                request_id,
                movie_id,
            })],
        );
    }
    (false, vec![])
}

/// Validates the form and dispatches the review creation request.
fn submit_review(state: &mut AppState) -> (bool, Vec<Action>) {
    let (movie_id, review) = match state.current_mut() {
        Screen::AddReview(form) => {
            if form.submitting {
                tracing::debug!("submission already in flight");
                return (false, vec![]);
            }
            match form.draft.validate() {
                Ok(review) => (form.movie_id, review),
                Err(error) => {
                    form.error = Some(user_message(&error));
                    return (true, vec![]);
                }
            }
        }
        _ => return (false, vec![]),
    };

    let request_id = state.next_request_id();
    if let Screen::AddReview(form) = state.current_mut() {
        form.submitting = true;
        form.error = None;
        form.pending_fetch = Some(request_id);
    }

    tracing::debug!(movie_id, rating = review.rating, "submitting review");

    (
        true,
        vec![Action::Dispatch(FetchRequest::CreateReview {
            request_id,
            movie_id,
            review,
        })],
    )
}

/// Applies a completed fetch to the screen that is still waiting for it.
///
/// Responses whose id matches no screen's pending fetch are discarded: either
/// a newer request superseded them, or their screen has been popped.
fn apply_fetch(state: &mut AppState, response: &FetchResponse) -> (bool, Vec<Action>) {
    match response {
        FetchResponse::Movies { request_id, result } => {
            for screen in &mut state.screens {
                if let Screen::MovieList(list) = screen {
                    if list.pending_fetch != Some(*request_id) {
                        continue;
                    }
                    list.pending_fetch = None;
                    match result {
                        Ok(movies) => {
                            tracing::debug!(count = movies.len(), "movie list loaded");
                            list.set_movies(movies.clone());
                        }
                        Err(message) => {
                            // A failed refresh keeps whatever list is already loaded.
                            list.loading = false;
                            list.refreshing = false;
                            list.error = Some(message.clone());
                        }
                    }
                    return (true, vec![]);
                }
            }
            discard_stale(response)
        }

        FetchResponse::Movie { request_id, result } => {
            for screen in &mut state.screens {
                if let Screen::MovieDetail(detail) = screen {
                    if detail.pending_fetch != Some(*request_id) {
                        continue;
                    }
                    detail.pending_fetch = None;
                    detail.loading = false;
                    match result {
                        Ok(movie) => {
                            detail.movie = Some(movie.clone());
                            detail.error = None;
                        }
                        Err(message) => {
                            detail.error = Some(message.clone());
                        }
                    }
                    return (true, vec![]);
                }
            }
            discard_stale(response)
        }

        FetchResponse::Reviews { request_id, result } => {
            for screen in &mut state.screens {
                if let Screen::ReviewList(reviews) = screen {
                    if reviews.pending_fetch != Some(*request_id) {
                        continue;
                    }
                    reviews.pending_fetch = None;
                    reviews.loading = false;
                    reviews.refreshing = false;
                    match result {
                        Ok(loaded) => {
                            tracing::debug!(count = loaded.len(), "reviews loaded");
                            reviews.reviews = loaded.clone();
                            reviews.error = None;
                        }
                        Err(message) => {
                            reviews.error = Some(message.clone());
                        }
                    }
                    return (true, vec![]);
                }
            }
            discard_stale(response)
        }

        FetchResponse::ReviewCreated {
            request_id,
            movie_id,
            result,
        } => {
            let matches_top = matches!(
                state.current(),
                Screen::AddReview(form) if form.pending_fetch == Some(*request_id)
            );
            if !matches_top {
                return discard_stale(response);
            }

            match result {
                Ok(review_id) => {
                    tracing::info!(review_id, movie_id, "review created");
                    // The form never stays up after a successful submit; the
                    // review list takes its place on the stack.
                    state.pop();
                    push_review_list(state, *movie_id)
                }
                Err(message) => {
                    tracing::warn!(%message, "review submission failed");
                    if let Screen::AddReview(form) = state.current_mut() {
                        form.submitting = false;
                        form.pending_fetch = None;
                        form.error =
                            Some("Failed to submit review. Please try again.".to_string());
                    }
                    (true, vec![])
                }
            }
        }
    }
}

fn discard_stale(response: &FetchResponse) -> (bool, Vec<Action>) {
    tracing::debug!(
        request_id = response.request_id(),
        "discarding stale fetch response"
    );
    (false, vec![])
}

/// Extracts the user-facing message from a validation failure.
fn user_message(error: &MarqueeError) -> String {
    match error {
        MarqueeError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}

fn selected_movie_id(state: &AppState) -> Option<i64> {
    match state.current() {
        Screen::MovieList(list) => list.selected_movie().map(|m| m.id),
        _ => None,
    }
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Init => "Init",
        Event::CursorDown => "CursorDown",
        Event::CursorUp => "CursorUp",
        Event::Search(_) => "Search",
        Event::ToggleGenre(_) => "ToggleGenre",
        Event::ClearGenre => "ClearGenre",
        Event::Sort(_) => "Sort",
        Event::ResetFilters => "ResetFilters",
        Event::OpenDetail => "OpenDetail",
        Event::OpenReviews => "OpenReviews",
        Event::OpenAddReview => "OpenAddReview",
        Event::Back => "Back",
        Event::Refresh => "Refresh",
        Event::Quit => "Quit",
        Event::Author(_) => "Author",
        Event::Rating(_) => "Rating",
        Event::Comment(_) => "Comment",
        Event::Submit => "Submit",
        Event::Fetch(_) => "Fetch",
    }
}
