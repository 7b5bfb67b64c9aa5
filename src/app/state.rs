//! Application state: the navigation stack and fetch sequencing.
//!
//! [`AppState`] owns the stack of screens and the monotonically increasing
//! request-id counter shared by all fetches. The bottom of the stack is always
//! the movie list; screens above it are pushed by navigation events and popped
//! by `Back`. Screens communicate only through explicit navigation values
//! (movie id, movie title) carried by the pushed screen's constructor.
//!
//! # Fetch Sequencing
//!
//! Every dispatched request gets a fresh id from [`next_request_id`]
//! (AppState::next_request_id). A screen records only its *latest* pending id;
//! when a response arrives, the event handler looks up the screen whose pending
//! id matches and applies it there. A response whose id matches no screen —
//! because a newer fetch superseded it, or its screen was popped — is discarded.
//! This is what makes overlapping refreshes last-request-wins without any
//! cancellation machinery.

use crate::app::screens::{MovieListScreen, Screen};

/// Central application state container.
///
/// Holds the navigation stack and the fetch-id counter. All mutation happens
/// through the event handler; view models are computed on demand from
/// snapshots of this state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Navigation stack; index 0 is the movie list and is never popped.
    pub screens: Vec<Screen>,

    /// Last allocated fetch request id.
    fetch_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates the initial state: a movie list screen waiting for its first load.
    #[must_use]
    pub fn new() -> Self {
        Self {
            screens: vec![Screen::MovieList(MovieListScreen::new())],
            fetch_seq: 0,
        }
    }

    /// Returns the screen currently on top of the stack.
    #[must_use]
    pub fn current(&self) -> &Screen {
        self.screens.last().expect("navigation stack is never empty")
    }

    /// Returns the screen currently on top of the stack, mutably.
    pub fn current_mut(&mut self) -> &mut Screen {
        self.screens
            .last_mut()
            .expect("navigation stack is never empty")
    }

    /// Pushes a screen onto the navigation stack.
    pub fn push(&mut self, screen: Screen) {
        tracing::debug!(screen = screen.name(), depth = self.screens.len() + 1, "pushing screen");
        self.screens.push(screen);
    }

    /// Pops the top screen, refusing to pop the root movie list.
    ///
    /// Returns `true` if a screen was popped.
    pub fn pop(&mut self) -> bool {
        if self.screens.len() <= 1 {
            return false;
        }
        let popped = self.screens.pop();
        tracing::debug!(
            screen = popped.as_ref().map(Screen::name).unwrap_or(""),
            depth = self.screens.len(),
            "popped screen"
        );
        true
    }

    /// Allocates the next fetch request id.
    ///
    /// Ids are unique for the lifetime of the state and strictly increasing,
    /// which is what the staleness check relies on.
    pub fn next_request_id(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::MovieDetailScreen;

    #[test]
    fn starts_with_a_loading_movie_list() {
        let state = AppState::new();
        assert_eq!(state.screens.len(), 1);
        match state.current() {
            Screen::MovieList(list) => assert!(list.loading),
            other => panic!("unexpected screen: {}", other.name()),
        }
    }

    #[test]
    fn root_screen_cannot_be_popped() {
        let mut state = AppState::new();
        assert!(!state.pop());
        assert_eq!(state.screens.len(), 1);
    }

    #[test]
    fn push_and_pop_walk_the_stack() {
        let mut state = AppState::new();
        state.push(Screen::MovieDetail(MovieDetailScreen::new(7)));
        assert_eq!(state.current().name(), "detail");
        assert!(state.pop());
        assert_eq!(state.current().name(), "movies");
    }

    #[test]
    fn request_ids_are_strictly_increasing() {
        let mut state = AppState::new();
        let a = state.next_request_id();
        let b = state.next_request_id();
        assert!(b > a);
    }
}
