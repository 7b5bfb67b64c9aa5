//! Request/response protocol between the app layer and the fetch executor.
//!
//! Every network operation the screens need is expressed as a [`FetchRequest`],
//! executed asynchronously, and answered with a [`FetchResponse`] delivered back
//! to the event loop. Both carry a `request_id` allocated by the app state; the
//! id is how the event handler tells a current response from a stale one when
//! fetches overlap (last-request-wins).

use crate::domain::{Movie, NewReview, Review};

/// A network operation to run against the backend.
///
/// Requests are produced by the event handler as [`Action::Dispatch`]
/// (crate::app::Action::Dispatch) payloads and executed by the fetch executor
/// on a background task. The embedded `request_id` is echoed back verbatim in
/// the matching [`FetchResponse`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    /// Load the full movie list.
    Movies {
        /// Correlation id echoed in the response.
        request_id: u64,
    },

    /// Load a single movie by identifier.
    Movie {
        /// Correlation id echoed in the response.
        request_id: u64,
        /// Movie to load.
        movie_id: i64,
    },

    /// Load the reviews attached to a movie.
    Reviews {
        /// Correlation id echoed in the response.
        request_id: u64,
        /// Movie whose reviews to load.
        movie_id: i64,
    },

    /// Create a review for a movie.
    CreateReview {
        /// Correlation id echoed in the response.
        request_id: u64,
        /// Movie the review belongs to.
        movie_id: i64,
        /// Validated review payload.
        review: NewReview,
    },
}

impl FetchRequest {
    /// Returns the correlation id carried by this request.
    #[must_use]
    pub fn request_id(&self) -> u64 {
        match self {
            Self::Movies { request_id }
            | Self::Movie { request_id, .. }
            | Self::Reviews { request_id, .. }
            | Self::CreateReview { request_id, .. } => *request_id,
        }
    }
}

/// The outcome of a [`FetchRequest`], posted back to the event loop.
///
/// Errors are carried as display strings: by the time a failure reaches the
/// screens it is only ever shown to the user, and strings keep the response
/// type cheap to clone and compare in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResponse {
    /// The movie list finished loading.
    Movies {
        /// Correlation id from the originating request.
        request_id: u64,
        /// The loaded list, or a user-facing error message.
        result: Result<Vec<Movie>, String>,
    },

    /// A single movie finished loading.
    Movie {
        /// Correlation id from the originating request.
        request_id: u64,
        /// The loaded movie, or a user-facing error message.
        result: Result<Movie, String>,
    },

    /// A movie's reviews finished loading.
    Reviews {
        /// Correlation id from the originating request.
        request_id: u64,
        /// The loaded reviews, or a user-facing error message.
        result: Result<Vec<Review>, String>,
    },

    /// A review creation attempt completed.
    ReviewCreated {
        /// Correlation id from the originating request.
        request_id: u64,
        /// Movie the review was submitted for.
        movie_id: i64,
        /// The created review's id, or a user-facing error message.
        result: Result<i64, String>,
    },
}

impl FetchResponse {
    /// Returns the correlation id carried by this response.
    #[must_use]
    pub fn request_id(&self) -> u64 {
        match self {
            Self::Movies { request_id, .. }
            | Self::Movie { request_id, .. }
            | Self::Reviews { request_id, .. }
            | Self::ReviewCreated { request_id, .. } => *request_id,
        }
    }
}
