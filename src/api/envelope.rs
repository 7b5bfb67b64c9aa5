//! The backend's JSON response envelope.
//!
//! Every payload the catalog backend serves — movie lists, single movies,
//! review lists, creation receipts — arrives wrapped in the same envelope:
//! `{ success, message?, data, count? }`. This module deserializes the wrapper
//! and converts it into a [`Result`], so the rest of the client only ever sees
//! fully resolved payloads or errors.

use serde::Deserialize;

use crate::domain::error::{MarqueeError, Result};

/// The outer wrapper around every backend payload.
///
/// `data` is optional at the serde level because failure envelopes commonly
/// omit it; [`into_data`](Self::into_data) enforces its presence on success.
///
/// # Examples
///
/// ```
/// use marquee::api::ApiEnvelope;
///
/// let envelope: ApiEnvelope<Vec<i64>> =
///     serde_json::from_str(r#"{"success":true,"data":[1,2,3],"count":3}"#).unwrap();
/// assert_eq!(envelope.into_data().unwrap(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// Whether the backend considers the request successful.
    pub success: bool,

    /// Human-readable message, usually only present on failure.
    #[serde(default)]
    pub message: Option<String>,

    /// The wrapped payload; absent on most failure envelopes.
    #[serde(default)]
    pub data: Option<T>,

    /// Item count for list payloads; informational only.
    #[serde(default)]
    pub count: Option<u64>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload, turning an unsuccessful envelope into an error.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Api`] when `success` is false or `data` is
    /// missing, carrying the envelope's `message` when it has one.
    pub fn into_data(self) -> Result<T> {
        if self.success {
            self.data.ok_or_else(|| MarqueeError::Api {
                status: None,
                message: "response envelope is missing data".to_string(),
            })
        } else {
            Err(MarqueeError::Api {
                status: None,
                message: self
                    .message
                    .unwrap_or_else(|| "backend reported failure".to_string()),
            })
        }
    }
}

/// Receipt returned by the review creation endpoint.
///
/// The backend answers `POST /movies/{id}/reviews` with `{ "reviewId": n }`
/// inside the usual envelope; note the camelCase field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreatedReview {
    /// Identifier of the freshly created review.
    #[serde(rename = "reviewId")]
    pub review_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Movie;

    #[test]
    fn success_envelope_unwraps_payload() {
        let envelope: ApiEnvelope<Vec<Movie>> = serde_json::from_str(
            r#"{"success":true,"data":[{"id":1,"title":"Heat","year":1995,"genre":"Crime","director":"Michael Mann"}],"count":1}"#,
        )
        .unwrap();
        assert_eq!(envelope.count, Some(1));
        let movies = envelope.into_data().unwrap();
        assert_eq!(movies[0].title, "Heat");
    }

    #[test]
    fn failure_envelope_surfaces_message() {
        let envelope: ApiEnvelope<Movie> =
            serde_json::from_str(r#"{"success":false,"message":"Movie not found","data":null}"#)
                .unwrap();
        let err = envelope.into_data().unwrap_err();
        assert!(err.to_string().contains("Movie not found"));
    }

    #[test]
    fn failure_envelope_without_data_field_parses() {
        let envelope: ApiEnvelope<Vec<Movie>> =
            serde_json::from_str(r#"{"success":false,"message":"oops"}"#).unwrap();
        assert!(envelope.into_data().is_err());
    }

    #[test]
    fn success_without_data_is_an_error() {
        let envelope: ApiEnvelope<Movie> =
            serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(envelope.into_data().is_err());
    }

    #[test]
    fn created_review_uses_camel_case_field() {
        let envelope: ApiEnvelope<CreatedReview> =
            serde_json::from_str(r#"{"success":true,"data":{"reviewId":42}}"#).unwrap();
        assert_eq!(envelope.into_data().unwrap().review_id, 42);
    }
}
