//! Thin REST client for the catalog backend.
//!
//! One method per endpoint, all returning fully resolved payloads: envelope
//! unwrapping and HTTP status handling happen here so callers never see a
//! partial or error payload. The client holds a single pooled `reqwest::Client`
//! configured from [`Config`](crate::Config) and is cheap to clone.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::api::envelope::{ApiEnvelope, CreatedReview};
use crate::domain::error::{MarqueeError, Result};
use crate::domain::{Movie, NewReview, Review};
use crate::Config;

/// HTTP client for the movie catalog API.
///
/// Endpoints consumed:
///
/// - `GET  {base}/movies`
/// - `GET  {base}/movies/{id}`
/// - `GET  {base}/movies/{id}/reviews`
/// - `POST {base}/movies/{id}/reviews`
/// - `GET  {origin}/health` (reachability probe, outside the API prefix)
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client from configuration.
    ///
    /// Applies the configured connect and request timeouts and a crate
    /// user agent. A trailing slash on the base URL is tolerated.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("marquee/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Lists every movie in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an
    /// envelope with `success: false`.
    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.get_json(&self.endpoint("/movies")).await
    }

    /// Fetches a single movie by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the backend reports the
    /// movie as missing (typically a 404 with a `message` in the envelope).
    pub async fn movie(&self, id: i64) -> Result<Movie> {
        self.get_json(&self.endpoint(&format!("/movies/{id}"))).await
    }

    /// Lists the reviews attached to a movie.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an
    /// envelope with `success: false`.
    pub async fn movie_reviews(&self, id: i64) -> Result<Vec<Review>> {
        self.get_json(&self.endpoint(&format!("/movies/{id}/reviews")))
            .await
    }

    /// Creates a review for a movie and returns the new review's identifier.
    ///
    /// The payload must come from [`ReviewDraft::validate`](crate::domain::ReviewDraft::validate),
    /// which enforces the backend contract (rating 1–5, comment 1–500 chars).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the backend rejects the
    /// review.
    pub async fn create_review(&self, movie_id: i64, review: &NewReview) -> Result<CreatedReview> {
        let url = self.endpoint(&format!("/movies/{movie_id}/reviews"));
        tracing::debug!(%url, rating = review.rating, "posting review");

        let response = self.http.post(&url).json(review).send().await?;
        Self::resolve(response).await
    }

    /// Probes backend reachability.
    ///
    /// Hits the `/health` endpoint at the server origin (the API prefix is
    /// stripped from the base URL). Any error is reported as unreachable;
    /// this never fails hard.
    pub async fn health(&self) -> bool {
        let url = health_url(&self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(%url, error = %e, "cannot reach backend");
                false
            }
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "fetching");
        let response = self.http.get(url).send().await?;
        Self::resolve(response).await
    }

    /// Turns an HTTP response into a fully resolved payload.
    ///
    /// Non-success statuses are reported with the envelope's `message` when
    /// the error body carries one, mirroring how the backend phrases its own
    /// failures (e.g. "Movie not found" on a 404).
    async fn resolve<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| describe_status(status));
            tracing::debug!(status = status.as_u16(), %message, "request failed");
            return Err(MarqueeError::Api {
                status: Some(status.as_u16()),
                message,
            });
        }

        let envelope: ApiEnvelope<T> = response.json().await?;
        envelope.into_data()
    }
}

/// Derives the health probe URL from the API base URL.
///
/// The health endpoint lives at the server origin, outside the `/api` prefix,
/// so `http://host:5000/api` probes `http://host:5000/health`.
#[must_use]
pub fn health_url(base_url: &str) -> String {
    let origin = base_url
        .trim_end_matches('/')
        .trim_end_matches("/api");
    format!("{origin}/health")
}

fn describe_status(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let config = Config {
            base_url: "http://127.0.0.1:5000/api/".to_string(),
            ..Config::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint("/movies/3/reviews"),
            "http://127.0.0.1:5000/api/movies/3/reviews"
        );
    }

    #[test]
    fn health_url_strips_api_prefix() {
        assert_eq!(
            health_url("http://127.0.0.1:5000/api"),
            "http://127.0.0.1:5000/health"
        );
        assert_eq!(
            health_url("http://127.0.0.1:5000/api/"),
            "http://127.0.0.1:5000/health"
        );
    }

    #[test]
    fn health_url_without_api_prefix_appends_directly() {
        assert_eq!(
            health_url("http://127.0.0.1:5000"),
            "http://127.0.0.1:5000/health"
        );
    }
}
