//! Fetch executor running requests on background tasks.
//!
//! The executor owns the [`ApiClient`] and a channel back to the event loop.
//! Dispatching a request spawns a tokio task; the task runs the HTTP call and
//! posts a [`FetchResponse`] over the channel when it completes. Nothing here
//! blocks the UI, and nothing is cancelled: staleness is resolved by the event
//! handler comparing request ids, not by aborting work in flight.

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::fetch::messages::{FetchRequest, FetchResponse};

/// Executes fetch requests against the backend on background tasks.
///
/// Cheap to clone; every clone posts responses to the same receiver.
#[derive(Debug, Clone)]
pub struct FetchWorker {
    client: ApiClient,
    tx: mpsc::UnboundedSender<FetchResponse>,
}

impl FetchWorker {
    /// Creates an executor and the receiver end of its response channel.
    ///
    /// The caller drives the receiver from its event loop, wrapping each
    /// response in an `Event::Fetch` for the event handler.
    #[must_use]
    pub fn new(client: ApiClient) -> (Self, mpsc::UnboundedReceiver<FetchResponse>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { client, tx }, rx)
    }

    /// Spawns a background task executing the request.
    ///
    /// The response is posted to the channel on completion; if the receiver is
    /// gone (event loop shut down), the response is dropped silently.
    pub fn dispatch(&self, request: FetchRequest) {
        tracing::debug!(request = ?request, "dispatching fetch");

        let client = self.client.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let response = execute(&client, request).await;
            if tx.send(response).is_err() {
                tracing::debug!("event loop gone, dropping fetch response");
            }
        });
    }
}

/// Runs a single request to completion and shapes the response.
///
/// Errors are flattened to display strings here; the screens only ever show
/// them to the user.
async fn execute(client: &ApiClient, request: FetchRequest) -> FetchResponse {
    match request {
        FetchRequest::Movies { request_id } => {
            let result = client.list_movies().await.map_err(|e| e.to_string());
            log_outcome("list movies", request_id, result.as_ref().err());
            FetchResponse::Movies { request_id, result }
        }
        FetchRequest::Movie { request_id, movie_id } => {
            let result = client.movie(movie_id).await.map_err(|e| e.to_string());
            log_outcome("get movie", request_id, result.as_ref().err());
            FetchResponse::Movie { request_id, result }
        }
        FetchRequest::Reviews { request_id, movie_id } => {
            let result = client
                .movie_reviews(movie_id)
                .await
                .map_err(|e| e.to_string());
            log_outcome("list reviews", request_id, result.as_ref().err());
            FetchResponse::Reviews { request_id, result }
        }
        FetchRequest::CreateReview {
            request_id,
            movie_id,
            review,
        } => {
            let result = client
                .create_review(movie_id, &review)
                .await
                .map(|receipt| receipt.review_id)
                .map_err(|e| e.to_string());
            log_outcome("create review", request_id, result.as_ref().err());
            FetchResponse::ReviewCreated {
                request_id,
                movie_id,
                result,
            }
        }
    }
}

fn log_outcome(operation: &str, request_id: u64, error: Option<&String>) {
    match error {
        Some(message) => {
            tracing::warn!(operation, request_id, %message, "fetch failed");
        }
        None => {
            tracing::debug!(operation, request_id, "fetch completed");
        }
    }
}
