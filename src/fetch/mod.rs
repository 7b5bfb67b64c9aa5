//! Background fetch layer for asynchronous backend calls.
//!
//! This module keeps all network I/O off the event loop. Screens never await
//! anything: they emit requests, and completed responses come back through the
//! event loop as ordinary events, tagged with the request id that lets the
//! handler discard late arrivals from superseded fetches.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with correlation ids
//! - `handler`: Tokio-backed executor posting responses over an mpsc channel

pub mod handler;
pub mod messages;

pub use handler::FetchWorker;
pub use messages::{FetchRequest, FetchResponse};
