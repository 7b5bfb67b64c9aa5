//! Actions representing side effects to be executed by the runtime shim.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or fetch
//! completions. Actions bridge pure state transformations and effectful
//! operations — dispatching network requests and terminating the program.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The runtime shim
//! executes them in sequence: fetch dispatches go to the
//! [`FetchWorker`](crate::fetch::FetchWorker), `Quit` ends the event loop.

use crate::fetch::FetchRequest;

/// Commands representing side effects to be executed by the runtime shim.
///
/// Actions are produced by the event handler and executed outside of it. They
/// are the only way state transitions cause I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hands a request to the fetch executor.
    ///
    /// The request already carries its correlation id; the originating screen
    /// has recorded the same id as its pending fetch.
    Dispatch(FetchRequest),

    /// Ends the event loop and exits the client.
    Quit,
}
