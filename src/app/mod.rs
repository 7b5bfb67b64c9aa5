//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! runtime shim (main.rs) and the domain/catalog/fetch layers. It implements
//! the event-driven architecture that powers the interactive client.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Fetch Responses ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`screens`]: Per-screen state containers
//! - [`state`]: Navigation stack and fetch-id sequencing

pub mod actions;
pub mod handler;
pub mod screens;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use screens::{AddReviewScreen, MovieDetailScreen, MovieListScreen, ReviewListScreen, Screen};
pub use state::AppState;
