//! Observability: tracing subscriber setup.
//!
//! The crate instruments its layers with `tracing` spans and events — the
//! catalog engine, the event handler, and every fetch. This module wires those
//! to a `tracing-subscriber` stderr writer with an environment-overridable
//! filter.

pub mod init;

pub use init::init_tracing;
