//! Four W's — game session.
//!
//! Responsible for cumulative score and round count, progression from
//! scenario to scenario to story to the end of the game, and the end-of-game
//! summary. Every transition is recorded as a `SessionEvent` and forwarded to
//! the embedding shell through the `Presentation` trait.

pub mod application;
pub mod domain;
pub mod presentation;
