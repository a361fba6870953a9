//! Four W's Core — shared domain abstractions.
//!
//! This crate defines the answer categories, the error type, and the
//! determinism seams (clock, RNG) that the catalog, round, and session
//! crates depend on. It contains no game rules of its own.

pub mod aggregate;
pub mod category;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod feed;
pub mod rng;
