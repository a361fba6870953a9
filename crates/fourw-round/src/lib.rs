//! Four W's — a single round.
//!
//! Owns the option pool shown for one scenario or story, the four answer
//! slots the player fills, and the scoring of a submission. Holds no state
//! across rounds.

pub mod engine;
pub mod options;
pub mod score;
pub mod slots;
