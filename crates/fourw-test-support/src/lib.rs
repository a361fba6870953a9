//! Shared test doubles and catalog fixtures for the Four W's matching quiz.

mod clock;
mod feed;
pub mod fixtures;
mod rng;

pub use clock::{FixedClock, fixed_clock};
pub use feed::{FailingFeed, StaticFeed};
pub use rng::{MockRng, SequenceRng};
