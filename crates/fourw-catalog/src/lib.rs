//! Four W's — scenario catalog.
//!
//! Responsible for loading the scenario/story feed, validating its shape,
//! and handing out items in play order.

pub mod application;
pub mod domain;
pub mod file_feed;
