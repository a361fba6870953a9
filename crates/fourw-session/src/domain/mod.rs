//! Session domain model.

pub mod aggregates;
pub mod commands;
pub mod config;
pub mod events;
pub mod summary;
