//! Catalog domain types.

pub mod catalog;
pub mod item;
pub mod traversal;
