//! Foundational data structures, error types, and store kind definitions.

pub mod error;
pub mod kinds;
pub mod models;
