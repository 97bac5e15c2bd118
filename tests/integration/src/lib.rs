//! Integration test utilities for the subscription marketplace
//!
//! Tests run the real router and services over an in-memory store, so no
//! database is needed.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
pub use memory::MemoryStore;
