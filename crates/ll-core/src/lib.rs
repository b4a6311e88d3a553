//! litelens/crates/ll-core/src/lib.rs
//!
//! The central domain definitions for the LiteLens interaction core:
//! models, error taxonomy, injectable ports, and the read-only post catalog.

pub mod catalog;
pub mod error;
pub mod models;
pub mod traits;

// Re-exporting for easier access in other crates
pub use catalog::*;
pub use error::*;
pub use models::*;
pub use traits::*;
