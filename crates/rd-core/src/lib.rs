//! rd-core: stable foundation for resdiv.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers + decade powers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
