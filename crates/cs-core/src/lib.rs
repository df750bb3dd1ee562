//! cs-core: stable foundation for circuitsafe.
//!
//! Contains:
//! - units (uom SI types + constructors, duty cycle percentage)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
