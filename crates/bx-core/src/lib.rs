//! bx-core: stable foundation for brixcalc.
//!
//! Contains:
//! - units (uom SI types + constructors, calculator defaults)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BxError, BxResult};
pub use numeric::*;
pub use units::*;
