//! vf-core: stable foundation for valveflow.
//!
//! Contains:
//! - constants (IEC 60534 numerical constants for the canonical unit set)
//! - convert (engineering-unit tags + total conversions to canonical units)
//! - units (uom SI types + constructors for typed seams)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod constants;
pub mod convert;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use convert::*;
pub use error::{CoreError, CoreResult};
pub use numeric::*;
