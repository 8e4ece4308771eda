//! vf-piping: pipe dimensions and piping-geometry correction factors.
//!
//! Resolves the internal diameters adjacent to the valve (explicit
//! dimensions → schedule table → seat bore), computes the fitting
//! resistance coefficients, and the FP/FLP/xTP corrections of
//! IEC 60534-2-1.

pub mod geometry;
pub mod schedule;

pub use geometry::PipeGeometry;
pub use schedule::{schedule_entry, ScheduleEntry};
