//! vf-fluids: stateless fluid physics for valve sizing.
//!
//! Provides:
//! - water saturation properties (Antoine correlation)
//! - ideal-gas helpers (density, molecular weight, sound speed)
//! - sizing factors (FF, Fγ, expansion factor Y)
//! - the shared flow/cavitation boundary module used by both the
//!   flow-coefficient and the noise calculations
//!
//! Everything here is a pure function of its arguments; no state, no I/O.

pub mod boundaries;
pub mod factors;
pub mod gas;
pub mod water;

pub use boundaries::{CavitationState, GasBoundaries, GasFlowState};
