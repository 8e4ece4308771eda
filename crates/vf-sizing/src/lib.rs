//! vf-sizing: the IEC 60534-2-1 flow-coefficient engine.
//!
//! Takes raw engineering input (any supported unit tags), normalizes it,
//! determines the flow regime, computes the required Kv/Cv through the
//! per-fluid formula tables, inverts the valve characteristic into a travel
//! percentage, and reports every derived quantity in a flat intermediate
//! record.
//!
//! The whole crate is a pure function of its input: no state is retained
//! between calls and concurrent callers need no synchronization.

pub mod engine;
pub mod error;
pub mod gas;
pub mod input;
pub mod liquid;
pub mod opening;
pub mod result;
pub mod reynolds;
pub mod steam;
pub mod validate;

pub use engine::size;
pub use error::{SizingError, SizingResult};
pub use vf_core::convert::{
    DensityUnit, FlowUnit, PressureUnit, TemperatureUnit, ViscosityUnit,
};
pub use vf_fluids::CavitationState;
pub use input::{
    EngineeringInput, FlowCharacteristic, FluidType, GasProperties, PipeDimensions, ValveGeometry,
};
pub use result::{
    EngineeringResult, FlowRegime, FormulaVariant, IntermediateValues, KvCandidates, SizingIssue,
    SizingWarning, TurbulenceState,
};
