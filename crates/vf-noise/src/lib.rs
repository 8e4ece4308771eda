//! vf-noise: aerodynamic and hydrodynamic valve noise prediction.
//!
//! Two independent models share one result shape:
//! - gas/steam, five flow states from subsonic to fully choked jet
//! - liquid, turbulent plus cavitating excitation
//!
//! Inputs are plain normalized numbers (kPa absolute, K, kg/h, mm) handed
//! over by the sizing layer; the crate depends on nothing above vf-fluids
//! and can be driven standalone.

pub mod gas;
pub mod input;
pub mod liquid;
pub mod result;
pub mod transmission;

pub use gas::predict_gas;
pub use input::{GasNoiseInput, LiquidNoiseInput, PipeMaterial};
pub use liquid::predict_liquid;
pub use result::{NoiseResult, NoiseWarning};
