//! Engineering input data model.

use serde::{Deserialize, Serialize};
use vf_core::convert::{DensityUnit, FlowUnit, PressureUnit, TemperatureUnit, ViscosityUnit};

/// Fluid family, selecting the formula table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluidType {
    Liquid,
    Gas,
    Steam,
}

/// Inherent flow-characteristic curve of the trim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowCharacteristic {
    EqualPercentage,
    Linear,
    QuickOpening,
}

/// Valve geometry and trim factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValveGeometry {
    /// Nominal size DN, also the schedule-table key.
    pub nominal_dn: u32,
    /// Seat bore in mm; defaults to the nominal size when absent.
    pub seat_diameter_mm: Option<f64>,
    /// Pressure-recovery factor FL, (0,1].
    pub fl: f64,
    /// Pressure-differential ratio factor xT (gas/steam).
    pub xt: f64,
    /// Valve style modifier Fd.
    pub fd: f64,
    /// Rated flow coefficient of the selected valve.
    pub rated_kv: f64,
    /// Inherent rangeability R, > 1.
    pub rangeability: f64,
    pub characteristic: FlowCharacteristic,
}

impl ValveGeometry {
    pub fn seat_mm(&self) -> f64 {
        self.seat_diameter_mm.unwrap_or(self.nominal_dn as f64)
    }
}

/// Explicit adjacent-pipe dimensions, overriding the schedule table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeDimensions {
    pub outer_diameter_mm: f64,
    pub wall_thickness_mm: f64,
}

/// Gas/steam properties the caller supplies.
///
/// Molecular weight may be omitted when a normal density tag carries the
/// same information; it is then derived by the ideal-gas law.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasProperties {
    pub molecular_weight: Option<f64>,
    /// Compressibility factor Z; 1.0 for ideal behavior.
    pub compressibility: f64,
    /// Specific-heat ratio γ.
    pub gamma: f64,
}

/// Immutable record of raw engineering input for one sizing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineeringInput {
    pub fluid: FluidType,

    pub temperature: f64,
    pub temperature_unit: TemperatureUnit,

    pub flow: f64,
    pub flow_unit: FlowUnit,

    pub inlet_pressure: f64,
    pub inlet_pressure_unit: PressureUnit,
    pub outlet_pressure: f64,
    pub outlet_pressure_unit: PressureUnit,

    pub density: f64,
    pub density_unit: DensityUnit,

    pub viscosity: Option<f64>,
    pub viscosity_unit: Option<ViscosityUnit>,

    pub gas: Option<GasProperties>,

    /// Thermodynamic critical pressure of a liquid, kPa absolute;
    /// water's is assumed when absent.
    pub critical_pressure_kpa: Option<f64>,

    pub valve: ValveGeometry,

    pub upstream_pipe: Option<PipeDimensions>,
    pub downstream_pipe: Option<PipeDimensions>,
}
