//! Result data model: the calculated coefficients, regime findings, and the
//! flat record of every derived quantity.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vf_fluids::CavitationState;

/// Flow regime at the final operating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRegime {
    NonChoked,
    Choked,
}

/// Turbulence classification from the valve Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurbulenceState {
    Turbulent,
    Laminar,
}

/// Which formula of the per-fluid table produced the reported Kv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormulaVariant {
    NonChokedPlain,
    NonChokedFitted,
    ChokedPlain,
    ChokedFitted,
    Laminar,
}

/// All candidate Kv values; the selection logic picks one, the rest stay
/// for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KvCandidates {
    pub non_choked_plain: f64,
    pub non_choked_fitted: f64,
    pub choked_plain: f64,
    pub choked_fitted: f64,
    /// Present only when a Reynolds correction below one was computed.
    pub laminar: Option<f64>,
}

/// Every derived quantity of one sizing call, produced once and never
/// mutated afterwards. Fluid-family-specific entries are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntermediateValues {
    pub p1_kpa: f64,
    pub p2_kpa: f64,
    pub dp_kpa: f64,
    pub t_k: f64,
    pub inlet_density_kg_m3: f64,
    /// Flow on the canonical bases.
    pub q_m3_h: f64,
    pub w_kg_h: f64,

    /// Liquid relative density ρ/ρ₀.
    pub relative_density: Option<f64>,
    /// Liquid saturation pressure at the operating temperature, kPa.
    pub vapor_pressure_kpa: Option<f64>,
    /// Liquid critical-pressure-ratio factor.
    pub ff: Option<f64>,
    /// Liquid pressure-differential ratio Δp/(P1 − Pv).
    pub xf: Option<f64>,
    /// Incipient-cavitation ratio.
    pub xfz: Option<f64>,

    /// Gas/steam pressure-differential ratio Δp/P1.
    pub x: Option<f64>,
    pub f_gamma: Option<f64>,
    pub xt: Option<f64>,
    /// Fitting-corrected xT from the second gas pass.
    pub xtp: Option<f64>,
    pub expansion_factor: Option<f64>,
    pub molecular_weight: Option<f64>,

    pub d_mm: f64,
    pub d1_mm: f64,
    pub d2_mm: f64,
    /// Downstream wall thickness when known; the noise layer needs it.
    pub wall2_mm: Option<f64>,
    pub sum_k: f64,
    pub fp: f64,
    /// Combined recovery factor; liquid paths only.
    pub flp: Option<f64>,
    /// The assumed coefficient the piping factors were seeded with.
    pub ci_seed: f64,

    /// Valve Reynolds number; absent when no viscosity was supplied.
    pub reynolds: Option<f64>,
    pub fr: f64,

    pub candidates: KvCandidates,
}

/// Non-fatal advisory conditions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SizingWarning {
    #[error("Valve opening {percent:.1}% is below 0%: valve is oversized")]
    OpeningBelowZero { percent: f64 },
    #[error("Valve opening {percent:.1}% exceeds 100%: valve is undersized")]
    OpeningAboveFull { percent: f64 },
    #[error("Valve opening {percent:.1}% is outside the 10-90% rangeability margin")]
    OpeningOutsideMargin { percent: f64 },
    #[error("Opening could not be derived for the selected characteristic")]
    OpeningNotDerivable,
    #[error("Outlet velocity {velocity_m_s:.1} m/s exceeds the erosion advisory threshold")]
    ErosionRisk { velocity_m_s: f64 },
    #[error("Operating point is in the constant-cavitation band")]
    ConstantCavitation,
}

/// Out-of-range physical conditions, collected without aborting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SizingIssue {
    #[error("Inlet pressure must be positive (absolute)")]
    InletPressureNotPositive,
    #[error("Outlet pressure must be non-negative (absolute)")]
    OutletPressureNegative,
    #[error("No positive pressure differential across the valve")]
    NoPressureDrop,
    #[error("Inlet pressure is below the fluid vapor pressure")]
    InletBelowVaporPressure,
    #[error("Medium temperature is above the saturation temperature at inlet pressure")]
    TemperatureAboveSaturation,
    #[error("Rated Kv must be positive")]
    RatedKvNotPositive,
    #[error("Rangeability must exceed 1")]
    RangeabilityTooLow,
    #[error("Pressure-recovery factor FL must be within (0, 1]")]
    RecoveryFactorOutOfRange,
}

/// Outcome of one sizing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineeringResult {
    pub kv: f64,
    pub cv: f64,
    /// Valve travel; absent when the characteristic inversion is invalid
    /// for the computed coefficient (reported in `warnings`).
    pub opening_percent: Option<f64>,
    pub regime: FlowRegime,
    pub turbulence: TurbulenceState,
    /// Liquid fluid state; `None` for gas and steam.
    pub fluid_state: Option<CavitationState>,
    pub outlet_velocity_m_s: f64,
    pub variant: FormulaVariant,
    pub fittings_present: bool,
    pub intermediates: IntermediateValues,
    pub warnings: Vec<SizingWarning>,
    pub errors: Vec<SizingIssue>,
}
