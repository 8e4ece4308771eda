//! IEC 60534 numerical constants for the canonical unit set:
//! Kv, kPa (absolute), m³/h, kg/h, kg/m³, mm, K.
//!
//! Every constant here is bound to that unit set; changing an input unit
//! anywhere else in the engine means converting first, never swapping N.

/// Liquid volumetric flow (m³/h, kPa).
pub const N1: f64 = 1.0e-1;

/// Piping-geometry factor (d in mm).
pub const N2: f64 = 1.6e-3;

/// Valve Reynolds number (m³/h, m²/s).
pub const N4: f64 = 7.07e-2;

/// Fitting-corrected pressure-differential ratio xTP (d in mm).
pub const N5: f64 = 1.8e-3;

/// Mass flow with inlet density (kg/h, kPa, kg/m³).
pub const N6: f64 = 3.16;

/// Standard volumetric gas flow at 0 °C / 101.325 kPa (Nm³/h, kPa, K).
pub const N9: f64 = 2.46e1;

/// Jet diameter in the noise models (Kv basis, result in m).
pub const N14: f64 = 4.9e-3;

/// Reynolds geometry coefficient, reducer-adjacent form.
pub const N32: f64 = 1.4e2;

/// Incipient-cavitation correlation (Kv basis).
pub const N34: f64 = 1.17;

/// Cv = Kv * KV_TO_CV.
pub const KV_TO_CV: f64 = 1.156;

/// Standard atmosphere, kPa.
pub const ATM_KPA: f64 = 101.325;

/// Normal reference temperature for Nm³ quantities, K.
pub const NORMAL_T_K: f64 = 273.15;

/// Universal gas constant, J/(kmol·K).
pub const R_UNIVERSAL: f64 = 8314.47;

/// Molar volume of an ideal gas at normal conditions, m³/kmol.
pub const NORMAL_MOLAR_VOLUME: f64 = 22.414;

/// Critical pressure of water, kPa.
pub const WATER_PC_KPA: f64 = 22_064.0;

/// Liquid outlet velocity above which erosion becomes a concern, m/s.
pub const EROSION_VELOCITY_M_S: f64 = 30.0;

/// Turbulent / non-turbulent split for the valve Reynolds number.
pub const REV_TURBULENT: f64 = 1.0e4;

/// Expansion factor floor for fully developed choked expansion.
pub const Y_MIN: f64 = 2.0 / 3.0;

/// Seat/pipe diameter match tolerance, mm. Within it ΣK is exactly zero.
pub const BORE_MATCH_TOL_MM: f64 = 0.1;
