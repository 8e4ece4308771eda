//! Ideal-gas helpers.
//!
//! The sizing standard treats gas density/molecular-weight relationships as
//! ideal; real-gas behavior enters only through the caller-supplied
//! compressibility Z.

use vf_core::constants::{NORMAL_MOLAR_VOLUME, R_UNIVERSAL};

/// Inlet gas density, kg/m³, from molecular weight (kg/kmol), absolute
/// pressure (kPa), temperature (K) and compressibility.
pub fn inlet_density(molecular_weight: f64, p_kpa_abs: f64, t_k: f64, z: f64) -> f64 {
    molecular_weight * p_kpa_abs * 1000.0 / (z * R_UNIVERSAL * t_k)
}

/// Molecular weight, kg/kmol, from normal density (kg/Nm³), ideal gas.
pub fn molecular_weight_from_normal_density(normal_density: f64) -> f64 {
    normal_density * NORMAL_MOLAR_VOLUME
}

/// Normal density, kg/Nm³, from molecular weight, ideal gas.
pub fn normal_density_from_molecular_weight(molecular_weight: f64) -> f64 {
    molecular_weight / NORMAL_MOLAR_VOLUME
}

/// Speed of sound, m/s, for an ideal gas.
pub fn sound_speed(gamma: f64, molecular_weight: f64, t_k: f64) -> f64 {
    (gamma * R_UNIVERSAL / molecular_weight * t_k).sqrt()
}

/// Downstream density after an isothermal throttle, kg/m³.
///
/// Valve flow is treated as isenthalpic; for an ideal gas that leaves the
/// temperature unchanged, so density scales with pressure.
pub fn downstream_density(inlet_density: f64, p1_kpa_abs: f64, p2_kpa_abs: f64) -> f64 {
    inlet_density * p2_kpa_abs / p1_kpa_abs
}
