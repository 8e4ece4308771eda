//! Pieces shared by both noise models: the acoustical power ratio, the jet
//! diameter, A-weighting at the peak frequency, and the final level clamp.

use crate::input::PipeMaterial;
use vf_core::constants::N14;

/// Fraction of internal acoustic power radiated as propagating sound.
pub const ACOUSTIC_POWER_RATIO: f64 = 0.25;

/// Wall density the transmission-loss constants are calibrated to, kg/m³.
pub const STEEL_WALL_DENSITY_KG_M3: f64 = 7800.0;

/// Acoustically effective wall thickness, m: the geometric thickness scaled
/// by the wall-to-steel density ratio, so a lighter wall of equal thickness
/// attenuates less (mass law).
pub fn effective_wall_m(tp_m: f64, material: PipeMaterial) -> f64 {
    tp_m * material.wall_density_kg_m3() / STEEL_WALL_DENSITY_KG_M3
}

/// Reported external levels are clamped to this band, dBA.
pub const LEVEL_FLOOR_DBA: f64 = 30.0;
pub const LEVEL_CEILING_DBA: f64 = 150.0;

/// Jet diameter at the vena contracta, m, from the Kv-basis correlation.
pub fn jet_diameter_m(kv: f64, fl: f64, fd: f64) -> f64 {
    N14 * fd * (kv * fl).sqrt()
}

/// A-weighting correction, dB, of a single-peak spectrum centered at `f_hz`.
///
/// Cubic fit in log10(f), valid across the audible band; frequencies below
/// 1 Hz are treated as 1 Hz to keep the polynomial bounded.
pub fn a_weighting_db(f_hz: f64) -> f64 {
    let u = f_hz.max(1.0).log10();
    -145.528 + 98.262 * u - 19.509 * u * u + 0.975 * u * u * u
}

pub fn clamp_level_dba(level: f64) -> f64 {
    level.clamp(LEVEL_FLOOR_DBA, LEVEL_CEILING_DBA)
}
