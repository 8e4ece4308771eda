//! Sizing factors of IEC 60534-2-1.

use vf_core::constants::Y_MIN;

/// Liquid critical-pressure-ratio factor FF.
///
/// `pv` and `pc` in kPa absolute.
pub fn ff(pv_kpa: f64, pc_kpa: f64) -> f64 {
    0.96 - 0.28 * (pv_kpa / pc_kpa).sqrt()
}

/// Specific-heat-ratio factor Fγ, relative to air (γ = 1.4).
pub fn f_gamma(gamma: f64) -> f64 {
    gamma / 1.4
}

/// Expansion factor Y for compressible flow.
///
/// `x` is the pressure-differential ratio Δp/P1, `xt` the (possibly
/// fitting-corrected) pressure-differential ratio factor. The 2/3 floor
/// models fully developed choked expansion and is never undershot.
pub fn expansion_factor(x: f64, f_gamma: f64, xt: f64) -> f64 {
    (1.0 - x / (3.0 * f_gamma * xt)).max(Y_MIN)
}
