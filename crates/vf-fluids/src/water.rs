//! Water saturation properties via a single Antoine correlation.
//!
//! Valid over the liquid range relevant for valve duty (0..230 °C); not a
//! steam-table replacement.

/// Antoine constants for water, pressure in kPa, temperature in °C.
const ANTOINE_A: f64 = 7.07406;
const ANTOINE_B: f64 = 1657.46;
const ANTOINE_C: f64 = 227.02;

/// Saturation vapor pressure of water, kPa, from temperature in °C.
pub fn saturation_pressure_kpa(t_celsius: f64) -> f64 {
    10f64.powf(ANTOINE_A - ANTOINE_B / (ANTOINE_C + t_celsius))
}

/// Saturation temperature of water, °C, from absolute pressure in kPa.
///
/// Inverse of [`saturation_pressure_kpa`].
pub fn saturation_temperature_c(p_kpa_abs: f64) -> f64 {
    ANTOINE_B / (ANTOINE_A - p_kpa_abs.log10()) - ANTOINE_C
}
