//! Input validation: out-of-range physical conditions are collected, not
//! raised, so the engine can still return best-effort numbers.

use crate::input::{EngineeringInput, FluidType};
use crate::result::SizingIssue;
use vf_fluids::water;

/// Collect every violated invariant. An empty list means the input is
/// physically sound.
pub fn validate(
    input: &EngineeringInput,
    p1_kpa: f64,
    p2_kpa: f64,
    t_k: f64,
    vapor_pressure_kpa: Option<f64>,
) -> Vec<SizingIssue> {
    let mut issues = Vec::new();

    if p1_kpa <= 0.0 {
        issues.push(SizingIssue::InletPressureNotPositive);
    }
    if p2_kpa < 0.0 {
        issues.push(SizingIssue::OutletPressureNegative);
    }
    if p1_kpa - p2_kpa <= 0.0 {
        issues.push(SizingIssue::NoPressureDrop);
    }

    if input.fluid == FluidType::Liquid {
        if let Some(pv) = vapor_pressure_kpa {
            if p1_kpa < pv {
                issues.push(SizingIssue::InletBelowVaporPressure);
            }
        }
        // Liquid water above its saturation temperature at P1 would flash
        // upstream of the valve already.
        if p1_kpa > 0.0 {
            let t_sat_c = water::saturation_temperature_c(p1_kpa);
            if t_k - 273.15 > t_sat_c {
                issues.push(SizingIssue::TemperatureAboveSaturation);
            }
        }
    }

    if input.valve.rated_kv <= 0.0 {
        issues.push(SizingIssue::RatedKvNotPositive);
    }
    if input.valve.rangeability <= 1.0 {
        issues.push(SizingIssue::RangeabilityTooLow);
    }
    if input.valve.fl <= 0.0 || input.valve.fl > 1.0 {
        issues.push(SizingIssue::RecoveryFactorOutOfRange);
    }

    issues
}
