//! Hydrodynamic noise of liquid service.
//!
//! Turbulent excitation is always present; once the pressure-differential
//! ratio passes the inlet-corrected incipient threshold a cavitation term
//! is added on top. Flashing service is outside the model and returns a
//! silent result with a warning instead of a fabricated number.

use crate::input::LiquidNoiseInput;
use crate::result::{NoiseResult, NoiseWarning};
use crate::transmission::{
    a_weighting_db, clamp_level_dba, effective_wall_m, jet_diameter_m, ACOUSTIC_POWER_RATIO,
};
use vf_fluids::boundaries;

/// Speed of sound in process liquids, m/s. The model's sensitivity to the
/// exact value is well under a decibel.
const LIQUID_SOUND_SPEED: f64 = 1400.0;

pub fn predict_liquid(input: &LiquidNoiseInput) -> NoiseResult {
    let p1 = input.p1_kpa * 1.0e3;
    let p2 = input.p2_kpa * 1.0e3;
    let pv = input.vapor_pressure_kpa * 1.0e3;
    let rho = input.density_kg_m3;
    let fl = input.fl;
    let cl = LIQUID_SOUND_SPEED;
    let di = input.pipe_inner_diameter_mm / 1.0e3;
    let tp_a = effective_wall_m(input.pipe_wall_thickness_mm / 1.0e3, input.pipe_material);
    let w = rho * input.volumetric_flow_m3_h / 3600.0;

    let dp = p1 - p2;
    if dp <= 0.0 {
        return NoiseResult::silent(NoiseWarning::NoPressureDrop);
    }
    // At or below the vapor pressure the whole stream flashes; the drop can
    // also exceed the available margin. Both are outside the model.
    if p1 <= pv {
        return NoiseResult::silent(NoiseWarning::FlashingNoPrediction);
    }
    let xf = dp / (p1 - pv);
    if xf > 1.0 {
        return NoiseResult::silent(NoiseWarning::FlashingNoPrediction);
    }
    let xfz = boundaries::incipient_ratio(input.kv, fl, input.fd);
    let xfzp = boundaries::inlet_corrected_incipient_ratio(xfz, input.p1_kpa);

    // Vena-contracta velocity from the effective (choking-limited) drop.
    let dp_c = dp.min(fl * fl * (p1 - pv));
    let uvc = (2.0 * dp_c / rho).sqrt() / fl;
    let stream_power = w * uvc * uvc / 2.0;

    let eta_turbulent = 1.0e-4 * uvc / cl;
    let cavitating = xf >= xfzp;
    let eta = if cavitating {
        let eta_cav = 0.32
            * eta_turbulent
            * ((1.0 - xfzp) / (1.0 - xf)).sqrt()
            * (5.0 * xfzp).exp()
            * (dp / (dp_c * xfzp)).sqrt()
            * (xf / xfzp);
        eta_turbulent + eta_cav
    } else {
        eta_turbulent
    };
    let wa = eta * ACOUSTIC_POWER_RATIO * stream_power;

    let lpi = 10.0 * (3.2e9 * wa * rho * cl / (di * di)).max(1e-12).log10();

    let dj = jet_diameter_m(input.kv, fl, input.fd);
    let peak_turbulent_hz = 0.036 * uvc / dj;
    let peak_hz = if cavitating {
        // Cavity collapse shifts the spectrum upward.
        6.0 * peak_turbulent_hz * ((1.0 - xfzp) / (1.0 - xf)).sqrt()
    } else {
        peak_turbulent_hz
    };

    let mut tl = 10.0
        * (7.6e-11 * (cl / (tp_a * peak_turbulent_hz)).powi(2) / (1.0 + rho * cl / 415.0)).log10();
    if cavitating {
        tl += 10.0 * (xf / xfzp).log10() + 5.0;
    }

    let lpe = lpi + tl + 3.0;
    let dba = clamp_level_dba(lpe + a_weighting_db(peak_hz));

    let mut result = NoiseResult {
        external_dba: dba,
        internal_db: lpi,
        peak_frequency_hz: peak_hz,
        transmission_loss_db: tl,
        acoustic_power_w: wa,
        acoustic_efficiency: eta,
        gas_state: None,
        cavitating: Some(cavitating),
        warnings: Vec::new(),
    };
    result.push_level_warnings();
    result
}
