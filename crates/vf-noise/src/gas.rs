//! Aerodynamic noise of gas and steam service.
//!
//! The mechanical stream power at the vena contracta is converted to
//! acoustic power through a state-dependent efficiency, radiated into the
//! downstream pipe, attenuated by the wall, and A-weighted at the jet peak
//! frequency. The five flow states come from the shared boundary module,
//! so noise and sizing always agree on where choking starts.

use std::f64::consts::PI;

use crate::input::GasNoiseInput;
use crate::result::{NoiseResult, NoiseWarning};
use crate::transmission::{
    a_weighting_db, clamp_level_dba, effective_wall_m, jet_diameter_m, ACOUSTIC_POWER_RATIO,
};
use vf_core::constants::R_UNIVERSAL;
use vf_fluids::gas::sound_speed;
use vf_fluids::{GasBoundaries, GasFlowState};

pub fn predict_gas(input: &GasNoiseInput) -> NoiseResult {
    // SI throughout: Pa, m, kg/s.
    let p1 = input.p1_kpa * 1.0e3;
    let p2 = input.p2_kpa * 1.0e3;
    if p2 <= 0.0 || p2 >= p1 {
        return NoiseResult::silent(NoiseWarning::NoPressureDrop);
    }
    let g = input.gamma;
    let t1 = input.t1_k;
    let fl = input.fl;
    let rs = R_UNIVERSAL / input.molecular_weight;
    let w = input.mass_flow_kg_h / 3600.0;
    let di = input.pipe_inner_diameter_mm / 1.0e3;
    let tp = input.pipe_wall_thickness_mm / 1.0e3;

    let b = GasBoundaries::new(p1, g, fl);
    let state = b.classify(p2);

    let c1 = sound_speed(g, input.molecular_weight, t1);
    // Vena-contracta velocity at the critical pressure drop.
    let uvcc = (2.0 * g / (g + 1.0) * rs * t1).sqrt();
    let x = (p1 - p2) / p1;
    let xvcc = 1.0 - b.pvcc / p1;

    let mj_of = |p2x: f64| -> f64 {
        (2.0 / (g - 1.0) * ((p1 / (b.alpha * p2x)).powf((g - 1.0) / g) - 1.0)).sqrt()
    };

    // Freely-expanded jet Mach number (sonic and beyond) or the subsonic
    // vena-contracta Mach number; the peak-frequency correlation needs to
    // know which one it got.
    let (eta, stream_power, correction, jet_mach, u_subsonic);
    match state {
        GasFlowState::Subsonic => {
            let pvc = p1 - (p1 - p2) / (fl * fl);
            let mvc = (2.0 / (g - 1.0) * ((p1 / pvc).powf((g - 1.0) / g) - 1.0)).sqrt();
            let uvc = mvc * c1 * (pvc / p1).powf((g - 1.0) / (2.0 * g));
            eta = 1.0e-4 * mvc.powi(3);
            stream_power = w * uvc * uvc / 2.0;
            correction = 1.0;
            jet_mach = None;
            u_subsonic = uvc;
        }
        GasFlowState::Transitional | GasFlowState::Critical => {
            let mj = mj_of(p2);
            eta = 1.0e-4 * mj.powf(6.6 * fl * fl);
            stream_power = w * uvcc * uvcc / 2.0;
            correction = if state == GasFlowState::Transitional {
                x / xvcc
            } else {
                1.0
            };
            jet_mach = Some(mj);
            u_subsonic = 0.0;
        }
        GasFlowState::ConstantEfficiency | GasFlowState::FullyChoked => {
            let mj = if state == GasFlowState::FullyChoked {
                // Past P2CE the jet no longer responds to P2.
                (2.0 / (g - 1.0) * (22.0_f64.powf((g - 1.0) / g) - 1.0)).sqrt()
            } else {
                mj_of(p2)
            };
            eta = 1.0e-4 * (mj * mj / 2.0) * 2.0_f64.sqrt().powf(6.6 * fl * fl);
            stream_power = w * uvcc * uvcc / 2.0;
            correction = 1.0;
            jet_mach = Some(mj);
            u_subsonic = 0.0;
        }
    }
    let wa = eta * ACOUSTIC_POWER_RATIO * stream_power * correction;

    // Downstream medium after an isothermal throttle; same sound speed.
    let rho2 = p2 / (rs * t1);
    let c2 = c1;
    let lpi = 10.0 * (3.2e9 * wa * rho2 * c2 / (di * di)).log10();

    let dj = jet_diameter_m(input.kv, fl, input.fd);
    let peak_hz = match jet_mach {
        Some(mj) if mj > 1.1 => 0.35 * uvcc / (1.25 * dj * (mj * mj - 1.0).sqrt()),
        Some(mj) => 0.2 * mj * uvcc / dj,
        None => 0.2 * u_subsonic / dj,
    };

    let tl = transmission_loss_db(
        peak_hz,
        di,
        effective_wall_m(tp, input.pipe_material),
        rho2,
        c2,
    );

    // Downstream-Mach amplification, capped at M = 0.3.
    let u2 = 4.0 * w / (rho2 * PI * di * di);
    let mach_capped = u2 / c2 > 0.3;
    let m2 = (u2 / c2).min(0.3);
    let lg = 16.0 * (1.0 / (1.0 - m2)).log10();

    let lpe = lpi + tl + lg + 5.0;
    let distance = 10.0 * ((di / 2.0 + tp + 1.0) / (di / 2.0 + tp)).log10();
    let dba = clamp_level_dba(lpe - distance + a_weighting_db(peak_hz));

    let mut result = NoiseResult {
        external_dba: dba,
        internal_db: lpi,
        peak_frequency_hz: peak_hz,
        transmission_loss_db: tl,
        acoustic_power_w: wa,
        acoustic_efficiency: eta,
        gas_state: Some(state),
        cavitating: None,
        warnings: Vec::new(),
    };
    if mach_capped {
        result.warnings.push(NoiseWarning::PipeMachCapped);
    }
    result.push_level_warnings();
    result
}

/// Pipe-wall transmission loss, dB, around the first ring frequency.
fn transmission_loss_db(peak_hz: f64, di: f64, tp: f64, rho2: f64, c2: f64) -> f64 {
    let f_ring = 5000.0 / (PI * di);
    let fo = f_ring / 4.0 * (c2 / 343.0);
    let (gx, gy) = if peak_hz < fo {
        let gx = (fo / f_ring).powf(2.0 / 3.0) * (peak_hz / fo).powi(4);
        let gy = if fo < f_ring {
            fo / peak_hz
        } else {
            f_ring / peak_hz
        };
        (gx, gy)
    } else if peak_hz < f_ring {
        ((peak_hz / f_ring).sqrt(), 1.0)
    } else {
        (1.0, 1.0)
    };
    10.0 * (8.25e-7 * (c2 / (tp * peak_hz)).powi(2) * gx / (1.0 + rho2 * c2 / 415.0) / gy)
        .log10()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PipeMaterial;

    fn air_letdown(p2_kpa: f64) -> GasNoiseInput {
        // 6465 kg/h of air out of 701.325 kPa(a), DN100 schedule pipe.
        GasNoiseInput {
            p1_kpa: 701.325,
            p2_kpa,
            t1_k: 293.15,
            molecular_weight: 29.0,
            gamma: 1.4,
            mass_flow_kg_h: 6465.0,
            kv: 47.26,
            fl: 0.9,
            fd: 0.42,
            pipe_inner_diameter_mm: 102.26,
            pipe_wall_thickness_mm: 6.02,
            pipe_material: PipeMaterial::CarbonSteel,
        }
    }

    #[test]
    fn service_letdown_is_loud() {
        let r = predict_gas(&air_letdown(201.325));
        assert_eq!(r.gas_state, Some(GasFlowState::ConstantEfficiency));
        assert!((r.external_dba - 99.5).abs() < 0.3, "{}", r.external_dba);
        assert!((r.internal_db - 155.1).abs() < 0.3);
        assert!(matches!(
            r.warnings[0],
            NoiseWarning::HearingConservation { .. }
        ));
    }

    #[test]
    fn mild_drop_is_quiet_subsonic() {
        let r = predict_gas(&air_letdown(680.0));
        assert_eq!(r.gas_state, Some(GasFlowState::Subsonic));
        assert!((r.external_dba - 49.6).abs() < 0.3, "{}", r.external_dba);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn level_grows_through_the_states() {
        let sweep = [
            (680.0, GasFlowState::Subsonic, 49.6),
            (400.0, GasFlowState::Transitional, 89.4),
            (330.0, GasFlowState::Critical, 95.2),
            (201.325, GasFlowState::ConstantEfficiency, 99.5),
            (25.0, GasFlowState::FullyChoked, 100.6),
        ];
        let mut prev = 0.0;
        for (p2, state, expect) in sweep {
            let r = predict_gas(&air_letdown(p2));
            assert_eq!(r.gas_state, Some(state), "at P2 = {p2}");
            assert!(
                (r.external_dba - expect).abs() < 0.3,
                "P2 {p2}: {} vs {expect}",
                r.external_dba
            );
            assert!(r.external_dba > prev, "level fell at P2 = {p2}");
            prev = r.external_dba;
        }
    }

    #[test]
    fn steam_letdown() {
        let r = predict_gas(&GasNoiseInput {
            p1_kpa: 1101.325,
            p2_kpa: 601.325,
            t1_k: 473.15,
            molecular_weight: 18.0,
            gamma: 1.3,
            mass_flow_kg_h: 2000.0,
            kv: 16.12,
            fl: 0.9,
            fd: 0.42,
            pipe_inner_diameter_mm: 77.92,
            pipe_wall_thickness_mm: 5.49,
            pipe_material: PipeMaterial::CarbonSteel,
        });
        assert_eq!(r.gas_state, Some(GasFlowState::Transitional));
        assert!((r.external_dba - 87.2).abs() < 0.3, "{}", r.external_dba);
    }

    #[test]
    fn reversed_pressures_are_silent() {
        for p2 in [701.325, 950.0, 0.0, -5.0] {
            let r = predict_gas(&air_letdown(p2));
            assert!(r.external_dba.is_finite(), "P2 = {p2}");
            assert_eq!(r.external_dba, 0.0);
            assert_eq!(r.warnings, vec![NoiseWarning::NoPressureDrop]);
        }
    }

    #[test]
    fn lighter_wall_transmits_more() {
        let steel = predict_gas(&air_letdown(400.0));
        let mut input = air_letdown(400.0);
        input.pipe_material = PipeMaterial::Aluminum;
        let aluminum = predict_gas(&input);
        assert!(aluminum.external_dba > steel.external_dba);
        assert_eq!(aluminum.internal_db, steel.internal_db);
    }

    #[test]
    fn levels_stay_clamped() {
        let mut input = air_letdown(201.325);
        input.mass_flow_kg_h = 1.0e9;
        let r = predict_gas(&input);
        assert!(r.external_dba <= 150.0);
        input.mass_flow_kg_h = 1.0e-6;
        let r = predict_gas(&input);
        assert!(r.external_dba >= 30.0);
    }
}
