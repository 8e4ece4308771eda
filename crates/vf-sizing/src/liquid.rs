//! Liquid flow-coefficient table of IEC 60534-2-1.
//!
//! All five candidate formulas are evaluated up front; the decision table
//! then selects one by choked/fitted/laminar findings. Keeping the losers
//! in the result makes a disputed selection auditable.

use crate::result::{FlowRegime, FormulaVariant, KvCandidates, TurbulenceState};
use crate::reynolds::{self, ReynoldsCorrection};
use vf_core::constants::N1;
use vf_fluids::boundaries::{self, CavitationState};
use vf_fluids::factors;
use vf_piping::PipeGeometry;

/// Everything the liquid path derives beyond the raw candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidOutcome {
    pub kv: f64,
    pub variant: FormulaVariant,
    pub regime: FlowRegime,
    pub turbulence: TurbulenceState,
    pub state: CavitationState,
    pub candidates: KvCandidates,
    pub ff: f64,
    pub xf: f64,
    pub xfz: f64,
    pub fp: f64,
    pub flp: f64,
    pub ci_seed: f64,
    pub reynolds: Option<f64>,
    pub fr: f64,
}

pub struct LiquidConditions {
    pub p1_kpa: f64,
    pub dp_kpa: f64,
    pub q_m3_h: f64,
    pub relative_density: f64,
    pub vapor_pressure_kpa: f64,
    pub critical_pressure_kpa: f64,
    pub nu_m2_s: Option<f64>,
}

pub fn size_liquid(
    c: &LiquidConditions,
    geometry: &PipeGeometry,
    fl: f64,
    fd: f64,
    rated_kv: f64,
) -> LiquidOutcome {
    // Piping factors are seeded with the rated coefficient inflated by the
    // customary 30% selection margin, not iterated to convergence.
    let ci = rated_kv * 1.3;
    let fp = geometry.fp(ci);
    let flp = geometry.flp(fl, ci);
    let fittings = geometry.fittings_present();

    let ff = factors::ff(c.vapor_pressure_kpa, c.critical_pressure_kpa);
    let margin = c.p1_kpa - ff * c.vapor_pressure_kpa;

    let base = c.q_m3_h / N1 * (c.relative_density / c.dp_kpa).sqrt();
    let choked_base = c.q_m3_h / N1 * (c.relative_density / margin.max(1e-9)).sqrt();

    // The Reynolds check runs on the non-choked plain candidate, the
    // initial estimate of the required coefficient; the rated-based seed
    // above is only for the piping factors.
    let corr = c.nu_m2_s.map(|nu| {
        reynolds::correction(
            base,
            fl,
            fd,
            c.q_m3_h,
            nu,
            geometry.d_mm,
            geometry.d1_mm,
            geometry.sum_k,
        )
    });
    let fr = corr.map_or(1.0, |r| r.fr);

    let candidates = KvCandidates {
        non_choked_plain: base,
        non_choked_fitted: base / fp,
        choked_plain: choked_base / fl,
        choked_fitted: choked_base / flp,
        laminar: (fr < 1.0).then_some(base / fr),
    };

    let dp_max = if fittings {
        (flp / fp).powi(2) * margin
    } else {
        fl * fl * margin
    };
    let choked = c.dp_kpa >= dp_max;

    let turbulence = corr.map_or(TurbulenceState::Turbulent, |r: ReynoldsCorrection| {
        r.turbulence
    });

    let (kv, variant, regime) = if fr < 1.0 {
        (
            candidates.laminar.unwrap_or(base),
            FormulaVariant::Laminar,
            FlowRegime::NonChoked,
        )
    } else {
        match (choked, fittings) {
            (false, false) => (
                candidates.non_choked_plain,
                FormulaVariant::NonChokedPlain,
                FlowRegime::NonChoked,
            ),
            (false, true) => (
                candidates.non_choked_fitted,
                FormulaVariant::NonChokedFitted,
                FlowRegime::NonChoked,
            ),
            (true, false) => (
                candidates.choked_plain,
                FormulaVariant::ChokedPlain,
                FlowRegime::Choked,
            ),
            (true, true) => (
                candidates.choked_fitted,
                FormulaVariant::ChokedFitted,
                FlowRegime::Choked,
            ),
        }
    };

    let xf = c.dp_kpa / (c.p1_kpa - c.vapor_pressure_kpa).max(1e-9);
    let xfz = boundaries::incipient_ratio(kv.max(1e-9), fl, fd);
    let state = boundaries::classify_cavitation(xf, xfz, fl);

    LiquidOutcome {
        kv,
        variant,
        regime,
        turbulence,
        state,
        candidates,
        ff,
        xf,
        xfz,
        fp,
        flp,
        ci_seed: ci,
        reynolds: corr.map(|r| r.reynolds),
        fr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_core::constants::WATER_PC_KPA;

    fn water_duty() -> LiquidConditions {
        // 80 m³/h of 40 C water, 1.5 MPa(g) to 0.2 MPa(g).
        LiquidConditions {
            p1_kpa: 1601.325,
            dp_kpa: 1300.0,
            q_m3_h: 80.0,
            relative_density: 0.995,
            vapor_pressure_kpa: 7.38,
            critical_pressure_kpa: WATER_PC_KPA,
            nu_m2_s: Some(6.6e-7),
        }
    }

    #[test]
    fn water_letdown_is_choked_incipient() {
        let g = PipeGeometry::from_diameters(100.0, 100.0, 100.0, Some(6.02));
        let out = size_liquid(&water_duty(), &g, 0.85, 0.42, 250.0);
        assert_eq!(out.regime, FlowRegime::Choked);
        assert_eq!(out.variant, FormulaVariant::ChokedPlain);
        assert!((out.kv - 23.5).abs() < 0.5, "Kv = {}", out.kv);
        assert_eq!(out.state, CavitationState::IncipientCavitation);
        assert_eq!(out.turbulence, TurbulenceState::Turbulent);
        assert_eq!(out.fr, 1.0);
    }

    #[test]
    fn mild_drop_stays_non_choked() {
        let mut c = water_duty();
        c.dp_kpa = 200.0;
        let g = PipeGeometry::from_diameters(100.0, 100.0, 100.0, Some(6.02));
        let out = size_liquid(&c, &g, 0.85, 0.42, 250.0);
        assert_eq!(out.regime, FlowRegime::NonChoked);
        assert_eq!(out.variant, FormulaVariant::NonChokedPlain);
        // Kv = Q/N1 * sqrt(rel/dp)
        let expect = 80.0 / 0.1 * (0.995_f64 / 200.0).sqrt();
        assert!((out.kv - expect).abs() < 1e-9);
        assert_eq!(out.state, CavitationState::NoCavitation);
    }

    #[test]
    fn reducers_select_fitted_formulas() {
        let mut c = water_duty();
        c.dp_kpa = 200.0;
        // 80 mm seat in a nominal 100 line.
        let g = PipeGeometry::from_diameters(80.0, 102.26, 102.26, Some(6.02));
        let out = size_liquid(&c, &g, 0.85, 0.42, 250.0);
        assert_eq!(out.variant, FormulaVariant::NonChokedFitted);
        assert!(out.fp < 1.0);
        assert!(out.kv > out.candidates.non_choked_plain);
    }

    #[test]
    fn viscous_oil_takes_laminar_formula() {
        let c = LiquidConditions {
            p1_kpa: 500.0,
            dp_kpa: 100.0,
            q_m3_h: 5.0,
            relative_density: 0.87,
            vapor_pressure_kpa: 0.01,
            critical_pressure_kpa: 3000.0,
            nu_m2_s: Some(3.0e-3),
        };
        let g = PipeGeometry::from_diameters(25.0, 26.6, 26.6, Some(2.87));
        let out = size_liquid(&c, &g, 0.9, 0.42, 6.5);
        assert_eq!(out.variant, FormulaVariant::Laminar);
        assert_eq!(out.turbulence, TurbulenceState::Laminar);
        assert!(out.fr < 1.0);
        let laminar = out.candidates.laminar.unwrap();
        assert!(laminar > out.candidates.non_choked_plain);
        assert_eq!(out.kv, laminar);
    }

    #[test]
    fn reynolds_number_ignores_the_rated_coefficient() {
        // A generously rated valve must not shift the turbulence boundary.
        let c = LiquidConditions {
            p1_kpa: 500.0,
            dp_kpa: 100.0,
            q_m3_h: 5.0,
            relative_density: 0.87,
            vapor_pressure_kpa: 0.01,
            critical_pressure_kpa: 3000.0,
            nu_m2_s: Some(3.0e-3),
        };
        let g = PipeGeometry::from_diameters(25.0, 26.6, 26.6, Some(2.87));
        let snug = size_liquid(&c, &g, 0.9, 0.42, 6.5);
        let generous = size_liquid(&c, &g, 0.9, 0.42, 650.0);
        assert_eq!(snug.reynolds, generous.reynolds);
        assert_eq!(snug.fr, generous.fr);
        assert_eq!(snug.turbulence, generous.turbulence);
    }

    #[test]
    fn without_viscosity_turbulence_is_assumed() {
        let mut c = water_duty();
        c.nu_m2_s = None;
        let g = PipeGeometry::from_diameters(100.0, 100.0, 100.0, None);
        let out = size_liquid(&c, &g, 0.85, 0.42, 250.0);
        assert_eq!(out.reynolds, None);
        assert_eq!(out.fr, 1.0);
        assert_eq!(out.turbulence, TurbulenceState::Turbulent);
        assert!(out.candidates.laminar.is_none());
    }
}
