//! Pipe geometry resolution and piping-geometry correction factors.

use serde::{Deserialize, Serialize};
use uom::si::length::millimeter;
use vf_core::constants::{BORE_MATCH_TOL_MM, N2, N5};

use crate::schedule::schedule_entry;

/// Resolved valve-adjacent pipe geometry with resistance coefficients.
///
/// All diameters in mm. Built once per calculation from the seat bore and
/// whatever pipe information the caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeGeometry {
    /// Valve seat bore d.
    pub d_mm: f64,
    /// Upstream internal diameter D1.
    pub d1_mm: f64,
    /// Downstream internal diameter D2.
    pub d2_mm: f64,
    /// Downstream wall thickness when known (schedule or explicit);
    /// the noise transmission-loss model needs it.
    pub wall2_mm: Option<f64>,
    /// Inlet contraction loss.
    pub k1: f64,
    /// Outlet expansion loss.
    pub k2: f64,
    /// Inlet Bernoulli term.
    pub kb1: f64,
    /// Outlet Bernoulli term.
    pub kb2: f64,
    /// K1 + K2 + KB1 − KB2, exactly 0 for matched bores.
    pub sum_k: f64,
}

impl PipeGeometry {
    /// Resolve D1/D2 from explicit (outer Ø, wall) pairs in mm, falling back
    /// to the schedule table by nominal size, then to the seat bore itself.
    pub fn resolve(
        seat_mm: f64,
        nominal_dn: u32,
        upstream: Option<(f64, f64)>,
        downstream: Option<(f64, f64)>,
    ) -> Self {
        let schedule = schedule_entry(nominal_dn).map(|e| {
            (
                e.outer_diameter.get::<millimeter>(),
                e.wall_thickness.get::<millimeter>(),
            )
        });

        let bore = |explicit: Option<(f64, f64)>| -> (f64, Option<f64>) {
            match explicit.or(schedule) {
                Some((od, wt)) => (od - 2.0 * wt, Some(wt)),
                None => (seat_mm, None),
            }
        };

        let (d1, _) = bore(upstream);
        let (d2, wall2) = bore(downstream);
        Self::from_diameters(seat_mm, d1, d2, wall2)
    }

    /// Build from already-known internal diameters.
    pub fn from_diameters(d: f64, d1: f64, d2: f64, wall2_mm: Option<f64>) -> Self {
        // Matched bores are an exact case: no reducers means ΣK is zero,
        // not merely small.
        if (d - d1).abs() < BORE_MATCH_TOL_MM && (d - d2).abs() < BORE_MATCH_TOL_MM {
            return Self {
                d_mm: d,
                d1_mm: d1,
                d2_mm: d2,
                wall2_mm,
                k1: 0.0,
                k2: 0.0,
                kb1: 0.0,
                kb2: 0.0,
                sum_k: 0.0,
            };
        }

        let r1 = (d / d1).powi(2);
        let r2 = (d / d2).powi(2);
        let k1 = 0.5 * (1.0 - r1).powi(2);
        let k2 = 1.0 * (1.0 - r2).powi(2);
        let kb1 = 1.0 - r1 * r1;
        let kb2 = 1.0 - r2 * r2;
        Self {
            d_mm: d,
            d1_mm: d1,
            d2_mm: d2,
            wall2_mm,
            k1,
            k2,
            kb1,
            kb2,
            sum_k: k1 + k2 + kb1 - kb2,
        }
    }

    pub fn fittings_present(&self) -> bool {
        self.sum_k != 0.0
    }

    /// Inlet-side resistance Ki = K1 + KB1, used by the xTP correction.
    pub fn ki(&self) -> f64 {
        self.k1 + self.kb1
    }

    /// Piping-geometry factor FP for an assumed flow coefficient Ci.
    pub fn fp(&self, ci: f64) -> f64 {
        let term = self.sum_k / N2 * (ci / (self.d_mm * self.d_mm)).powi(2);
        1.0 / (1.0 + term).sqrt()
    }

    /// Combined recovery factor FLP.
    pub fn flp(&self, fl: f64, ci: f64) -> f64 {
        let term = fl * fl / N2 * self.sum_k * (ci / (self.d_mm * self.d_mm)).powi(2);
        fl / (1.0 + term).sqrt()
    }

    /// Fitting-corrected pressure-differential ratio factor xTP.
    pub fn xtp(&self, xt: f64, fp: f64, ci: f64) -> f64 {
        let term = 1.0 + xt * self.ki() / N5 * (ci / (self.d_mm * self.d_mm)).powi(2);
        xt / (fp * fp) / term
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn matched_bores_are_exact() {
        // DN100 line bored to the seat diameter within tolerance.
        let g = PipeGeometry::from_diameters(102.26, 102.3, 102.21, Some(6.02));
        assert_eq!(g.sum_k, 0.0);
        assert_eq!(g.fp(325.0), 1.0);
        assert_eq!(g.flp(0.85, 325.0), 0.85);
        assert!(!g.fittings_present());
    }

    #[test]
    fn seat_in_larger_line() {
        // 80 mm seat in a DN100 line: real reducers on both sides.
        let g = PipeGeometry::from_diameters(80.0, 102.26, 102.26, Some(6.02));
        assert!(g.sum_k > 0.0);
        assert!(g.k1 > 0.0 && g.k2 > 0.0);
        // FP below unity, FLP below FL.
        let fp = g.fp(208.0);
        assert!(fp < 1.0 && fp > 0.5, "FP = {fp}");
        assert!(g.flp(0.9, 208.0) < 0.9);
    }

    #[test]
    fn schedule_fallback_then_seat() {
        let g = PipeGeometry::resolve(100.0, 100, None, None);
        assert!((g.d1_mm - 102.26).abs() < 1e-9);
        assert_eq!(g.wall2_mm, Some(6.02));

        // Unknown DN: bore falls back to the seat, ΣK exactly zero.
        let g = PipeGeometry::resolve(100.0, 117, None, None);
        assert_eq!(g.d1_mm, 100.0);
        assert_eq!(g.sum_k, 0.0);
        assert_eq!(g.wall2_mm, None);
    }

    #[test]
    fn explicit_dimensions_win_over_schedule() {
        let g = PipeGeometry::resolve(100.0, 100, Some((168.3, 7.11)), None);
        assert!((g.d1_mm - 154.08).abs() < 1e-9);
        assert!((g.d2_mm - 102.26).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn fp_at_most_one(
            d in 20.0_f64..300.0,
            expand in 1.0_f64..2.5,
            ci in 1.0_f64..2000.0,
        ) {
            let g = PipeGeometry::from_diameters(d, d * expand, d * expand, None);
            let fp = g.fp(ci);
            prop_assert!(fp > 0.0 && fp <= 1.0);
            let flp = g.flp(0.9, ci);
            prop_assert!(flp > 0.0 && flp <= 0.9 + 1e-12);
        }
    }
}
