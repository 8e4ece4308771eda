//! Valve-travel inversion: given the required Kv and the trim's inherent
//! characteristic, recover the opening percentage.

use crate::input::FlowCharacteristic;
use crate::result::SizingWarning;

/// Invert the characteristic curve. `None` when the curve has no real
/// solution for the coefficient ratio.
pub fn opening_percent(
    kv: f64,
    rated_kv: f64,
    rangeability: f64,
    characteristic: FlowCharacteristic,
) -> Option<f64> {
    if kv <= 0.0 || rated_kv <= 0.0 || rangeability <= 1.0 {
        return None;
    }
    // m is the turndown ratio at the operating point.
    let m = rated_kv / kv;
    let r = rangeability;
    match characteristic {
        FlowCharacteristic::EqualPercentage => Some((1.0 - m.log10() / r.log10()) * 100.0),
        FlowCharacteristic::Linear => Some((r - m) / ((r - 1.0) * m) * 100.0),
        FlowCharacteristic::QuickOpening => {
            if m <= 1.0 {
                return None;
            }
            let root = (r * (m - 1.0) / ((r - 1.0) * m)).sqrt();
            Some((1.0 - root) * 100.0)
        }
    }
}

/// Classify an opening value into advisory warnings.
pub fn opening_warnings(opening: Option<f64>) -> Vec<SizingWarning> {
    match opening {
        None => vec![SizingWarning::OpeningNotDerivable],
        Some(p) if p < 0.0 => vec![SizingWarning::OpeningBelowZero { percent: p }],
        Some(p) if p > 100.0 => vec![SizingWarning::OpeningAboveFull { percent: p }],
        Some(p) if !(10.0..=90.0).contains(&p) => {
            vec![SizingWarning::OpeningOutsideMargin { percent: p }]
        }
        Some(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vf_core::numeric::{nearly_equal, Tolerances};

    #[test]
    fn equal_percentage_endpoints() {
        // Kv = rated gives full travel, Kv = rated/R gives zero.
        let full = opening_percent(250.0, 250.0, 50.0, FlowCharacteristic::EqualPercentage);
        assert!((full.unwrap() - 100.0).abs() < 1e-9);
        let shut = opening_percent(5.0, 250.0, 50.0, FlowCharacteristic::EqualPercentage);
        assert!(shut.unwrap().abs() < 1e-9);
    }

    #[test]
    fn linear_midpoint() {
        // Linear curve: Kv/rated = (1 + (R-1) h) / R at travel h.
        let p = opening_percent(127.5, 250.0, 50.0, FlowCharacteristic::Linear).unwrap();
        assert!(nearly_equal(p, 50.0, Tolerances::default()), "{p}");
    }

    #[test]
    fn equal_percentage_midpoint() {
        // Kv at half travel is rated / sqrt(R); the inversion must return
        // exactly 50% to within the relative tolerance.
        let kv = 250.0 / 50.0_f64.sqrt();
        let p = opening_percent(kv, 250.0, 50.0, FlowCharacteristic::EqualPercentage).unwrap();
        assert!(nearly_equal(p, 50.0, Tolerances::default()), "{p}");
    }

    #[test]
    fn quick_opening_needs_turndown() {
        assert_eq!(
            opening_percent(300.0, 250.0, 50.0, FlowCharacteristic::QuickOpening),
            None
        );
        let p = opening_percent(125.0, 250.0, 50.0, FlowCharacteristic::QuickOpening).unwrap();
        assert!(p > 0.0 && p < 100.0);
    }

    #[test]
    fn oversize_flagged() {
        let w = opening_warnings(Some(-12.0));
        assert!(matches!(w[0], SizingWarning::OpeningBelowZero { .. }));
        let w = opening_warnings(Some(96.0));
        assert!(matches!(w[0], SizingWarning::OpeningOutsideMargin { .. }));
        let w = opening_warnings(None);
        assert!(matches!(w[0], SizingWarning::OpeningNotDerivable));
    }

    proptest! {
        #[test]
        fn equal_percentage_is_monotone(
            kv_lo in 1.0f64..100.0,
            step in 1.01f64..5.0,
        ) {
            let a = opening_percent(kv_lo, 500.0, 50.0, FlowCharacteristic::EqualPercentage).unwrap();
            let b = opening_percent(kv_lo * step, 500.0, 50.0, FlowCharacteristic::EqualPercentage).unwrap();
            prop_assert!(b > a);
        }

        #[test]
        fn equal_percentage_inversion_round_trips(h in 0.05f64..1.0, r in 20.0f64..100.0) {
            // Forward curve Kv(h) = rated / R^(1-h), then invert.
            let rated = 250.0;
            let kv = rated / r.powf(1.0 - h);
            let p = opening_percent(kv, rated, r, FlowCharacteristic::EqualPercentage).unwrap();
            prop_assert!(nearly_equal(p, h * 100.0, Tolerances::default()), "{p}");
        }

        #[test]
        fn linear_inversion_round_trips(h in 0.05f64..1.0, r in 20.0f64..100.0) {
            // Forward curve, then invert.
            let rated = 250.0;
            let m_inv = (1.0 + (r - 1.0) * h) / r;
            let kv = rated * m_inv;
            let p = opening_percent(kv, rated, r, FlowCharacteristic::Linear).unwrap();
            prop_assert!(nearly_equal(p, h * 100.0, Tolerances::default()), "{p}");
        }
    }
}
