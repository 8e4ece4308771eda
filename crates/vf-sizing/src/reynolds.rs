//! Valve Reynolds number and the laminar correction factor FR.

use crate::result::TurbulenceState;
use vf_core::constants::{N2, N32, N4, REV_TURBULENT};

/// Outcome of the Reynolds check for one candidate coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReynoldsCorrection {
    /// Valve Reynolds number Rev.
    pub reynolds: f64,
    /// Correction factor FR, capped at 1.
    pub fr: f64,
    pub turbulence: TurbulenceState,
}

/// Compute Rev and FR for a trial coefficient `ci` (Kv units).
///
/// `q_m3_h` is the actual volumetric flow, `nu_m2_s` the kinematic
/// viscosity, `d1_mm` the upstream pipe bore. `sum_k` selects between the
/// plain and fitted velocity-head terms.
pub fn correction(
    ci: f64,
    fl: f64,
    fd: f64,
    q_m3_h: f64,
    nu_m2_s: f64,
    d_mm: f64,
    d1_mm: f64,
    sum_k: f64,
) -> ReynoldsCorrection {
    let rev = N4 * fd * q_m3_h / (nu_m2_s * (ci * fl).sqrt())
        * (fl * fl * ci * ci / (N2 * d1_mm.powi(4)) + 1.0).powf(0.25);

    let cd = ci / (d_mm * d_mm);
    let lambda = if sum_k > 0.0 {
        1.0 + N32 * cd.powf(2.0 / 3.0)
    } else {
        N2 / (cd * cd)
    };

    let fr2 = (0.026 / fl) * (lambda * rev).sqrt();
    if rev >= REV_TURBULENT {
        let fr1 = 1.0 + (0.33 * fl.sqrt() / lambda.powf(0.25)) * (rev / 1.0e4).log10();
        ReynoldsCorrection {
            reynolds: rev,
            fr: fr1.min(fr2).min(1.0),
            turbulence: TurbulenceState::Turbulent,
        }
    } else {
        ReynoldsCorrection {
            reynolds: rev,
            fr: fr2.min(1.0),
            turbulence: TurbulenceState::Laminar,
        }
    }
}
