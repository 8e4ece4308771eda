//! Shared flow/cavitation boundary module.
//!
//! Both the flow-coefficient engine and the noise models need the same
//! boundary pressures and state classifications. They are computed here
//! once, by a single comparison function per family, so the Kv and noise
//! paths can never disagree on a threshold.

use serde::{Deserialize, Serialize};
use vf_core::constants::N34;

/// Liquid fluid state, ordered by increasing pressure-differential ratio xF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CavitationState {
    NoCavitation,
    IncipientCavitation,
    Cavitation,
    Flashing,
}

/// Incipient-cavitation ratio xFz for a standard single-stage trim.
pub fn incipient_ratio(kv: f64, fl: f64, fd: f64) -> f64 {
    0.9 * (1.0 / (1.0 + 3.0 * fd * (kv / (N34 * fl)).sqrt())).sqrt()
}

/// Inlet-pressure-corrected incipient ratio xFzp.
///
/// Reference inlet pressure 600 kPa absolute.
pub fn inlet_corrected_incipient_ratio(xfz: f64, p1_kpa_abs: f64) -> f64 {
    xfz * (600.0 / p1_kpa_abs).powf(0.125)
}

/// Constant-cavitation boundary in xF terms.
///
/// Beyond it the recovered downstream margin (P2 − Pv) is below
/// (1 − FL²)² of (P1 − Pv) and the vapor cavity persists.
pub fn constant_cavitation_boundary(fl: f64) -> f64 {
    1.0 - (1.0 - fl * fl).powi(2)
}

/// Classify the liquid fluid state from xF = Δp/(P1 − Pv).
///
/// The boundaries satisfy xFz < xF_cc < 1 for valid FL, so the state
/// progresses strictly forward as xF grows.
pub fn classify_cavitation(xf: f64, xfz: f64, fl: f64) -> CavitationState {
    if xf > 1.0 {
        CavitationState::Flashing
    } else if xf >= constant_cavitation_boundary(fl) {
        CavitationState::Cavitation
    } else if xf >= xfz {
        CavitationState::IncipientCavitation
    } else {
        CavitationState::NoCavitation
    }
}

/// Gas/steam noise flow state, ordered by decreasing outlet pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GasFlowState {
    /// State I: subsonic vena contracta.
    Subsonic,
    /// State II: transitional, vena contracta just sonic.
    Transitional,
    /// State III: critical, exit below vena-contracta critical pressure.
    Critical,
    /// State IV: constant acoustic efficiency.
    ConstantEfficiency,
    /// State V: fully choked jet, independent of actual P2.
    FullyChoked,
}

/// Boundary pressures of the five-state gas classification, same unit as P1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasBoundaries {
    pub p1: f64,
    /// Vena-contracta critical pressure P1·(2/(γ+1))^(γ/(γ−1)).
    pub pvcc: f64,
    /// State I/II boundary P1 − FL²·(P1 − Pvcc).
    pub p2c: f64,
    /// Recovery correction α = P2C/Pvcc.
    pub alpha: f64,
    /// State III/IV boundary Pvcc/α.
    pub p2b: f64,
    /// State IV/V boundary P1/(22·α).
    pub p2ce: f64,
}

impl GasBoundaries {
    pub fn new(p1: f64, gamma: f64, fl: f64) -> Self {
        let pvcc = p1 * (2.0 / (gamma + 1.0)).powf(gamma / (gamma - 1.0));
        let p2c = p1 - fl * fl * (p1 - pvcc);
        let alpha = p2c / pvcc;
        Self {
            p1,
            pvcc,
            p2c,
            alpha,
            p2b: pvcc / alpha,
            p2ce: p1 / (22.0 * alpha),
        }
    }

    /// Single boundary comparison for the five states, by decreasing P2.
    pub fn classify(&self, p2: f64) -> GasFlowState {
        if p2 >= self.p2c {
            GasFlowState::Subsonic
        } else if p2 >= self.pvcc {
            GasFlowState::Transitional
        } else if p2 >= self.p2b {
            GasFlowState::Critical
        } else if p2 >= self.p2ce {
            GasFlowState::ConstantEfficiency
        } else {
            GasFlowState::FullyChoked
        }
    }
}
