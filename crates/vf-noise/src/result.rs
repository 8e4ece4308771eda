//! Noise result shape shared by the gas and liquid models.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vf_fluids::GasFlowState;

/// Advisory conditions attached to a prediction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NoiseWarning {
    #[error("Sound level {dba:.1} dBA exceeds the 85 dBA hearing-conservation limit")]
    HearingConservation { dba: f64 },
    #[error("Sound level {dba:.1} dBA indicates a severe noise problem")]
    Severe { dba: f64 },
    #[error("Flashing service: the hydrodynamic model does not apply")]
    FlashingNoPrediction,
    #[error("No positive pressure differential; nothing to predict")]
    NoPressureDrop,
    #[error("Downstream pipe Mach number capped at 0.3 for the level correction")]
    PipeMachCapped,
}

/// One noise prediction, external A-weighted level plus the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseResult {
    /// External A-weighted sound pressure level, dBA, clamped to [30, 150].
    pub external_dba: f64,
    /// Internal (in-pipe) sound pressure level, dB.
    pub internal_db: f64,
    pub peak_frequency_hz: f64,
    /// Pipe-wall transmission loss, dB (negative).
    pub transmission_loss_db: f64,
    /// Radiated acoustic power, W.
    pub acoustic_power_w: f64,
    pub acoustic_efficiency: f64,
    /// Gas/steam flow state; `None` for liquid predictions.
    pub gas_state: Option<GasFlowState>,
    /// Whether the liquid model found cavitating excitation; `None` for gas.
    pub cavitating: Option<bool>,
    pub warnings: Vec<NoiseWarning>,
}

impl NoiseResult {
    /// Zero prediction for cases the model refuses, carrying the reason.
    pub(crate) fn silent(warning: NoiseWarning) -> Self {
        Self {
            external_dba: 0.0,
            internal_db: 0.0,
            peak_frequency_hz: 0.0,
            transmission_loss_db: 0.0,
            acoustic_power_w: 0.0,
            acoustic_efficiency: 0.0,
            gas_state: None,
            cavitating: None,
            warnings: vec![warning],
        }
    }

    pub(crate) fn push_level_warnings(&mut self) {
        if self.external_dba > 100.0 {
            self.warnings.push(NoiseWarning::Severe {
                dba: self.external_dba,
            });
        } else if self.external_dba > 85.0 {
            self.warnings.push(NoiseWarning::HearingConservation {
                dba: self.external_dba,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_warning_bands() {
        let mut r = NoiseResult::silent(NoiseWarning::FlashingNoPrediction);
        r.warnings.clear();
        r.external_dba = 92.0;
        r.push_level_warnings();
        assert!(matches!(
            r.warnings[0],
            NoiseWarning::HearingConservation { .. }
        ));
        r.warnings.clear();
        r.external_dba = 104.0;
        r.push_level_warnings();
        assert!(matches!(r.warnings[0], NoiseWarning::Severe { .. }));
    }
}
