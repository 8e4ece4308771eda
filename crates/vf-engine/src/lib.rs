//! vf-engine: one entry point over sizing and noise.
//!
//! [`calculate`] runs the flow-coefficient engine alone; [`calculate_with_noise`]
//! additionally feeds the sizing result into the matching noise model. Noise
//! degrades gracefully: when the downstream wall thickness is unknown the
//! transmission loss cannot be evaluated and the noise slot stays empty
//! rather than guessing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use vf_noise::{GasNoiseInput, LiquidNoiseInput};

pub use vf_noise::{NoiseResult, NoiseWarning, PipeMaterial};
pub use vf_sizing::{
    CavitationState, DensityUnit, EngineeringInput, EngineeringResult, FlowCharacteristic,
    FlowRegime, FlowUnit, FluidType, FormulaVariant, GasProperties, PipeDimensions, PressureUnit,
    SizingError, SizingIssue, SizingResult, SizingWarning, TemperatureUnit, ValveGeometry,
    ViscosityUnit,
};

/// Sizing result with an optional noise prediction alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutcome {
    pub result: EngineeringResult,
    /// Absent when the pipe wall thickness is unknown.
    pub noise: Option<NoiseResult>,
}

/// Size a valve for one operating point.
pub fn calculate(input: &EngineeringInput) -> SizingResult<EngineeringResult> {
    let result = vf_sizing::size(input)?;
    debug!(
        kv = result.kv,
        regime = ?result.regime,
        variant = ?result.variant,
        opening = ?result.opening_percent,
        "sized valve"
    );
    Ok(result)
}

/// Size a valve and predict its noise emission.
pub fn calculate_with_noise(input: &EngineeringInput) -> SizingResult<CalculationOutcome> {
    let result = calculate(input)?;
    let noise = predict_noise(input, &result);
    if let Some(n) = &noise {
        debug!(dba = n.external_dba, state = ?n.gas_state, "noise predicted");
    } else {
        debug!("noise skipped: downstream wall thickness unknown");
    }
    Ok(CalculationOutcome { result, noise })
}

fn predict_noise(input: &EngineeringInput, result: &EngineeringResult) -> Option<NoiseResult> {
    let iv = &result.intermediates;
    let wall_mm = iv.wall2_mm?;
    match input.fluid {
        FluidType::Liquid => Some(vf_noise::predict_liquid(&LiquidNoiseInput {
            p1_kpa: iv.p1_kpa,
            p2_kpa: iv.p2_kpa,
            vapor_pressure_kpa: iv.vapor_pressure_kpa.unwrap_or(0.0),
            density_kg_m3: iv.inlet_density_kg_m3,
            volumetric_flow_m3_h: iv.q_m3_h,
            kv: result.kv,
            fl: input.valve.fl,
            fd: input.valve.fd,
            pipe_inner_diameter_mm: iv.d2_mm,
            pipe_wall_thickness_mm: wall_mm,
            pipe_material: PipeMaterial::default(),
        })),
        FluidType::Gas | FluidType::Steam => {
            let gamma = input.gas.map(|g| g.gamma)?;
            Some(vf_noise::predict_gas(&GasNoiseInput {
                p1_kpa: iv.p1_kpa,
                p2_kpa: iv.p2_kpa,
                t1_k: iv.t_k,
                molecular_weight: iv.molecular_weight?,
                gamma,
                mass_flow_kg_h: iv.w_kg_h,
                kv: result.kv,
                fl: input.valve.fl,
                fd: input.valve.fd,
                pipe_inner_diameter_mm: iv.d2_mm,
                pipe_wall_thickness_mm: wall_mm,
                pipe_material: PipeMaterial::default(),
            }))
        }
    }
}
