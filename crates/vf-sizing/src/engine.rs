//! The sizing orchestrator: unit normalization, validation, per-fluid
//! dispatch, characteristic inversion, and result assembly.

use std::f64::consts::PI;

use crate::error::{SizingError, SizingResult};
use crate::gas::{size_compressible, CompressibleConditions, CompressibleOutcome};
use crate::input::{EngineeringInput, FluidType, GasProperties};
use crate::liquid::{size_liquid, LiquidConditions};
use crate::opening;
use crate::result::{
    EngineeringResult, FormulaVariant, IntermediateValues, SizingWarning, TurbulenceState,
};
use crate::reynolds;
use crate::steam::{size_steam, STEAM_MOLECULAR_WEIGHT};
use crate::validate;
use vf_core::constants::{EROSION_VELOCITY_M_S, KV_TO_CV, WATER_PC_KPA};
use vf_core::convert::{
    pressure_to_kpa_abs, resolve_density, resolve_flow, temperature_to_kelvin, viscosity_to_m2_s,
};
use vf_core::numeric::ensure_positive;
use vf_fluids::boundaries::CavitationState;
use vf_fluids::{gas as gas_props, water};
use vf_piping::PipeGeometry;

/// Size a valve for one operating point.
///
/// Structural input defects (missing gas properties, impossible flow basis)
/// are the only hard errors. Out-of-range process conditions are collected
/// on the result while the numbers are still computed best-effort, with the
/// pressure differential floored to keep the formulas defined.
pub fn size(input: &EngineeringInput) -> SizingResult<EngineeringResult> {
    let p1_kpa = pressure_to_kpa_abs(input.inlet_pressure, input.inlet_pressure_unit);
    let p2_kpa = pressure_to_kpa_abs(input.outlet_pressure, input.outlet_pressure_unit);
    let t_k = temperature_to_kelvin(input.temperature, input.temperature_unit);

    let density = resolve_density(input.density, input.density_unit, p1_kpa, t_k);
    // Zero or negative density breaks every formula downstream; that is a
    // broken contract, not an out-of-range process condition.
    let rho1 = ensure_positive(density.inlet_kg_m3, "inlet density")?;

    let gas = compressible_properties(input, density.normal_kg_nm3)?;

    let nu_m2_s = input
        .viscosity
        .zip(input.viscosity_unit)
        .map(|(v, u)| viscosity_to_m2_s(v, u, rho1));

    // A gas with a known molecular weight always has a normal density, even
    // when the input density tag did not carry one.
    let normal_density = density.normal_kg_nm3.or_else(|| {
        gas.map(|g| gas_props::normal_density_from_molecular_weight(g.molecular_weight))
    });
    let flow = resolve_flow(input.flow, input.flow_unit, rho1, normal_density)?;

    let geometry = PipeGeometry::resolve(
        input.valve.seat_mm(),
        input.valve.nominal_dn,
        input.upstream_pipe.map(|p| (p.outer_diameter_mm, p.wall_thickness_mm)),
        input.downstream_pipe.map(|p| (p.outer_diameter_mm, p.wall_thickness_mm)),
    );

    let vapor_pressure = (input.fluid == FluidType::Liquid)
        .then(|| water::saturation_pressure_kpa(t_k - 273.15));

    let errors = validate::validate(input, p1_kpa, p2_kpa, t_k, vapor_pressure);
    let dp_kpa = (p1_kpa - p2_kpa).max(1e-6);

    let valve = &input.valve;
    let mut warnings = Vec::new();

    let (kv, variant, regime, turbulence, fluid_state, intermediates) = match input.fluid {
        FluidType::Liquid => {
            let pv = vapor_pressure.unwrap_or(0.0);
            let conditions = LiquidConditions {
                p1_kpa,
                dp_kpa,
                q_m3_h: flow.volumetric_m3_h,
                relative_density: rho1 / 1000.0,
                vapor_pressure_kpa: pv,
                critical_pressure_kpa: input.critical_pressure_kpa.unwrap_or(WATER_PC_KPA),
                nu_m2_s,
            };
            let out = size_liquid(&conditions, &geometry, valve.fl, valve.fd, valve.rated_kv);
            if out.state == CavitationState::Cavitation {
                warnings.push(SizingWarning::ConstantCavitation);
            }
            let intermediates = IntermediateValues {
                p1_kpa,
                p2_kpa,
                dp_kpa,
                t_k,
                inlet_density_kg_m3: rho1,
                q_m3_h: flow.volumetric_m3_h,
                w_kg_h: flow.mass_kg_h,
                relative_density: Some(conditions.relative_density),
                vapor_pressure_kpa: Some(pv),
                ff: Some(out.ff),
                xf: Some(out.xf),
                xfz: Some(out.xfz),
                x: None,
                f_gamma: None,
                xt: None,
                xtp: None,
                expansion_factor: None,
                molecular_weight: None,
                d_mm: geometry.d_mm,
                d1_mm: geometry.d1_mm,
                d2_mm: geometry.d2_mm,
                wall2_mm: geometry.wall2_mm,
                sum_k: geometry.sum_k,
                fp: out.fp,
                flp: Some(out.flp),
                ci_seed: out.ci_seed,
                reynolds: out.reynolds,
                fr: out.fr,
                candidates: out.candidates,
            };
            (
                out.kv,
                out.variant,
                out.regime,
                out.turbulence,
                Some(out.state),
                intermediates,
            )
        }
        FluidType::Gas | FluidType::Steam => {
            let props = gas.ok_or(SizingError::MissingGasProperties)?;
            let conditions = CompressibleConditions {
                p1_kpa,
                dp_kpa,
                t_k,
                rho1_kg_m3: rho1,
                mass_kg_h: flow.mass_kg_h,
                standard_nm3_h: flow.standard_nm3_h,
                molecular_weight: props.molecular_weight,
                compressibility: props.compressibility,
                gamma: props.gamma,
            };
            let out: CompressibleOutcome = match input.fluid {
                FluidType::Steam => size_steam(&conditions, &geometry, valve.xt),
                _ => size_compressible(&conditions, &geometry, valve.xt),
            };
            // Compressible duties are almost always turbulent, but a supplied
            // viscosity gets the same laminar override as a liquid.
            let corr = nu_m2_s.map(|nu| {
                reynolds::correction(
                    out.kv,
                    valve.fl,
                    valve.fd,
                    flow.volumetric_m3_h,
                    nu,
                    geometry.d_mm,
                    geometry.d1_mm,
                    geometry.sum_k,
                )
            });
            let fr = corr.map_or(1.0, |c| c.fr);
            let turbulence = corr.map_or(TurbulenceState::Turbulent, |c| c.turbulence);
            let (kv, variant) = if fr < 1.0 {
                (out.kv / fr, FormulaVariant::Laminar)
            } else {
                (out.kv, out.variant)
            };
            let mut candidates = out.candidates;
            if fr < 1.0 {
                candidates.laminar = Some(kv);
            }
            let intermediates = IntermediateValues {
                p1_kpa,
                p2_kpa,
                dp_kpa,
                t_k,
                inlet_density_kg_m3: rho1,
                q_m3_h: flow.volumetric_m3_h,
                w_kg_h: flow.mass_kg_h,
                relative_density: None,
                vapor_pressure_kpa: None,
                ff: None,
                xf: None,
                xfz: None,
                x: Some(out.x),
                f_gamma: Some(out.f_gamma),
                xt: Some(valve.xt),
                xtp: out.xtp,
                expansion_factor: Some(out.expansion_factor),
                molecular_weight: Some(props.molecular_weight),
                d_mm: geometry.d_mm,
                d1_mm: geometry.d1_mm,
                d2_mm: geometry.d2_mm,
                wall2_mm: geometry.wall2_mm,
                sum_k: geometry.sum_k,
                fp: out.fp,
                flp: None,
                ci_seed: out.ci_seed,
                reynolds: corr.map(|c| c.reynolds),
                fr,
                candidates,
            };
            (kv, variant, out.regime, turbulence, None, intermediates)
        }
    };

    let opening_percent = opening::opening_percent(
        kv,
        valve.rated_kv,
        valve.rangeability,
        valve.characteristic,
    );
    warnings.extend(opening::opening_warnings(opening_percent));

    let outlet_velocity = outlet_velocity_m_s(input.fluid, &flow, rho1, p1_kpa, p2_kpa, &geometry);
    if input.fluid == FluidType::Liquid && outlet_velocity > EROSION_VELOCITY_M_S {
        warnings.push(SizingWarning::ErosionRisk {
            velocity_m_s: outlet_velocity,
        });
    }

    Ok(EngineeringResult {
        kv,
        cv: kv * KV_TO_CV,
        opening_percent,
        regime,
        turbulence,
        fluid_state,
        outlet_velocity_m_s: outlet_velocity,
        variant,
        fittings_present: geometry.fittings_present(),
        intermediates,
        warnings,
        errors,
    })
}

/// Resolve gas/steam properties; `None` for liquids.
fn compressible_properties(
    input: &EngineeringInput,
    normal_density: Option<f64>,
) -> SizingResult<Option<ResolvedGas>> {
    match input.fluid {
        FluidType::Liquid => Ok(None),
        FluidType::Gas => {
            let props = input.gas.ok_or(SizingError::MissingGasProperties)?;
            let mw = props
                .molecular_weight
                .or(normal_density.map(gas_props::molecular_weight_from_normal_density))
                .ok_or(SizingError::MissingGasProperties)?;
            Ok(Some(ResolvedGas::new(mw, props)))
        }
        FluidType::Steam => {
            let props = input.gas.ok_or(SizingError::MissingGasProperties)?;
            let mw = props.molecular_weight.unwrap_or(STEAM_MOLECULAR_WEIGHT);
            Ok(Some(ResolvedGas::new(mw, props)))
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ResolvedGas {
    molecular_weight: f64,
    compressibility: f64,
    gamma: f64,
}

impl ResolvedGas {
    fn new(molecular_weight: f64, props: GasProperties) -> Self {
        Self {
            molecular_weight,
            compressibility: props.compressibility,
            gamma: props.gamma,
        }
    }
}

fn outlet_velocity_m_s(
    fluid: FluidType,
    flow: &vf_core::convert::ResolvedFlow,
    rho1: f64,
    p1_kpa: f64,
    p2_kpa: f64,
    geometry: &PipeGeometry,
) -> f64 {
    let q_out_m3_h = match fluid {
        FluidType::Liquid => flow.volumetric_m3_h,
        FluidType::Gas | FluidType::Steam => {
            let rho2 = gas_props::downstream_density(rho1, p1_kpa, p2_kpa.max(1e-6));
            flow.mass_kg_h / rho2
        }
    };
    let d2_m = geometry.d2_mm / 1000.0;
    q_out_m3_h / 3600.0 / (PI / 4.0 * d2_m * d2_m)
}
