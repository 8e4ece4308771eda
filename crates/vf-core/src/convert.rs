//! Engineering-unit tags and total conversions to the canonical unit set.
//!
//! Canonical units throughout the engine: absolute kPa, K, kg/m³, m³/h
//! (volumetric at inlet conditions), Nm³/h (standard volumetric), kg/h
//! (mass), m²/s (kinematic viscosity), mm (diameters).
//!
//! Unit tags are closed enums; an unknown tag is unrepresentable and serde
//! rejects it at the deserialization boundary. Conversions that need other
//! already-converted quantities (dynamic viscosity → density, normal density
//! → inlet pressure/temperature) take them as arguments, which fixes the
//! conversion order by construction: density before viscosity before flow.

use crate::constants::{ATM_KPA, NORMAL_T_K};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use uom::si::f64::{Pressure, ThermodynamicTemperature};
use uom::si::pressure::{bar, kilopascal, megapascal};
use uom::si::thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin};

/// Pressure unit tag, gauge or absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    MpaG,
    MpaA,
    KpaG,
    KpaA,
    BarG,
    BarA,
}

impl PressureUnit {
    fn is_gauge(self) -> bool {
        matches!(self, Self::MpaG | Self::KpaG | Self::BarG)
    }
}

/// Convert a tagged pressure to absolute kPa.
pub fn pressure_to_kpa_abs(value: f64, unit: PressureUnit) -> f64 {
    let scaled = match unit {
        PressureUnit::MpaG | PressureUnit::MpaA => {
            Pressure::new::<megapascal>(value).get::<kilopascal>()
        }
        PressureUnit::KpaG | PressureUnit::KpaA => value,
        PressureUnit::BarG | PressureUnit::BarA => Pressure::new::<bar>(value).get::<kilopascal>(),
    };
    if unit.is_gauge() {
        scaled + ATM_KPA
    } else {
        scaled
    }
}

/// Temperature unit tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

/// Convert a tagged temperature to Kelvin.
pub fn temperature_to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => ThermodynamicTemperature::new::<degree_celsius>(value),
        TemperatureUnit::Kelvin => ThermodynamicTemperature::new::<kelvin>(value),
        TemperatureUnit::Fahrenheit => ThermodynamicTemperature::new::<degree_fahrenheit>(value),
    }
    .get::<kelvin>()
}

/// Density unit tag. `KgPerNm3` tags a *normal* (0 °C, 101.325 kPa) density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KgPerM3,
    GPerCm3,
    KgPerNm3,
}

/// Density resolved to canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDensity {
    /// Density at inlet conditions, kg/m³.
    pub inlet_kg_m3: f64,
    /// Normal density, kg/Nm³, when the input carried one.
    pub normal_kg_nm3: Option<f64>,
}

/// Convert a tagged density to inlet-condition kg/m³.
///
/// A normal density is corrected to the inlet state by the ideal-gas law,
/// which is why this conversion takes the already-converted inlet pressure
/// and temperature.
pub fn resolve_density(
    value: f64,
    unit: DensityUnit,
    p1_kpa_abs: f64,
    t1_k: f64,
) -> ResolvedDensity {
    match unit {
        DensityUnit::KgPerM3 => ResolvedDensity {
            inlet_kg_m3: value,
            normal_kg_nm3: None,
        },
        DensityUnit::GPerCm3 => ResolvedDensity {
            inlet_kg_m3: value * 1000.0,
            normal_kg_nm3: None,
        },
        DensityUnit::KgPerNm3 => ResolvedDensity {
            inlet_kg_m3: value * (p1_kpa_abs / ATM_KPA) * (NORMAL_T_K / t1_k),
            normal_kg_nm3: Some(value),
        },
    }
}

/// Viscosity unit tag, kinematic or dynamic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    CentiStokes,
    M2PerS,
    CentiPoise,
    PascalSecond,
}

/// Convert a tagged viscosity to kinematic m²/s.
///
/// Dynamic forms divide by the already-converted inlet density.
pub fn viscosity_to_m2_s(value: f64, unit: ViscosityUnit, inlet_density_kg_m3: f64) -> f64 {
    match unit {
        ViscosityUnit::CentiStokes => value * 1.0e-6,
        ViscosityUnit::M2PerS => value,
        ViscosityUnit::CentiPoise => value * 1.0e-3 / inlet_density_kg_m3,
        ViscosityUnit::PascalSecond => value / inlet_density_kg_m3,
    }
}

/// Flow unit tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    /// Volumetric at inlet conditions.
    M3PerH,
    /// Mass flow.
    KgPerH,
    /// Standard volumetric (normal conditions).
    Nm3PerH,
}

/// Flow resolved onto all canonical bases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFlow {
    pub volumetric_m3_h: f64,
    pub mass_kg_h: f64,
    /// Standard volumetric flow; present only when a normal density is known.
    pub standard_nm3_h: Option<f64>,
}

/// Convert a tagged flow onto the volumetric/mass/standard bases.
///
/// Requires the resolved inlet density; a standard-volumetric input
/// additionally requires the normal density.
pub fn resolve_flow(
    value: f64,
    unit: FlowUnit,
    inlet_density_kg_m3: f64,
    normal_density_kg_nm3: Option<f64>,
) -> CoreResult<ResolvedFlow> {
    match unit {
        FlowUnit::M3PerH => {
            let mass = value * inlet_density_kg_m3;
            Ok(ResolvedFlow {
                volumetric_m3_h: value,
                mass_kg_h: mass,
                standard_nm3_h: normal_density_kg_nm3.map(|rn| mass / rn),
            })
        }
        FlowUnit::KgPerH => Ok(ResolvedFlow {
            volumetric_m3_h: value / inlet_density_kg_m3,
            mass_kg_h: value,
            standard_nm3_h: normal_density_kg_nm3.map(|rn| value / rn),
        }),
        FlowUnit::Nm3PerH => {
            let rn = normal_density_kg_nm3.ok_or(CoreError::InvalidArg {
                what: "standard volumetric flow requires a normal density",
            })?;
            let mass = value * rn;
            Ok(ResolvedFlow {
                volumetric_m3_h: mass / inlet_density_kg_m3,
                mass_kg_h: mass,
                standard_nm3_h: Some(value),
            })
        }
    }
}
