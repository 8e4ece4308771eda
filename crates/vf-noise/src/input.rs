//! Noise-model inputs, already normalized by the caller.

use serde::{Deserialize, Serialize};

/// Downstream pipe wall material.
///
/// The transmission-loss constants are calibrated for steel walls; other
/// materials enter through their density via the wall mass law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PipeMaterial {
    #[default]
    CarbonSteel,
    StainlessSteel,
    Aluminum,
}

impl PipeMaterial {
    pub fn wall_density_kg_m3(self) -> f64 {
        match self {
            Self::CarbonSteel => 7800.0,
            Self::StainlessSteel => 7900.0,
            Self::Aluminum => 2700.0,
        }
    }
}

/// Gas/steam noise input. Pressures absolute kPa, pipe dimensions mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasNoiseInput {
    pub p1_kpa: f64,
    pub p2_kpa: f64,
    pub t1_k: f64,
    pub molecular_weight: f64,
    pub gamma: f64,
    pub mass_flow_kg_h: f64,
    /// Computed flow coefficient at the operating point.
    pub kv: f64,
    pub fl: f64,
    pub fd: f64,
    /// Downstream pipe internal diameter.
    pub pipe_inner_diameter_mm: f64,
    pub pipe_wall_thickness_mm: f64,
    pub pipe_material: PipeMaterial,
}

/// Liquid noise input. Same unit conventions as [`GasNoiseInput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidNoiseInput {
    pub p1_kpa: f64,
    pub p2_kpa: f64,
    pub vapor_pressure_kpa: f64,
    pub density_kg_m3: f64,
    pub volumetric_flow_m3_h: f64,
    pub kv: f64,
    pub fl: f64,
    pub fd: f64,
    pub pipe_inner_diameter_mm: f64,
    pub pipe_wall_thickness_mm: f64,
    pub pipe_material: PipeMaterial,
}
