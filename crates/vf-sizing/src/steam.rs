//! Steam sizing.
//!
//! Steam shares the compressible solver with gas but is always sized on the
//! mass basis: a standard-volumetric tag makes no sense for vapor duty, so
//! any one present is discarded before dispatch.

use crate::gas::{size_compressible, CompressibleConditions, CompressibleOutcome};
use vf_piping::PipeGeometry;

/// Molecular weight of water vapor, kg/kmol.
pub const STEAM_MOLECULAR_WEIGHT: f64 = 18.015;

pub fn size_steam(
    c: &CompressibleConditions,
    geometry: &PipeGeometry,
    xt: f64,
) -> CompressibleOutcome {
    let mut mass_basis = c.clone();
    mass_basis.standard_nm3_h = None;
    size_compressible(&mass_basis, geometry, xt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{FlowRegime, FormulaVariant};

    fn steam_duty() -> CompressibleConditions {
        // 10 t/h of saturated steam, 1.0 MPa(g) to 0.4 MPa(g).
        CompressibleConditions {
            p1_kpa: 1101.325,
            dp_kpa: 600.0,
            t_k: 457.3,
            rho1_kg_m3: 5.64,
            mass_kg_h: 10_000.0,
            standard_nm3_h: None,
            molecular_weight: STEAM_MOLECULAR_WEIGHT,
            compressibility: 1.0,
            gamma: 1.33,
        }
    }

    #[test]
    fn saturated_steam_letdown() {
        let g = PipeGeometry::from_diameters(150.0, 150.0, 150.0, Some(7.11));
        let out = size_steam(&steam_duty(), &g, 0.7);
        assert_eq!(out.regime, FlowRegime::NonChoked);
        assert_eq!(out.variant, FormulaVariant::NonChokedPlain);
        assert!((out.kv - 74.8).abs() < 0.4, "Kv = {}", out.kv);
    }

    #[test]
    fn choked_steam_uses_capped_ratio() {
        let mut c = steam_duty();
        c.dp_kpa = 950.0;
        let g = PipeGeometry::from_diameters(150.0, 150.0, 150.0, Some(7.11));
        let out = size_steam(&c, &g, 0.7);
        assert_eq!(out.regime, FlowRegime::Choked);
        assert!((out.expansion_factor - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn stray_standard_flow_tag_is_ignored() {
        let mut c = steam_duty();
        c.standard_nm3_h = Some(12_000.0);
        let g = PipeGeometry::from_diameters(150.0, 150.0, 150.0, Some(7.11));
        let with_tag = size_steam(&c, &g, 0.7);
        let without = size_steam(&steam_duty(), &g, 0.7);
        assert_eq!(with_tag.kv, without.kv);
    }
}
