//! Static pipe-schedule table (standard wall, welded/seamless steel).
//!
//! Keyed by nominal size DN; absence of a key is a normal outcome handled
//! by the caller's fallback policy, not an error.

use vf_core::units::{mm, Length};

/// One schedule row: nominal size with outer diameter and wall thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleEntry {
    pub dn: u32,
    pub outer_diameter: Length,
    pub wall_thickness: Length,
}

/// (DN, outer Ø mm, wall mm)
const SCHEDULE: [(u32, f64, f64); 19] = [
    (15, 21.3, 2.77),
    (20, 26.9, 2.87),
    (25, 33.7, 3.38),
    (32, 42.4, 3.56),
    (40, 48.3, 3.68),
    (50, 60.3, 3.91),
    (65, 76.1, 5.16),
    (80, 88.9, 5.49),
    (100, 114.3, 6.02),
    (125, 139.7, 6.55),
    (150, 168.3, 7.11),
    (200, 219.1, 8.18),
    (250, 273.0, 9.27),
    (300, 323.9, 9.53),
    (350, 355.6, 9.53),
    (400, 406.4, 9.53),
    (450, 457.2, 9.53),
    (500, 508.0, 9.53),
    (600, 610.0, 9.53),
];

/// Exact-key lookup by nominal size.
pub fn schedule_entry(dn: u32) -> Option<ScheduleEntry> {
    SCHEDULE
        .iter()
        .find(|(size, _, _)| *size == dn)
        .map(|&(size, od, wt)| ScheduleEntry {
            dn: size,
            outer_diameter: mm(od),
            wall_thickness: mm(wt),
        })
}
