//! uom SI type aliases and constructors for the crate's typed seams.

use uom::si::f64::Length as UomLength;

/// Canonical length type (SI, f64) for typed seams such as the pipe
/// schedule table.
pub type Length = UomLength;

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::length::meter;

    #[test]
    fn millimeter_constructor() {
        let d = mm(114.3);
        assert!((d.get::<meter>() - 0.1143).abs() < 1e-12);
    }
}
