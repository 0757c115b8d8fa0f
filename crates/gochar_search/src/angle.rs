//! Angle normalization helpers.

/// Reduce an angular difference to the canonical range [-180, +180).
///
/// `normalize_angle(x) == normalize_angle(x + 360k)` for any integer k.
/// The boundary maps to the negative end: `normalize_angle(180.0)`
/// returns `-180.0`, so exact oppositions have a single representation.
pub fn normalize_angle(delta_deg: f64) -> f64 {
    (delta_deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Wrap a longitude into [0, 360).
pub fn wrap_longitude(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_basic() {
        assert!((normalize_angle(0.0) - 0.0).abs() < 1e-12);
        assert!((normalize_angle(90.0) - 90.0).abs() < 1e-12);
        assert!((normalize_angle(270.0) - (-90.0)).abs() < 1e-12);
        assert!((normalize_angle(-270.0) - 90.0).abs() < 1e-12);
        assert!((normalize_angle(360.0) - 0.0).abs() < 1e-12);
        assert!((normalize_angle(450.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_opposition_boundary() {
        assert_eq!(normalize_angle(180.0), -180.0);
        assert_eq!(normalize_angle(-180.0), -180.0);
        assert_eq!(normalize_angle(540.0), -180.0);
    }

    #[test]
    fn wrap_basic() {
        assert!((wrap_longitude(360.0) - 0.0).abs() < 1e-12);
        assert!((wrap_longitude(-10.0) - 350.0).abs() < 1e-12);
        assert!((wrap_longitude(725.0) - 5.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn normalize_in_range(x in -1e6f64..1e6) {
            let n = normalize_angle(x);
            prop_assert!((-180.0..180.0).contains(&n), "normalize({x}) = {n}");
        }

        #[test]
        fn normalize_period_360(x in -1e4f64..1e4, k in -20i32..20) {
            let a = normalize_angle(x);
            let b = normalize_angle(x + 360.0 * k as f64);
            prop_assert!((a - b).abs() < 1e-6, "x={x} k={k}: {a} vs {b}");
        }

        #[test]
        fn wrap_in_range(x in -1e6f64..1e6) {
            let w = wrap_longitude(x);
            prop_assert!((0.0..360.0).contains(&w), "wrap({x}) = {w}");
        }
    }
}
