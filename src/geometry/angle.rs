//! Angles between directions

use super::ThreeVector;

/// Returns the unsigned angle, in radians, between `a` and `b`.
///
/// Equivalent to the arccosine of the normalized dot product, clamped
/// to [-1, 1], but evaluated as `atan2(|a x b|, a.b)` so that nearly
/// (anti)parallel vectors give accurate small angles rather than NaN or
/// a floor of ~1e-8 rad. If either vector has zero length, the angle is
/// taken to be zero.
pub fn angle_safe(a: ThreeVector, b: ThreeVector) -> f64 {
    if a.norm_sqr() == 0.0 || b.norm_sqr() == 0.0 {
        return 0.0;
    }
    let sin_theta = a.cross(b).length();
    let cos_theta = a * b;
    sin_theta.atan2(cos_theta)
}

#[cfg(test)]
mod tests {
    use std::f64::consts;
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn orthogonal_and_parallel() {
        let x = ThreeVector::new(1.0, 0.0, 0.0);
        let y = ThreeVector::new(0.0, 2.0, 0.0);
        assert_abs_diff_eq!(angle_safe(x, y), consts::FRAC_PI_2, epsilon = 1.0e-15);
        assert_eq!(angle_safe(x, 5.0 * x), 0.0);
        assert_abs_diff_eq!(angle_safe(x, -x), consts::PI, epsilon = 1.0e-15);
    }

    #[test]
    fn near_parallel() {
        let a = ThreeVector::new(0.1, 0.2, 0.3);
        assert_eq!(angle_safe(a, a), 0.0);

        let theta = angle_safe(a, 3.0 * a);
        assert!(theta < 1.0e-15);

        let theta = angle_safe(a, -3.0 * a);
        assert_abs_diff_eq!(theta, consts::PI, epsilon = 1.0e-15);

        // small angles are resolved, not lost to rounding
        let b = ThreeVector::new(1.0, 1.0e-10, 0.0);
        assert_abs_diff_eq!(angle_safe(ThreeVector::new(1.0, 0.0, 0.0), b), 1.0e-10, epsilon = 1.0e-20);
    }

    #[test]
    fn zero_length_is_zero_angle() {
        let x = ThreeVector::new(1.0, 0.0, 0.0);
        assert_eq!(angle_safe(ThreeVector::zero(), x), 0.0);
        assert_eq!(angle_safe(x, ThreeVector::zero()), 0.0);
        assert_eq!(angle_safe(ThreeVector::zero(), ThreeVector::zero()), 0.0);
    }
}
