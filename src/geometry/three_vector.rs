//! Defines a spatial 3-vector: (x, y, z)

/// A three-vector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreeVector {
    x: f64,
    y: f64,
    z: f64,
}

impl ThreeVector {
    /// Creates a new three-vector with the specified components.
    pub fn new(x: f64, y: f64, z: f64) -> ThreeVector {
        ThreeVector{x, y, z}
    }

    /// The zero vector
    pub fn zero() -> ThreeVector {
        ThreeVector::new(0.0, 0.0, 0.0)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the cross product of two three-vectors.
    pub fn cross(self, other: ThreeVector) -> ThreeVector {
        ThreeVector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the squared magnitude of the three-vector.
    pub fn norm_sqr(self) -> f64 {
        self * self
    }

    /// Returns the magnitude of the three-vector.
    pub fn length(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Sum of the absolute differences between the components of
    /// `self` and `other`.
    pub fn l1_distance(self, other: ThreeVector) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    /// Returns a new three-vector which has the same direction,
    /// but unit magnitude, or `None` if `self` has zero (or
    /// non-finite) length.
    pub fn try_normalize(self) -> Option<Self> {
        let mag = self.length();
        if mag > 0.0 && mag.is_finite() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Rotates `self` around the given `axis` by an angle `theta`,
    /// with positive angles corresponding to a right-handed rotation,
    /// and returns the result. The axis must be correctly normalized.
    pub fn rotate_around(self, axis: ThreeVector, theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        let k = 1.0 - c;
        ThreeVector::new(
            (c + axis.x * axis.x * k) * self.x
                + (axis.x * axis.y * k - axis.z * s) * self.y
                + (axis.x * axis.z * k + axis.y * s) * self.z,
            (axis.y * axis.x * k + axis.z * s) * self.x
                + (c + axis.y * axis.y * k) * self.y
                + (axis.y * axis.z * k - axis.x * s) * self.z,
            (axis.z * axis.x * k - axis.y * s) * self.x
                + (axis.z * axis.y * k + axis.x * s) * self.y
                + (c + axis.z * axis.z * k) * self.z,
        )
    }
}

impl std::ops::Index<i32> for ThreeVector {
    type Output = f64;
    fn index(&self, index: i32) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: a three vector has 3 components but the index is {}", index)
        }
    }
}

impl std::fmt::Display for ThreeVector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl std::ops::Add for ThreeVector {
    type Output = ThreeVector;
    fn add(self, other: ThreeVector) -> ThreeVector {
        ThreeVector {x: self.x + other.x, y: self.y + other.y, z: self.z + other.z}
    }
}

impl std::ops::Sub for ThreeVector {
    type Output = ThreeVector;
    fn sub(self, other: ThreeVector) -> ThreeVector {
        ThreeVector {x: self.x - other.x, y: self.y - other.y, z: self.z - other.z}
    }
}

// Dot product
impl std::ops::Mul for ThreeVector {
    type Output = f64;
    fn mul(self, other: ThreeVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl std::ops::Mul<f64> for ThreeVector {
    type Output = ThreeVector;
    fn mul(self, other: f64) -> ThreeVector {
        ThreeVector{x: self.x * other, y: self.y * other, z: self.z * other}
    }
}

impl std::ops::Mul<ThreeVector> for f64 {
    type Output = ThreeVector;
    fn mul(self, other: ThreeVector) -> ThreeVector {
        ThreeVector{x: self * other.x, y: self * other.y, z: self * other.z}
    }
}

impl std::ops::Neg for ThreeVector {
    type Output = ThreeVector;
    fn neg(self) -> ThreeVector {
        ThreeVector{x: -self.x, y: -self.y, z: -self.z}
    }
}

impl std::ops::Div<f64> for ThreeVector {
    type Output = ThreeVector;
    fn div(self, other: f64) -> ThreeVector {
        ThreeVector{x: self.x / other, y: self.y / other, z: self.z / other}
    }
}

impl std::convert::From<[f64; 3]> for ThreeVector {
    fn from(item: [f64; 3]) -> Self {
        ThreeVector::new(item[0], item[1], item[2])
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts;
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn rotation() {
        let v = ThreeVector::new(1.0, 0.0, 0.0); // along x
        let v = v.rotate_around(ThreeVector::new(0.0, 0.0, 1.0), consts::FRAC_PI_2); // along y
        let v = v.rotate_around(ThreeVector::new(1.0, 0.0, 0.0), consts::FRAC_PI_2); // along z
        println!("v = {:?}", v);
        let target = ThreeVector::new(0.0, 0.0, 1.0);
        assert!((v - target).length() < 1.0e-10);
    }

    #[test]
    fn normalization() {
        let v = ThreeVector::new(3.0, 0.0, 4.0).try_normalize().unwrap();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1.0e-15);
        assert_abs_diff_eq!(v[0], 0.6, epsilon = 1.0e-15);
        assert!(ThreeVector::zero().try_normalize().is_none());
        assert!(ThreeVector::new(f64::NAN, 0.0, 1.0).try_normalize().is_none());
    }

    #[test]
    fn products() {
        let a: ThreeVector = [1.0, 2.0, 3.0].into();
        let b: ThreeVector = [-2.0, 0.5, 1.0].into();
        assert_eq!(a * b, 2.0);
        let c = a.cross(b);
        assert_abs_diff_eq!(c * a, 0.0, epsilon = 1.0e-14);
        assert_abs_diff_eq!(c * b, 0.0, epsilon = 1.0e-14);
        assert_eq!(a.l1_distance(b), 3.0 + 1.5 + 2.0);
        assert_eq!(format!("{}", a), "1 2 3");
    }
}
