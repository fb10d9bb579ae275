use crate::geometry::axis::Axis;
use crate::geometry::epsilon::DEFAULT_EPSILON_F64;
use cgmath::AbsDiffEq;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// Plain 3D vector. Every operation returns a fresh value, nothing is mutated in place
/// except through [`Vector3::set`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    #[must_use]
    pub const fn splat(value: f64) -> Self {
        Vector3 { x: value, y: value, z: value }
    }

    /// Overwrites only the components that are present; `Some(0.0)` is a legitimate value.
    pub fn set(&mut self, x: Option<f64>, y: Option<f64>, z: Option<f64>) {
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
        if let Some(z) = z {
            self.z = z;
        }
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// The caller guarantees a non-zero magnitude; a zero vector yields non-finite components.
    #[must_use]
    pub fn unit(self) -> Self {
        self / self.magnitude()
    }

    #[must_use]
    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Vector3) -> Self {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[must_use]
    pub fn lerp(self, target: Vector3, t: f64) -> Self {
        self + (target - self) * t
    }

    #[must_use]
    pub fn nlerp(self, target: Vector3, t: f64) -> Self {
        self.lerp(target, t).unit()
    }

    #[must_use]
    pub fn min(self, other: Vector3) -> Self {
        Vector3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    #[must_use]
    pub fn max(self, other: Vector3) -> Self {
        Vector3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(value: [f64; 3]) -> Self {
        Vector3::new(value[0], value[1], value[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(value: Vector3) -> Self {
        value.to_array()
    }
}

impl From<Vector3> for cgmath::Vector3<f64> {
    fn from(value: Vector3) -> Self {
        cgmath::Vector3::new(value.x, value.y, value.z)
    }
}

impl From<cgmath::Vector3<f64>> for Vector3 {
    fn from(value: cgmath::Vector3<f64>) -> Self {
        Vector3::new(value.x, value.y, value.z)
    }
}

impl Index<Axis> for Vector3 {
    type Output = f64;

    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

macro_rules! component_wise_operator {
    ($trait_name:ident, $method:ident, $op:tt) => {
        impl $trait_name<Vector3> for Vector3 {
            type Output = Vector3;

            #[must_use]
            fn $method(self, right: Vector3) -> Self::Output {
                Vector3::new(self.x $op right.x, self.y $op right.y, self.z $op right.z)
            }
        }

        impl $trait_name<f64> for Vector3 {
            type Output = Vector3;

            #[must_use]
            fn $method(self, right: f64) -> Self::Output {
                Vector3::new(self.x $op right, self.y $op right, self.z $op right)
            }
        }
    };
}

component_wise_operator!(Add, add, +);
component_wise_operator!(Sub, sub, -);
component_wise_operator!(Mul, mul, *);
component_wise_operator!(Div, div, /);

impl Neg for Vector3 {
    type Output = Vector3;

    #[must_use]
    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON_F64
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
           f64::abs_diff_eq(&self.x, &other.x, epsilon)
        && f64::abs_diff_eq(&self.y, &other.y, epsilon)
        && f64::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}
