use crate::geometry::epsilon::DEFAULT_EPSILON_F64;
use crate::geometry::vector3::Vector3;
use cgmath::AbsDiffEq;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    position: Vector3,
    normal: Vector3,
}

impl AbsDiffEq for Vertex {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON_F64
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Vector3::abs_diff_eq(&self.position, &other.position, epsilon) && Vector3::abs_diff_eq(&self.normal, &other.normal, epsilon)
    }
}

impl Vertex {
    #[must_use]
    pub const fn new(position: Vector3, normal: Vector3) -> Vertex {
        Vertex { position, normal }
    }

    #[must_use]
    pub const fn position(&self) -> Vector3 {
        self.position
    }

    #[must_use]
    pub const fn normal(&self) -> Vector3 {
        self.normal
    }
}
