use crate::geometry::axis::Axis;
use crate::geometry::epsilon::DEFAULT_EPSILON_F64;
use crate::geometry::quaternion::Quaternion;
use crate::geometry::vector3::Vector3;
use cgmath::{AbsDiffEq, Matrix4};
use std::ops::Mul;

pub const PLACEMENT_COMPONENTS_COUNT: usize = 12;
pub const MATRIX_ENTRIES_COUNT: usize = 16;

/// Which quaternion component dominates the rotation matrix; the extraction formula divides
/// by that component, so picking the largest keeps the division well conditioned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum DominantComponent {
    W,
    X,
    Y,
    Z,
}

/// Position plus an orthonormal basis; the basis vectors are the columns of the rotation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RigidTransform {
    position: Vector3,
    right: Vector3,
    up: Vector3,
    look: Vector3,
}

impl RigidTransform {
    pub const IDENTITY: RigidTransform = RigidTransform {
        position: Vector3::ZERO,
        right: Vector3::UNIT_X,
        up: Vector3::UNIT_Y,
        look: Vector3::UNIT_Z,
    };

    #[must_use]
    pub const fn new(position: Vector3, right: Vector3, up: Vector3, look: Vector3) -> Self {
        RigidTransform { position, right, up, look }
    }

    #[must_use]
    pub const fn from_position(position: Vector3) -> Self {
        RigidTransform { position, ..RigidTransform::IDENTITY }
    }

    /// Layout: position, right, up, look (three components each).
    #[must_use]
    pub fn from_placement(placement: &[f64; PLACEMENT_COMPONENTS_COUNT]) -> Self {
        let vector_at = |start: usize| Vector3::new(placement[start], placement[start + 1], placement[start + 2]);
        RigidTransform::new(vector_at(0), vector_at(3), vector_at(6), vector_at(9))
    }

    #[must_use]
    pub fn placement(&self) -> [f64; PLACEMENT_COMPONENTS_COUNT] {
        [
            self.position.x, self.position.y, self.position.z,
            self.right.x, self.right.y, self.right.z,
            self.up.x, self.up.y, self.up.z,
            self.look.x, self.look.y, self.look.z,
        ]
    }

    /// Right-handed rotation around a coordinate axis, located at the origin.
    #[must_use]
    pub fn from_axis_angle(axis: Axis, angle_radians: f64) -> Self {
        let (sin, cos) = angle_radians.sin_cos();
        let (right, up, look) = match axis {
            Axis::X => (Vector3::UNIT_X, Vector3::new(0.0, cos, sin), Vector3::new(0.0, -sin, cos)),
            Axis::Y => (Vector3::new(cos, 0.0, -sin), Vector3::UNIT_Y, Vector3::new(sin, 0.0, cos)),
            Axis::Z => (Vector3::new(cos, sin, 0.0), Vector3::new(-sin, cos, 0.0), Vector3::UNIT_Z),
        };
        RigidTransform::new(Vector3::ZERO, right, up, look)
    }

    /// Composes roll (around X), pitch (around Y) and yaw (around Z) in that order, i.e.
    /// `X * Y * Z`. Inverse of [`RigidTransform::euler_xyz`].
    #[must_use]
    pub fn from_euler_angles(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::from_euler_angles_xyz(roll, pitch, yaw)
    }

    #[must_use]
    pub fn from_euler_angles_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::from_axis_angle(Axis::X, x)
            .mul(Self::from_axis_angle(Axis::Y, y))
            .mul(Self::from_axis_angle(Axis::Z, z))
    }

    /// `Y * X * Z`; inverse of [`RigidTransform::euler_yxz`].
    #[must_use]
    pub fn from_euler_angles_yxz(x: f64, y: f64, z: f64) -> Self {
        Self::from_axis_angle(Axis::Y, y)
            .mul(Self::from_axis_angle(Axis::X, x))
            .mul(Self::from_axis_angle(Axis::Z, z))
    }

    #[must_use]
    pub fn position(&self) -> Vector3 {
        self.position
    }

    #[must_use]
    pub fn right(&self) -> Vector3 {
        self.right
    }

    #[must_use]
    pub fn up(&self) -> Vector3 {
        self.up
    }

    #[must_use]
    pub fn look(&self) -> Vector3 {
        self.look
    }

    #[must_use]
    pub fn with_position(self, position: Vector3) -> Self {
        RigidTransform { position, ..self }
    }

    #[must_use]
    pub fn vector_to_world(&self, local: Vector3) -> Vector3 {
        self.right * local.x + self.up * local.y + self.look * local.z
    }

    #[must_use]
    pub fn point_to_world(&self, local: Vector3) -> Vector3 {
        self.vector_to_world(local) + self.position
    }

    /// Relies on the basis being orthonormal: the inverse rotation is the transpose.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let right = Vector3::new(self.right.x, self.up.x, self.look.x);
        let up = Vector3::new(self.right.y, self.up.y, self.look.y);
        let look = Vector3::new(self.right.z, self.up.z, self.look.z);
        let rotation = RigidTransform::new(Vector3::ZERO, right, up, look);
        rotation.with_position(-rotation.vector_to_world(self.position))
    }

    /// Position is interpolated linearly, orientation spherically.
    #[must_use]
    pub fn lerp(&self, other: RigidTransform, t: f64, short_way: bool) -> Self {
        let orientation = self.quaternion().slerp(other.quaternion(), t, short_way).cframe();
        orientation.with_position(self.position.lerp(other.position, t))
    }

    /// Column-major 4×4: right, up, look, position; the last row is `(0, 0, 0, 1)`.
    #[must_use]
    pub fn matrix(&self) -> [f64; MATRIX_ENTRIES_COUNT] {
        [
            self.right.x, self.right.y, self.right.z, 0.0,
            self.up.x, self.up.y, self.up.z, 0.0,
            self.look.x, self.look.y, self.look.z, 0.0,
            self.position.x, self.position.y, self.position.z, 1.0,
        ]
    }

    #[must_use]
    pub fn to_affine(&self) -> Matrix4<f64> {
        let m = self.matrix();
        Matrix4::new(
            m[0], m[1], m[2], m[3],
            m[4], m[5], m[6], m[7],
            m[8], m[9], m[10], m[11],
            m[12], m[13], m[14], m[15],
        )
    }

    #[must_use]
    fn trace(&self) -> f64 {
        self.right.x + self.up.y + self.look.z
    }

    #[must_use]
    pub(crate) fn dominant_component(&self) -> DominantComponent {
        let (m00, m11, m22) = (self.right.x, self.up.y, self.look.z);
        if self.trace() > 0.0 {
            DominantComponent::W
        } else if m00 > m11 && m00 > m22 {
            DominantComponent::X
        } else if m11 > m22 {
            DominantComponent::Y
        } else {
            DominantComponent::Z
        }
    }

    #[must_use]
    pub fn quaternion(&self) -> Quaternion {
        let (m00, m10, m20) = (self.right.x, self.right.y, self.right.z);
        let (m01, m11, m21) = (self.up.x, self.up.y, self.up.z);
        let (m02, m12, m22) = (self.look.x, self.look.y, self.look.z);

        let scale = |t: f64| 0.5 / t.sqrt();

        match self.dominant_component() {
            DominantComponent::W => {
                let s = scale(1.0 + self.trace());
                Quaternion::new((m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s, 0.25 / s)
            }
            DominantComponent::X => {
                let s = scale(1.0 + m00 - m11 - m22);
                Quaternion::new(0.25 / s, (m01 + m10) * s, (m02 + m20) * s, (m21 - m12) * s)
            }
            DominantComponent::Y => {
                let s = scale(1.0 + m11 - m00 - m22);
                Quaternion::new((m01 + m10) * s, 0.25 / s, (m12 + m21) * s, (m02 - m20) * s)
            }
            DominantComponent::Z => {
                let s = scale(1.0 + m22 - m00 - m11);
                Quaternion::new((m02 + m20) * s, (m12 + m21) * s, 0.25 / s, (m10 - m01) * s)
            }
        }
    }

    /// Angles `(x, y, z)` such that `from_euler_angles_xyz(x, y, z)` rebuilds this orientation.
    /// Near ±90° around Y the X and Z angles are not separable (gimbal lock).
    #[must_use]
    pub fn euler_xyz(&self) -> Vector3 {
        let y = self.look.x.clamp(-1.0, 1.0).asin();
        let x = (-self.look.y).atan2(self.look.z);
        let z = (-self.up.x).atan2(self.right.x);
        Vector3::new(x, y, z)
    }

    /// Angles `(x, y, z)` such that `from_euler_angles_yxz(x, y, z)` rebuilds this orientation.
    #[must_use]
    pub fn euler_yxz(&self) -> Vector3 {
        let x = (-self.look.y).clamp(-1.0, 1.0).asin();
        let y = self.look.x.atan2(self.look.z);
        let z = self.right.y.atan2(self.up.y);
        Vector3::new(x, y, z)
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        RigidTransform::IDENTITY
    }
}

/// Composition: `a * b` applies `b` first, then `a`.
impl Mul for RigidTransform {
    type Output = RigidTransform;

    fn mul(self, other: RigidTransform) -> Self::Output {
        RigidTransform {
            position: self.point_to_world(other.position),
            right: self.vector_to_world(other.right),
            up: self.vector_to_world(other.up),
            look: self.vector_to_world(other.look),
        }
    }
}

impl AbsDiffEq for RigidTransform {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON_F64
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
           Vector3::abs_diff_eq(&self.position, &other.position, epsilon)
        && Vector3::abs_diff_eq(&self.right, &other.right, epsilon)
        && Vector3::abs_diff_eq(&self.up, &other.up, epsilon)
        && Vector3::abs_diff_eq(&self.look, &other.look, epsilon)
    }
}
