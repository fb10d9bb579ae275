use crate::geometry::epsilon::{DEFAULT_EPSILON_F64, SLERP_DEGENERACY_THRESHOLD};
use crate::geometry::rigid_transform::RigidTransform;
use crate::geometry::vector3::Vector3;
use cgmath::AbsDiffEq;
use std::f64::consts::PI;
use std::ops::{Add, Mul, Neg};

/// Rotation as `(x, y, z)` vector part plus `w` scalar part. Unit length is expected but not
/// enforced; `q` and `-q` describe the same rotation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Quaternion { x, y, z, w }
    }

    /// `axis` has to be of unit length.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, angle_radians: f64) -> Self {
        let (sin, cos) = (angle_radians / 2.0).sin_cos();
        let imaginary = axis * sin;
        Quaternion::new(imaginary.x, imaginary.y, imaginary.z, cos)
    }

    #[must_use]
    pub fn vector_part(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[must_use]
    fn from_parts(vector: Vector3, scalar: f64) -> Self {
        Quaternion::new(vector.x, vector.y, vector.z, scalar)
    }

    #[must_use]
    pub fn dot(self, other: Quaternion) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[must_use]
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[must_use]
    pub fn normalize(self) -> Self {
        self * (1.0 / self.norm())
    }

    #[must_use]
    pub fn conjugate(self) -> Self {
        Quaternion::new(-self.x, -self.y, -self.z, self.w)
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        self.conjugate() * (1.0 / self.dot(self))
    }

    #[must_use]
    pub fn exp(self) -> Self {
        let vector = self.vector_part();
        let r = vector.magnitude();
        let magnitude = self.w.exp();
        // sin(r)/r → 1 as r → 0, and the vector part is zero there anyway
        let vector_scale = if r > 0.0 { r.sin() / r } else { 1.0 };
        Quaternion::from_parts(vector * (magnitude * vector_scale), magnitude * r.cos())
    }

    #[must_use]
    pub fn ln(self) -> Self {
        let vector = self.vector_part();
        let r = vector.magnitude();
        let vector_scale = if r > 0.0 { r.atan2(self.w) / r } else { 0.0 };
        Quaternion::from_parts(vector * vector_scale, self.norm().ln())
    }

    /// Fractional rotation: `pow(0.5)` turns half as far around the same axis.
    #[must_use]
    pub fn pow(self, exponent: f64) -> Self {
        (self.ln() * exponent).exp()
    }

    /// Spherical interpolation. With `short_way` the path along the shorter arc is taken by
    /// flipping `self` into the hemisphere of `other` (at most once). Nearly coincident
    /// rotations fall back to a linear blend; nearly opposite ones turn through an orthogonal
    /// quaternion.
    #[must_use]
    pub fn slerp(self, other: Quaternion, t: f64, short_way: bool) -> Self {
        let mut from = self;
        let mut cosine = from.dot(other);
        if short_way && cosine < 0.0 {
            from = -from;
            cosine = -cosine;
        }

        let angle = cosine.clamp(-1.0, 1.0).acos();
        let sine = angle.sin();
        if sine.abs() < SLERP_DEGENERACY_THRESHOLD {
            if cosine > 0.0 {
                return from * (1.0 - t) + other * t;
            }
            // nearly opposite: half a turn through a quaternion orthogonal to `from`
            let orthogonal = Quaternion::new(-from.y, from.x, -from.w, from.z);
            return from * (PI * t).cos() + orthogonal * (PI * t).sin();
        }

        (from * ((1.0 - t) * angle).sin() + other * (t * angle).sin()) * (1.0 / sine)
    }

    /// Rotation-only frame at the origin. A zero quaternion maps to the identity frame.
    #[must_use]
    pub fn cframe(self) -> RigidTransform {
        let norm = self.norm();
        if norm == 0.0 {
            return RigidTransform::IDENTITY;
        }
        let Quaternion { x, y, z, w } = self * (1.0 / norm);

        let right = Vector3::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y + z * w),
            2.0 * (x * z - y * w),
        );
        let up = Vector3::new(
            2.0 * (x * y - z * w),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z + x * w),
        );
        let look = Vector3::new(
            2.0 * (x * z + y * w),
            2.0 * (y * z - x * w),
            1.0 - 2.0 * (x * x + y * y),
        );

        RigidTransform::new(Vector3::ZERO, right, up, look)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::IDENTITY
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    fn add(self, right: Quaternion) -> Self::Output {
        Quaternion::new(self.x + right.x, self.y + right.y, self.z + right.z, self.w + right.w)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;

    fn mul(self, scale: f64) -> Self::Output {
        Quaternion::new(self.x * scale, self.y * scale, self.z * scale, self.w * scale)
    }
}

/// Hamilton product; `a * b` rotates by `b` first, then by `a`.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, right: Quaternion) -> Self::Output {
        let (a, b) = (self, right);
        Quaternion::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Self::Output {
        Quaternion::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON_F64
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
           f64::abs_diff_eq(&self.x, &other.x, epsilon)
        && f64::abs_diff_eq(&self.y, &other.y, epsilon)
        && f64::abs_diff_eq(&self.z, &other.z, epsilon)
        && f64::abs_diff_eq(&self.w, &other.w, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::assert_abs_diff_eq;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-9;

    #[must_use]
    fn same_rotation(left: Quaternion, right: Quaternion) -> bool {
        left.abs_diff_eq(&right, TOLERANCE) || left.abs_diff_eq(&-right, TOLERANCE)
    }

    #[test]
    fn test_hamilton_product_basis() {
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);

        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_hamilton_product_matches_cgmath() {
        let a = Quaternion::new(0.1, -0.7, 0.3, 0.5);
        let b = Quaternion::new(-0.4, 0.2, 0.9, -0.1);

        let expected = cgmath::Quaternion::new(a.w, a.x, a.y, a.z) * cgmath::Quaternion::new(b.w, b.x, b.y, b.z);
        let actual = a * b;

        assert_abs_diff_eq!(actual, Quaternion::new(expected.v.x, expected.v.y, expected.v.z, expected.s));
    }

    #[test]
    fn test_inverse() {
        let system_under_test = Quaternion::new(1.0, 2.0, -3.0, 4.0);
        assert_abs_diff_eq!(system_under_test * system_under_test.inverse(), Quaternion::IDENTITY);
        assert_abs_diff_eq!(system_under_test.inverse() * system_under_test, Quaternion::IDENTITY);
    }

    #[test]
    fn test_exp_ln_round_trip() {
        let system_under_test = Quaternion::from_axis_angle(Vector3::new(1.0, 2.0, 2.0).unit(), 1.3);
        assert_abs_diff_eq!(system_under_test.ln().exp(), system_under_test);
    }

    #[test]
    fn test_exp_ln_of_pure_scalar() {
        let system_under_test = Quaternion::new(0.0, 0.0, 0.0, 2.0);

        let logarithm = system_under_test.ln();
        assert_abs_diff_eq!(logarithm, Quaternion::new(0.0, 0.0, 0.0, 2.0_f64.ln()));
        assert_abs_diff_eq!(logarithm.exp(), system_under_test);
        assert_abs_diff_eq!(Quaternion::new(0.0, 0.0, 0.0, 0.0).exp(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_pow_halves_rotation() {
        let axis = Vector3::UNIT_Z;
        let system_under_test = Quaternion::from_axis_angle(axis, FRAC_PI_2);

        assert_abs_diff_eq!(system_under_test.pow(0.5), Quaternion::from_axis_angle(axis, FRAC_PI_2 / 2.0));
        assert_abs_diff_eq!(system_under_test.pow(1.0), system_under_test);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.3)]
    #[case(1.0)]
    fn test_slerp_of_identical_rotations(#[case] t: f64) {
        let system_under_test = Quaternion::from_axis_angle(Vector3::UNIT_Y, 0.8);

        assert_abs_diff_eq!(system_under_test.slerp(system_under_test, t, true), system_under_test);
        assert_abs_diff_eq!(system_under_test.slerp(system_under_test, t, false), system_under_test);
    }

    #[test]
    fn test_slerp_midpoint() {
        let from = Quaternion::IDENTITY;
        let to = Quaternion::from_axis_angle(Vector3::UNIT_X, FRAC_PI_2);

        let actual = from.slerp(to, 0.5, true);

        assert_abs_diff_eq!(actual, Quaternion::from_axis_angle(Vector3::UNIT_X, FRAC_PI_2 / 2.0));
    }

    #[test]
    fn test_slerp_endpoints() {
        let from = Quaternion::from_axis_angle(Vector3::UNIT_Z, 0.2);
        let to = Quaternion::from_axis_angle(Vector3::UNIT_X, 2.0);

        assert_abs_diff_eq!(from.slerp(to, 0.0, false), from);
        assert_abs_diff_eq!(from.slerp(to, 1.0, false), to);
    }

    #[test]
    fn test_slerp_short_way_flips_hemisphere() {
        let from = Quaternion::from_axis_angle(Vector3::UNIT_Z, 0.1);
        let to = -Quaternion::from_axis_angle(Vector3::UNIT_Z, 0.5);

        let short = from.slerp(to, 0.5, true);
        let long = from.slerp(to, 0.5, false);

        assert!(same_rotation(short, Quaternion::from_axis_angle(Vector3::UNIT_Z, 0.3)));
        assert!(!same_rotation(long, short));
    }

    #[test]
    fn test_slerp_nearly_identical_is_finite() {
        let from = Quaternion::from_axis_angle(Vector3::UNIT_Z, 1.0);
        let to = Quaternion::from_axis_angle(Vector3::UNIT_Z, 1.0 + 1e-12);

        let actual = from.slerp(to, 0.5, true);

        assert!(actual.x.is_finite() && actual.y.is_finite() && actual.z.is_finite() && actual.w.is_finite());
        assert!(same_rotation(actual, from));
    }

    #[test]
    fn test_slerp_nearly_opposite_long_way_stays_unit() {
        let from = Quaternion::from_axis_angle(Vector3::UNIT_Z, 0.3);
        let to = -(from * Quaternion::from_axis_angle(Vector3::UNIT_X, 2e-7));

        let halfway = from.slerp(to, 0.5, false);

        assert_abs_diff_eq!(halfway.norm(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(from.slerp(to, 0.0, false).norm(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(from.slerp(to, 1.0, false), to, epsilon = 1e-6);
    }

    #[test]
    fn test_cframe_of_identity() {
        assert_abs_diff_eq!(Quaternion::IDENTITY.cframe(), RigidTransform::IDENTITY);
    }

    #[test]
    fn test_cframe_normalizes() {
        let unit = Quaternion::from_axis_angle(Vector3::UNIT_Y, 0.7);
        assert_abs_diff_eq!((unit * 3.0).cframe(), unit.cframe());
    }

    #[test]
    fn test_cframe_rotates_like_cgmath() {
        let system_under_test = Quaternion::from_axis_angle(Vector3::new(1.0, -1.0, 0.5).unit(), 2.1);
        let reference = cgmath::Quaternion::new(system_under_test.w, system_under_test.x, system_under_test.y, system_under_test.z);
        let probe = Vector3::new(0.3, -1.2, 2.0);

        let expected: Vector3 = cgmath::Rotation::rotate_vector(&reference, probe.into()).into();
        let actual = system_under_test.cframe().vector_to_world(probe);

        assert_abs_diff_eq!(actual, expected);
    }

    #[test]
    fn test_cframe_of_zero_quaternion() {
        assert_eq!(Quaternion::new(0.0, 0.0, 0.0, 0.0).cframe(), RigidTransform::IDENTITY);
    }

    #[rstest]
    #[case(Quaternion::IDENTITY)]
    #[case(Quaternion::from_axis_angle(Vector3::UNIT_X, PI))]
    #[case(Quaternion::from_axis_angle(Vector3::UNIT_Y, PI))]
    #[case(Quaternion::from_axis_angle(Vector3::UNIT_Z, PI))]
    #[case(Quaternion::from_axis_angle(Vector3::new(1.0, 1.0, 1.0).unit(), 2.5))]
    #[case(Quaternion::from_axis_angle(Vector3::new(-0.3, 0.9, 0.1).unit(), -3.0))]
    #[case(-Quaternion::from_axis_angle(Vector3::UNIT_X, 0.4))]
    fn test_cframe_quaternion_round_trip(#[case] system_under_test: Quaternion) {
        let actual = system_under_test.cframe().quaternion();
        assert!(same_rotation(actual, system_under_test), "{:?} vs {:?}", actual, system_under_test);
    }
}
