pub(crate) const DEFAULT_EPSILON_F64: f64 = 1e-9;

// sin(angle) below this makes the spherical blend numerically meaningless
pub(crate) const SLERP_DEGENERACY_THRESHOLD: f64 = 1e-6;
