pub mod axis;
pub(crate) mod epsilon;
pub mod quaternion;
pub mod rigid_transform;
pub mod vector3;
pub mod vertex;
