use crate::geometry::rigid_transform::RigidTransform;
use crate::geometry::vector3::Vector3;
use crate::objects::material_index::MaterialIndex;
use crate::objects::triangle::Triangle;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter};

pub const TRIANGLES_PER_BLOCK: usize = 12;

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter)]
pub(crate) enum BoxFace {
    Top,
    Bottom,
    Front,
    Back,
    Right,
    Left,
}

/// Outward half extents of an oriented box, one per basis axis.
struct HalfExtents {
    right: Vector3,
    up: Vector3,
    front: Vector3,
}

impl HalfExtents {
    /// Returns the outward normal and two in-plane edges (u, v) of a face, ordered so that
    /// `u × v` points along the normal for a right-handed basis.
    #[must_use]
    fn face_frame(&self, face: BoxFace, transform: &RigidTransform) -> (Vector3, Vector3, Vector3, Vector3) {
        match face {
            BoxFace::Top => (transform.up(), self.up, self.front, self.right),
            BoxFace::Bottom => (-transform.up(), -self.up, self.right, self.front),
            BoxFace::Front => (transform.look(), self.front, self.right, self.up),
            BoxFace::Back => (-transform.look(), -self.front, self.up, self.right),
            BoxFace::Right => (transform.right(), self.right, self.up, self.front),
            BoxFace::Left => (-transform.right(), -self.right, self.front, self.up),
        }
    }
}

/// An oriented box. Never stored in compiled output: it is expanded into twelve flat-shaded
/// triangles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Block {
    transform: RigidTransform,
    size: Vector3,
    material: MaterialIndex,
}

impl Block {
    #[must_use]
    pub const fn new(transform: RigidTransform, size: Vector3, material: MaterialIndex) -> Self {
        Block { transform, size, material }
    }

    #[must_use]
    pub const fn transform(&self) -> RigidTransform {
        self.transform
    }

    #[must_use]
    pub const fn size(&self) -> Vector3 {
        self.size
    }

    #[must_use]
    pub const fn material(&self) -> MaterialIndex {
        self.material
    }

    #[must_use]
    fn half_extents(&self) -> HalfExtents {
        HalfExtents {
            right: self.transform.right() * (self.size.x / 2.0),
            up: self.transform.up() * (self.size.y / 2.0),
            front: self.transform.look() * (self.size.z / 2.0),
        }
    }

    #[must_use]
    fn is_left_handed(&self) -> bool {
        self.transform.right().cross(self.transform.up()).dot(self.transform.look()) < 0.0
    }

    /// Two triangles per face, counter-clockwise when viewed from outside the box. Each is
    /// flat-shaded with the face's basis axis (negated for bottom, back and left).
    #[must_use]
    pub fn triangulate(&self) -> [Triangle; TRIANGLES_PER_BLOCK] {
        let half_extents = self.half_extents();
        let center = self.transform.position();
        let mirrored = self.is_left_handed();

        let mut result = [Triangle::flat(center, center, center, Vector3::ZERO); TRIANGLES_PER_BLOCK];
        for (face_index, face) in BoxFace::iter().enumerate() {
            let (normal, offset, u, v) = half_extents.face_frame(face, &self.transform);
            let face_center = center + offset;

            let p0 = face_center - u - v;
            let p1 = face_center + u - v;
            let p2 = face_center + u + v;
            let p3 = face_center - u + v;

            let (first, second) = if mirrored {
                (Triangle::flat(p0, p2, p1, normal), Triangle::flat(p0, p3, p2, normal))
            } else {
                (Triangle::flat(p0, p1, p2, normal), Triangle::flat(p0, p2, p3, normal))
            };
            result[2 * face_index] = first;
            result[2 * face_index + 1] = second;
        }
        result
    }
}
