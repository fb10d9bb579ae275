use crate::geometry::epsilon::DEFAULT_EPSILON_F64;
use crate::geometry::vector3::Vector3;
use crate::geometry::vertex::Vertex;
use crate::serialization::gpu_ready_serialization_buffer::GpuReadySerializationBuffer;
use crate::serialization::serializable_for_gpu::SerializableForGpu;
use cgmath::AbsDiffEq;
use derive_more::Display;
use std::ops::Add;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub struct TriangleIndex(pub usize);

impl TriangleIndex {
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0 as u32
    }
}

impl Add<usize> for TriangleIndex {
    type Output = TriangleIndex;

    fn add(self, right: usize) -> Self::Output {
        TriangleIndex(self.0 + right)
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Triangle {
    a: Vertex,
    b: Vertex,
    c: Vertex,
}

impl Triangle {
    #[must_use]
    pub const fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { a, b, c }
    }

    /// All three vertices share `normal`.
    #[must_use]
    pub const fn flat(a: Vector3, b: Vector3, c: Vector3, normal: Vector3) -> Self {
        Self::new(Vertex::new(a, normal), Vertex::new(b, normal), Vertex::new(c, normal))
    }

    #[must_use]
    pub const fn a(&self) -> Vertex {
        self.a
    }

    #[must_use]
    pub const fn b(&self) -> Vertex {
        self.b
    }

    #[must_use]
    pub const fn c(&self) -> Vertex {
        self.c
    }

    #[must_use]
    pub const fn vertices(&self) -> [Vertex; 3] {
        [self.a, self.b, self.c]
    }

    /// Normal implied by the vertex order: counter-clockwise when seen from its tip.
    #[must_use]
    pub fn winding_normal(&self) -> Vector3 {
        let ab = self.b.position() - self.a.position();
        let ac = self.c.position() - self.a.position();
        ab.cross(ac)
    }
}

impl SerializableForGpu for Triangle {
    const SERIALIZED_QUARTET_COUNT: usize = 6;

    fn serialize_into(&self, container: &mut GpuReadySerializationBuffer) {
        debug_assert!(container.has_free_slot(), "buffer is full");
        for vertex in self.vertices() {
            let position = vertex.position();
            container.write_padded_quartet_f64(position.x, position.y, position.z);
        }
        for vertex in self.vertices() {
            let normal = vertex.normal();
            container.write_padded_quartet_f64(normal.x, normal.y, normal.z);
        }
        debug_assert!(container.object_fully_written());
    }
}

impl AbsDiffEq for Triangle {
    type Epsilon = f64;

    #[must_use]
    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON_F64
    }

    #[must_use]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
           Vertex::abs_diff_eq(&self.a, &other.a, epsilon)
        && Vertex::abs_diff_eq(&self.b, &other.b, epsilon)
        && Vertex::abs_diff_eq(&self.c, &other.c, epsilon)
    }
}
