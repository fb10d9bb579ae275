use crate::objects::material_index::MaterialIndex;
use crate::objects::triangle::TriangleIndex;
use crate::serialization::gpu_ready_serialization_buffer::GpuReadySerializationBuffer;
use crate::serialization::serializable_for_gpu::SerializableForGpu;

/// One contiguous run of triangles in the global triangle array, all sharing one material.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MeshInfo {
    first_triangle: TriangleIndex,
    triangle_count: usize,
    material: MaterialIndex,
}

impl MeshInfo {
    #[must_use]
    pub const fn new(first_triangle: TriangleIndex, triangle_count: usize, material: MaterialIndex) -> Self {
        MeshInfo { first_triangle, triangle_count, material }
    }

    #[must_use]
    pub const fn first_triangle(&self) -> TriangleIndex {
        self.first_triangle
    }

    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    #[must_use]
    pub const fn material(&self) -> MaterialIndex {
        self.material
    }

    /// Index one past the last triangle of the run.
    #[must_use]
    pub fn end(&self) -> TriangleIndex {
        self.first_triangle + self.triangle_count
    }
}

impl SerializableForGpu for MeshInfo {
    const SERIALIZED_QUARTET_COUNT: usize = 1;

    fn serialize_into(&self, container: &mut GpuReadySerializationBuffer) {
        container.write_quartet(|writer| {
            writer
                .write_unsigned(self.first_triangle.as_u32())
                .write_unsigned(self.triangle_count as u32)
                .write_unsigned(self.material.as_u32());
        });
    }
}
