use crate::geometry::vector3::Vector3;
use crate::objects::material_index::MaterialIndex;
use crate::serialization::gpu_ready_serialization_buffer::GpuReadySerializationBuffer;
use crate::serialization::serializable_for_gpu::SerializableForGpu;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
    material: MaterialIndex,
}

impl Sphere {
    /// Zero radius is accepted and yields a degenerate sphere.
    ///
    /// # Panics
    /// If `radius` is negative or NaN.
    #[must_use]
    pub fn new(center: Vector3, radius: f64, material: MaterialIndex) -> Self {
        assert!(radius >= 0.0, "radius must not be negative");
        Sphere { center, radius, material }
    }

    #[must_use]
    pub const fn center(&self) -> Vector3 {
        self.center
    }

    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub const fn material(&self) -> MaterialIndex {
        self.material
    }
}

impl SerializableForGpu for Sphere {
    const SERIALIZED_QUARTET_COUNT: usize = 2;

    fn serialize_into(&self, container: &mut GpuReadySerializationBuffer) {
        debug_assert!(container.has_free_slot(), "buffer is full");
        container.write_quartet_f64(self.center.x, self.center.y, self.center.z, self.radius);
        container.write_quartet(|writer| {
            writer.write_unsigned(self.material.as_u32());
        });
        debug_assert!(container.object_fully_written());
    }
}
