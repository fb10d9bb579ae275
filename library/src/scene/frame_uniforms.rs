use crate::geometry::rigid_transform::RigidTransform;
use crate::geometry::vector3::Vector3;
use crate::serialization::gpu_ready_serialization_buffer::{ELEMENTS_IN_QUARTET, GpuReadySerializationBuffer};

/// Per-frame payload: camera placement, view parameters and the accumulation frame counter.
/// Updating it never touches the scene buffers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameUniforms {
    camera: RigidTransform,
    view_parameters: Vector3,
    frame_number: u32,
}

impl FrameUniforms {
    const SERIALIZED_QUARTET_COUNT: usize = 5;

    #[must_use]
    pub fn new(camera: RigidTransform, view_parameters: Vector3) -> Self {
        Self { camera, view_parameters, frame_number: 0 }
    }

    #[must_use]
    pub fn camera(&self) -> RigidTransform {
        self.camera
    }

    #[must_use]
    pub fn view_parameters(&self) -> Vector3 {
        self.view_parameters
    }

    #[must_use]
    pub fn frame_number(&self) -> u32 {
        self.frame_number
    }

    pub fn set_camera(&mut self, camera: RigidTransform) {
        self.camera = camera;
    }

    pub fn set_view_parameters(&mut self, view_parameters: Vector3) {
        self.view_parameters = view_parameters;
    }

    pub fn next_frame(&mut self) {
        self.frame_number = self.frame_number.wrapping_add(1);
    }

    pub fn reset_frame_accumulation(&mut self) {
        self.frame_number = 0;
    }

    #[must_use]
    pub fn serialize(&self) -> GpuReadySerializationBuffer {
        let mut result = GpuReadySerializationBuffer::new(1, Self::SERIALIZED_QUARTET_COUNT);

        for column in self.camera.matrix().chunks_exact(ELEMENTS_IN_QUARTET) {
            result.write_quartet_f64(column[0], column[1], column[2], column[3]);
        }

        result.write_quartet(|writer| {
            writer
                .write_vector(self.view_parameters.x, self.view_parameters.y, self.view_parameters.z)
                .write_unsigned(self.frame_number);
        });

        debug_assert!(result.object_fully_written());
        result
    }
}
