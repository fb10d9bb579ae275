use crate::geometry::vector3::Vector3;
use crate::objects::color::Color;
use crate::serialization::gpu_ready_serialization_buffer::{DEFAULT_PAD_VALUE, GpuReadySerializationBuffer};
use serde::{Deserialize, Serialize};

/// Scene-wide render configuration, uploaded once per scene setup. Every key may be omitted
/// from the JSON form.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderSettings {
    pub resolution: [u32; 2],
    #[serde(alias = "crapRender")]
    pub preview_quality: bool,
    pub environment_enabled: bool,
    pub sun_focus: f64,
    pub ground_color: Color,
    pub sun_color: Color,
    pub sky_color_horizon: Color,
    pub sky_color_zenith: Color,
    pub sun_light_direction: Vector3,
    pub max_bounce_count: u32,
    #[serde(alias = "numOfRaysPerPixel")]
    pub rays_per_pixel: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            resolution: [1280, 720],
            preview_quality: false,
            environment_enabled: true,
            sun_focus: 500.0,
            ground_color: Color::new(0.35, 0.3, 0.35),
            sun_color: Color::WHITE,
            sky_color_horizon: Color::WHITE,
            sky_color_zenith: Color::new(0.08, 0.37, 0.73),
            sun_light_direction: Vector3::new(0.3, 1.0, 0.5),
            max_bounce_count: 4,
            rays_per_pixel: 8,
        }
    }
}

impl RenderSettings {
    const SERIALIZED_QUARTET_COUNT: usize = 6;

    #[must_use]
    pub fn width(&self) -> u32 {
        self.resolution[0]
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.resolution[1]
    }

    #[must_use]
    pub fn serialize(&self) -> GpuReadySerializationBuffer {
        let mut result = GpuReadySerializationBuffer::new(1, Self::SERIALIZED_QUARTET_COUNT);

        result.write_quartet(|writer| {
            writer
                .write_unsigned(self.width())
                .write_unsigned(self.height())
                .write_unsigned(self.preview_quality as u32)
                .write_unsigned(self.environment_enabled as u32);
        });

        let [red, green, blue] = self.ground_color.to_array();
        result.write_quartet_f64(red, green, blue, self.sun_focus);

        result.write_quartet(|writer| {
            let [red, green, blue] = self.sun_color.to_array();
            writer.write_vector(red, green, blue).write_unsigned(self.max_bounce_count);
        });

        result.write_quartet(|writer| {
            let [red, green, blue] = self.sky_color_horizon.to_array();
            writer.write_vector(red, green, blue).write_unsigned(self.rays_per_pixel);
        });

        let [red, green, blue] = self.sky_color_zenith.to_array();
        result.write_padded_quartet_f64(red, green, blue);

        let direction = self.sun_light_direction;
        result.write_quartet(|writer| {
            writer.write_vector(direction.x, direction.y, direction.z).write_float_32(DEFAULT_PAD_VALUE);
        });

        debug_assert!(result.object_fully_written());
        result
    }
}
