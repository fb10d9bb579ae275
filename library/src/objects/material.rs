use crate::objects::color::Color;
use crate::serialization::gpu_ready_serialization_buffer::GpuReadySerializationBuffer;
use crate::serialization::serializable_for_gpu::SerializableForGpu;

pub const MATERIAL_COMPONENTS_COUNT: usize = 8;

/// Surface appearance shared by primitives through the palette. Equality is exact on all
/// eight scalars: materials differing by any amount (or holding a NaN) never compare equal.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Material {
    color: Color,
    smoothness: f64,
    emission_color: Color,
    emission_strength: f64,
}

impl Material {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_smoothness(mut self, smoothness: f64) -> Self {
        self.smoothness = smoothness;
        self
    }

    #[must_use]
    pub fn with_emission_color(mut self, emission_color: Color) -> Self {
        self.emission_color = emission_color;
        self
    }

    #[must_use]
    pub fn with_emission_strength(mut self, emission_strength: f64) -> Self {
        self.emission_strength = emission_strength;
        self
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn smoothness(&self) -> f64 {
        self.smoothness
    }

    #[must_use]
    pub const fn emission_color(&self) -> Color {
        self.emission_color
    }

    #[must_use]
    pub const fn emission_strength(&self) -> f64 {
        self.emission_strength
    }

    #[must_use]
    pub fn components(&self) -> [f64; MATERIAL_COMPONENTS_COUNT] {
        let [red, green, blue] = self.color.to_array();
        let [emission_red, emission_green, emission_blue] = self.emission_color.to_array();
        [red, green, blue, emission_red, emission_green, emission_blue, self.emission_strength, self.smoothness]
    }
}

impl SerializableForGpu for Material {
    const SERIALIZED_QUARTET_COUNT: usize = 2;

    fn serialize_into(&self, container: &mut GpuReadySerializationBuffer) {
        debug_assert!(container.has_free_slot(), "buffer is full");
        container.write_quartet_f64(self.color.red(), self.color.green(), self.color.blue(), self.smoothness);
        container.write_quartet_f64(
            self.emission_color.red(),
            self.emission_color.green(),
            self.emission_color.blue(),
            self.emission_strength,
        );
        debug_assert!(container.object_fully_written());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::serializable_for_gpu::serialize_batch;
    use bytemuck::cast_slice;

    #[must_use]
    fn make_lamp() -> Material {
        Material::new()
            .with_color(Color::new(0.5, 0.25, 0.125))
            .with_smoothness(0.75)
            .with_emission_color(Color::new(1.0, 0.5, 0.0))
            .with_emission_strength(4.0)
    }

    #[test]
    fn test_default() {
        let system_under_test = Material::default();

        assert_eq!(system_under_test.color(), Color::BLACK);
        assert_eq!(system_under_test.emission_color(), Color::BLACK);
        assert_eq!(system_under_test.smoothness(), 0.0);
        assert_eq!(system_under_test.emission_strength(), 0.0);
    }

    #[test]
    fn test_builder() {
        let system_under_test = make_lamp();

        assert_eq!(system_under_test.color(), Color::new(0.5, 0.25, 0.125));
        assert_eq!(system_under_test.smoothness(), 0.75);
        assert_eq!(system_under_test.emission_color(), Color::new(1.0, 0.5, 0.0));
        assert_eq!(system_under_test.emission_strength(), 4.0);
    }

    #[test]
    fn test_components() {
        assert_eq!(make_lamp().components(), [0.5, 0.25, 0.125, 1.0, 0.5, 0.0, 4.0, 0.75]);
    }

    #[test]
    fn test_equality_is_exact() {
        let system_under_test = make_lamp();

        assert_eq!(system_under_test, make_lamp());
        assert_ne!(system_under_test, make_lamp().with_smoothness(0.75 + f64::EPSILON));
        assert_ne!(system_under_test, make_lamp().with_emission_color(Color::new(1.0, 0.5, 1e-300)));
    }

    #[test]
    fn test_nan_never_equal() {
        let system_under_test = Material::new().with_smoothness(f64::NAN);
        assert_ne!(system_under_test, system_under_test);
    }

    #[test]
    fn test_serialize_into() {
        let actual = serialize_batch(&[make_lamp()]);

        let expected: Vec<f32> = vec![
            0.5, 0.25, 0.125, 0.75,
            1.0, 0.5, 0.0, 4.0,
        ];
        assert_eq!(actual.backend(), cast_slice::<f32, u8>(&expected));
    }
}
