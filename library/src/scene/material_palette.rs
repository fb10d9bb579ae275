use crate::objects::material::Material;
use crate::objects::material_index::MaterialIndex;
use crate::serialization::gpu_ready_serialization_buffer::GpuReadySerializationBuffer;
use crate::serialization::serializable_for_gpu::serialize_batch;
use log::debug;

/// Ordered set of unique materials. Indices handed out stay valid for the palette's lifetime.
#[derive(Clone, Debug, Default)]
pub struct MaterialPalette {
    materials: Vec<Material>,
}

impl MaterialPalette {
    #[must_use]
    pub fn new() -> Self {
        Self { materials: Vec::new() }
    }

    /// Returns the index of an exactly equal entry, appending `target` if there is none.
    #[must_use]
    pub fn register(&mut self, target: Material) -> MaterialIndex {
        if let Some(existing) = self.find(&target) {
            debug!("material {:?} reuses palette entry {}", target.components(), existing);
            return existing;
        }
        self.materials.push(target);
        MaterialIndex(self.materials.len() - 1)
    }

    #[must_use]
    pub fn find(&self, target: &Material) -> Option<MaterialIndex> {
        self.materials.iter().position(|candidate| candidate == target).map(MaterialIndex)
    }

    #[must_use]
    pub fn get(&self, index: MaterialIndex) -> Option<&Material> {
        self.materials.get(index.0)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.materials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    #[must_use]
    pub(crate) fn serialize(&self) -> GpuReadySerializationBuffer {
        serialize_batch(&self.materials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::color::Color;

    #[test]
    fn test_register_distinct() {
        let mut system_under_test = MaterialPalette::new();

        let dummy_material = system_under_test.register(Material::default());
        let another_material = system_under_test.register(Material::default().with_color(Color::new(1.0, 0.0, 0.0)));

        assert_eq!(system_under_test.count(), 2);
        assert_eq!(dummy_material, MaterialIndex(0));
        assert_eq!(another_material, MaterialIndex(1));
    }

    #[test]
    fn test_register_reuses_equal_entry() {
        let mut system_under_test = MaterialPalette::new();
        let red = Material::default().with_color(Color::new(1.0, 0.0, 0.0));

        let _ = system_under_test.register(Material::default());
        let first = system_under_test.register(red);
        let second = system_under_test.register(red);

        assert_eq!(first, second);
        assert_eq!(system_under_test.count(), 2);
        assert_eq!(system_under_test.get(first), Some(&red));
    }

    #[test]
    fn test_nan_material_is_never_reused() {
        let mut system_under_test = MaterialPalette::new();
        let broken = Material::default().with_emission_strength(f64::NAN);

        let first = system_under_test.register(broken);
        let second = system_under_test.register(broken);

        assert_ne!(first, second);
        assert_eq!(system_under_test.count(), 2);
    }

    #[test]
    fn test_empty_palette_serializes_to_padding() {
        let system_under_test = MaterialPalette::new();

        assert!(system_under_test.is_empty());
        assert_eq!(system_under_test.serialize().total_slots_count(), 1);
    }
}
