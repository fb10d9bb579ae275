#[cfg(test)]
mod tests {
    use crate::geometry::rigid_transform::RigidTransform;
    use crate::geometry::vector3::Vector3;
    use crate::objects::block::TRIANGLES_PER_BLOCK;
    use crate::objects::color::Color;
    use crate::objects::material_index::MaterialIndex;
    use crate::objects::triangle::TriangleIndex;
    use crate::scene::compiler::{CompilationError, SceneCompiler};
    use crate::scene::description::{PartField, PartShape, ScenePart, parse_scene_description};
    use crate::scene::stage::SceneStage;
    use crate::utils::version::Version;
    use bytemuck::cast_slice;
    use more_asserts::assert_gt;
    use rstest::rstest;

    const UNIT_BOX_SCENE: &str = r#"[{
        "shape": "Block",
        "cframe": [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1],
        "size": [2, 2, 2],
        "color": [0.8, 0.8, 0.8],
        "emissionColor": [0, 0, 0],
        "emissionStrength": 0,
        "smoothness": 0.1
    }]"#;

    #[must_use]
    fn make_part(shape: PartShape, position: Vector3, size: &[f64]) -> ScenePart {
        ScenePart::new(shape, RigidTransform::from_position(position), size)
    }

    #[test]
    fn test_unit_box_triangulation() {
        let parts = parse_scene_description(UNIT_BOX_SCENE).unwrap();

        let system_under_test = SceneCompiler::compile(&parts).unwrap();

        assert_eq!(system_under_test.triangles().len(), 12);
        assert_eq!(system_under_test.mesh_infos().len(), 1);
        assert_eq!(system_under_test.mesh_infos()[0].triangle_count(), 12);
        assert_eq!(system_under_test.mesh_infos()[0].first_triangle(), TriangleIndex(0));

        for triangle in system_under_test.triangles() {
            for vertex in triangle.vertices() {
                assert!(vertex.position().to_array().iter().all(|component| component.abs() == 1.0));
            }
            assert_gt!(triangle.winding_normal().dot(triangle.a().normal()), 0.0);
        }

        let axes = [Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z];
        for normal in axes.into_iter().flat_map(|axis| [axis, -axis]) {
            let carriers = system_under_test.triangles().iter()
                .filter(|triangle| triangle.vertices().iter().all(|vertex| vertex.normal() == normal))
                .count();
            assert_eq!(carriers, 2, "normal {:?}", normal);
        }
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(32)]
    fn test_identical_materials_share_one_entry(#[case] parts_count: usize) {
        let parts: Vec<ScenePart> = (0..parts_count)
            .map(|i| {
                let shape = if i % 2 == 0 { PartShape::Sphere } else { PartShape::Box };
                make_part(shape, Vector3::splat(i as f64), &[1.0, 1.0, 1.0])
                    .with_color(Color::new(0.9, 0.1, 0.1))
                    .with_emission(Color::new(1.0, 0.9, 0.8), 2.0)
                    .with_smoothness(0.3)
            })
            .collect();

        let system_under_test = SceneCompiler::compile(&parts).unwrap();

        assert_eq!(system_under_test.palette().count(), 1);
        assert!(system_under_test.spheres().iter().all(|sphere| sphere.material() == MaterialIndex(0)));
        assert!(system_under_test.mesh_infos().iter().all(|mesh| mesh.material() == MaterialIndex(0)));
        assert_eq!(system_under_test.spheres().len() + system_under_test.mesh_infos().len(), parts_count);
    }

    #[test]
    fn test_distinct_smoothness_keeps_input_order() {
        let smoothness = [0.9, 0.1, 0.5, 0.0, 1.0];
        let parts: Vec<ScenePart> = smoothness.iter()
            .map(|value| make_part(PartShape::Sphere, Vector3::ZERO, &[1.0]).with_smoothness(*value))
            .collect();

        let system_under_test = SceneCompiler::compile(&parts).unwrap();

        assert_eq!(system_under_test.palette().count(), smoothness.len());
        for (index, expected) in smoothness.iter().enumerate() {
            assert_eq!(system_under_test.palette().materials()[index].smoothness(), *expected);
            assert_eq!(system_under_test.spheres()[index].material(), MaterialIndex(index));
        }
    }

    #[test]
    fn test_sphere_compilation() {
        let parts = [make_part(PartShape::Sphere, Vector3::new(1.0, 2.0, 3.0), &[4.0])];

        let system_under_test = SceneCompiler::compile(&parts).unwrap();

        assert_eq!(system_under_test.spheres().len(), 1);
        assert_eq!(system_under_test.spheres()[0].radius(), 2.0);
        assert_eq!(system_under_test.spheres()[0].center(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mixed_scene_buffers() {
        let parts = [
            make_part(PartShape::Box, Vector3::ZERO, &[1.0, 1.0, 1.0]),
            make_part(PartShape::Sphere, Vector3::UNIT_X, &[2.0]).with_emission(Color::WHITE, 5.0),
            make_part(PartShape::Box, Vector3::UNIT_Y, &[1.0, 2.0, 1.0]),
        ];

        let system_under_test = SceneCompiler::compile(&parts).unwrap();

        let mesh_infos = system_under_test.serialize_mesh_infos();
        let expected_mesh_infos: Vec<u32> = vec![0, 12, 0, (-1.0_f32).to_bits(), 12, 12, 0, (-1.0_f32).to_bits()];
        assert_eq!(mesh_infos.backend(), cast_slice::<u32, u8>(&expected_mesh_infos));

        let spheres = system_under_test.serialize_spheres();
        let expected_spheres: Vec<u32> = vec![
            1.0_f32.to_bits(), 0.0_f32.to_bits(), 0.0_f32.to_bits(), 1.0_f32.to_bits(),
            1, (-1.0_f32).to_bits(), (-1.0_f32).to_bits(), (-1.0_f32).to_bits(),
        ];
        assert_eq!(spheres.backend(), cast_slice::<u32, u8>(&expected_spheres));

        assert_eq!(system_under_test.serialize_triangles().total_slots_count(), 2 * TRIANGLES_PER_BLOCK);
        assert_eq!(system_under_test.serialize_materials().total_slots_count(), 2);
    }

    #[test]
    fn test_failure_is_atomic() {
        let mut broken = make_part(PartShape::Box, Vector3::ZERO, &[1.0, 1.0, 1.0]);
        broken.emission_color = None;
        let parts = [make_part(PartShape::Sphere, Vector3::ZERO, &[1.0]), broken];
        let mut stage = SceneStage::new();

        let error = stage.reload(&parts).unwrap_err();

        assert_eq!(error, CompilationError::MissingField { record: 1, field: PartField::EmissionColor, expected: 3, actual: 0 });
        assert_eq!(stage.version(), Version(0));
        assert_eq!(stage.published().statistics().sphere_count, 0);
    }

    #[test]
    fn test_stage_publishes_new_scene() {
        let mut system_under_test = SceneStage::new();

        let version = system_under_test.reload_from_json(UNIT_BOX_SCENE).unwrap();

        assert_eq!(version, Version(1));
        assert_eq!(system_under_test.published().statistics().to_string(), "spheres: 0, triangles: 12, meshes: 1, materials: 1");
    }
}
