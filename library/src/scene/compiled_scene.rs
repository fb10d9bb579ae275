use crate::objects::mesh_info::MeshInfo;
use crate::objects::sphere::Sphere;
use crate::objects::triangle::Triangle;
use crate::scene::material_palette::MaterialPalette;
use crate::serialization::gpu_ready_serialization_buffer::GpuReadySerializationBuffer;
use crate::serialization::serializable_for_gpu::serialize_batch;
use derive_more::Display;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display)]
#[display("spheres: {sphere_count}, triangles: {triangle_count}, meshes: {mesh_count}, materials: {material_count}")]
pub struct SceneStatistics {
    pub sphere_count: usize,
    pub triangle_count: usize,
    pub mesh_count: usize,
    pub material_count: usize,
}

/// The four flat arrays handed to the rendering backend. Indices inside them (material indices,
/// mesh triangle ranges) refer only to each other and stay valid for the value's lifetime.
#[derive(Clone, Debug, Default)]
pub struct CompiledScene {
    spheres: Vec<Sphere>,
    triangles: Vec<Triangle>,
    mesh_infos: Vec<MeshInfo>,
    palette: MaterialPalette,
}

impl CompiledScene {
    #[must_use]
    pub(crate) fn new(spheres: Vec<Sphere>, triangles: Vec<Triangle>, mesh_infos: Vec<MeshInfo>, palette: MaterialPalette) -> Self {
        CompiledScene { spheres, triangles, mesh_infos, palette }
    }

    #[must_use]
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[must_use]
    pub fn mesh_infos(&self) -> &[MeshInfo] {
        &self.mesh_infos
    }

    #[must_use]
    pub fn palette(&self) -> &MaterialPalette {
        &self.palette
    }

    #[must_use]
    pub fn mesh_triangles(&self, mesh: &MeshInfo) -> &[Triangle] {
        &self.triangles[mesh.first_triangle().0..mesh.end().0]
    }

    #[must_use]
    pub fn statistics(&self) -> SceneStatistics {
        SceneStatistics {
            sphere_count: self.spheres.len(),
            triangle_count: self.triangles.len(),
            mesh_count: self.mesh_infos.len(),
            material_count: self.palette.count(),
        }
    }

    #[must_use]
    pub fn serialize_spheres(&self) -> GpuReadySerializationBuffer {
        serialize_batch(&self.spheres)
    }

    #[must_use]
    pub fn serialize_triangles(&self) -> GpuReadySerializationBuffer {
        serialize_batch(&self.triangles)
    }

    #[must_use]
    pub fn serialize_mesh_infos(&self) -> GpuReadySerializationBuffer {
        serialize_batch(&self.mesh_infos)
    }

    #[must_use]
    pub fn serialize_materials(&self) -> GpuReadySerializationBuffer {
        self.palette.serialize()
    }
}
