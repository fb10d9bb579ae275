use crate::geometry::rigid_transform::{PLACEMENT_COMPONENTS_COUNT, RigidTransform};
use crate::geometry::vector3::Vector3;
use crate::objects::block::{Block, TRIANGLES_PER_BLOCK};
use crate::objects::color::Color;
use crate::objects::material::Material;
use crate::objects::material_index::MaterialIndex;
use crate::objects::mesh_info::MeshInfo;
use crate::objects::sphere::Sphere;
use crate::objects::triangle::{Triangle, TriangleIndex};
use crate::scene::compiled_scene::CompiledScene;
use crate::scene::description::{PartField, PartShape, ScenePart};
use crate::scene::material_palette::MaterialPalette;
use log::{debug, info};
use std::str::FromStr;
use thiserror::Error;

const SPHERE_SIZE_COMPONENTS: usize = 1;
const BOX_SIZE_COMPONENTS: usize = 3;
const COLOR_COMPONENTS: usize = 3;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilationError {
    #[error("record {record}: unknown shape {tag:?}")]
    UnknownShape {
        record: usize,
        tag: String,
    },
    #[error("record {record}: field '{field}' needs {expected} value(s), found {actual}")]
    MissingField {
        record: usize,
        field: PartField,
        expected: usize,
        actual: usize,
    },
    #[error("record {record}: size component {value} is not a finite non-negative number")]
    InvalidSize {
        record: usize,
        value: f64,
    },
}

/// Accumulates primitives for one compilation pass. A fresh compiler is used per pass, nothing
/// survives between passes.
#[derive(Default)]
pub struct SceneCompiler {
    spheres: Vec<Sphere>,
    triangles: Vec<Triangle>,
    mesh_infos: Vec<MeshInfo>,
    palette: MaterialPalette,
}

impl SceneCompiler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles the whole description or nothing: the first malformed record aborts the pass.
    pub fn compile(parts: &[ScenePart]) -> Result<CompiledScene, CompilationError> {
        let mut compiler = SceneCompiler::new();
        for (record, part) in parts.iter().enumerate() {
            compiler.add_part(record, part)?;
        }
        let result = compiler.finish();
        info!("compiled {} scene parts into {}", parts.len(), result.statistics());
        Ok(result)
    }

    pub fn add_part(&mut self, record: usize, part: &ScenePart) -> Result<(), CompilationError> {
        let shape = parse_shape(record, part.shape.as_deref())?;
        let placement = require_components::<PLACEMENT_COMPONENTS_COUNT>(record, PartField::Cframe, part.cframe.as_deref())?;
        let transform = RigidTransform::from_placement(&placement);

        let size = match shape {
            PartShape::Sphere => {
                let [diameter] = require_components::<SPHERE_SIZE_COMPONENTS>(record, PartField::Size, part.size.as_deref())?;
                Vector3::splat(diameter)
            }
            PartShape::Box => Vector3::from(require_components::<BOX_SIZE_COMPONENTS>(record, PartField::Size, part.size.as_deref())?),
        };
        if let Some(&value) = size.to_array().iter().find(|value| !value.is_finite() || **value < 0.0) {
            return Err(CompilationError::InvalidSize { record, value });
        }

        let material = read_material(record, part)?;

        match shape {
            PartShape::Sphere => {
                self.add_sphere(transform.position(), size.x / 2.0, material);
            }
            PartShape::Box => {
                self.add_block(transform, size, material);
            }
        }
        Ok(())
    }

    /// # Panics
    /// If `radius` is negative or NaN. `add_part` rejects such sizes with
    /// [`CompilationError::InvalidSize`] before getting here.
    pub fn add_sphere(&mut self, center: Vector3, radius: f64, material: Material) -> MaterialIndex {
        let material = self.palette.register(material);
        self.spheres.push(Sphere::new(center, radius, material));
        debug!("sphere {} at {:?}, radius {}, material {}", self.spheres.len() - 1, center, radius, material);
        material
    }

    pub fn add_block(&mut self, transform: RigidTransform, size: Vector3, material: Material) -> MaterialIndex {
        let material = self.palette.register(material);
        let first_triangle = TriangleIndex(self.triangles.len());
        let block = Block::new(transform, size, material);
        self.triangles.extend_from_slice(&block.triangulate());
        self.mesh_infos.push(MeshInfo::new(first_triangle, TRIANGLES_PER_BLOCK, material));
        debug!("block at {:?} triangulated into triangles {}..{}, material {}", transform.position(), first_triangle, first_triangle + TRIANGLES_PER_BLOCK, material);
        material
    }

    #[must_use]
    pub fn finish(self) -> CompiledScene {
        CompiledScene::new(self.spheres, self.triangles, self.mesh_infos, self.palette)
    }
}

fn parse_shape(record: usize, tag: Option<&str>) -> Result<PartShape, CompilationError> {
    let tag = tag.ok_or(CompilationError::MissingField { record, field: PartField::Shape, expected: 1, actual: 0 })?;
    PartShape::from_str(tag).map_err(|_| CompilationError::UnknownShape { record, tag: tag.to_string() })
}

/// Takes the first `N` values; any extra trailing values are ignored.
fn require_components<const N: usize>(record: usize, field: PartField, values: Option<&[f64]>) -> Result<[f64; N], CompilationError> {
    let values = values.unwrap_or_default();
    if values.len() < N {
        return Err(CompilationError::MissingField { record, field, expected: N, actual: values.len() });
    }
    let mut result = [0.0; N];
    result.copy_from_slice(&values[..N]);
    Ok(result)
}

fn require_scalar(record: usize, field: PartField, value: Option<f64>) -> Result<f64, CompilationError> {
    value.ok_or(CompilationError::MissingField { record, field, expected: 1, actual: 0 })
}

fn read_material(record: usize, part: &ScenePart) -> Result<Material, CompilationError> {
    let color = require_components::<COLOR_COMPONENTS>(record, PartField::Color, part.color.as_deref())?;
    let emission_color = require_components::<COLOR_COMPONENTS>(record, PartField::EmissionColor, part.emission_color.as_deref())?;
    let emission_strength = require_scalar(record, PartField::EmissionStrength, part.emission_strength)?;
    let smoothness = require_scalar(record, PartField::Smoothness, part.smoothness)?;

    Ok(Material::new()
        .with_color(Color::from(color))
        .with_emission_color(Color::from(emission_color))
        .with_emission_strength(emission_strength)
        .with_smoothness(smoothness))
}
