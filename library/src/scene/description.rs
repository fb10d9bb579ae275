use crate::geometry::rigid_transform::RigidTransform;
use crate::objects::color::Color;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString)]
pub enum PartShape {
    #[strum(to_string = "sphere", serialize = "Ball")]
    Sphere,
    #[strum(to_string = "box", serialize = "Block")]
    Box,
}

/// Names of the part record fields, displayed as they are spelled in JSON.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "camelCase")]
pub enum PartField {
    Shape,
    Cframe,
    Size,
    Color,
    EmissionColor,
    EmissionStrength,
    Smoothness,
}

#[derive(Error, Debug)]
pub enum SceneDescriptionError {
    #[error("scene description is not a list of part records: {what:?}")]
    Format {
        what: String,
    },
}

/// One record of the scene description as produced by the exporter. Every field is optional at
/// this stage; the compiler decides what is missing for the given shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(alias = "placement", skip_serializing_if = "Option::is_none")]
    pub cframe: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emission_color: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emission_strength: Option<f64>,
    #[serde(alias = "reflectance", skip_serializing_if = "Option::is_none")]
    pub smoothness: Option<f64>,
}

impl ScenePart {
    /// A complete record: black, non-emissive and fully rough until told otherwise.
    #[must_use]
    pub fn new(shape: PartShape, placement: RigidTransform, size: &[f64]) -> Self {
        ScenePart {
            shape: Some(shape.to_string()),
            cframe: Some(placement.placement().to_vec()),
            size: Some(size.to_vec()),
            color: Some(Color::BLACK.to_array().to_vec()),
            emission_color: Some(Color::BLACK.to_array().to_vec()),
            emission_strength: Some(0.0),
            smoothness: Some(0.0),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color.to_array().to_vec());
        self
    }

    #[must_use]
    pub fn with_emission(mut self, color: Color, strength: f64) -> Self {
        self.emission_color = Some(color.to_array().to_vec());
        self.emission_strength = Some(strength);
        self
    }

    #[must_use]
    pub fn with_smoothness(mut self, smoothness: f64) -> Self {
        self.smoothness = Some(smoothness);
        self
    }
}

pub fn parse_scene_description(json: &str) -> Result<Vec<ScenePart>, SceneDescriptionError> {
    serde_json::from_str(json).map_err(|error| SceneDescriptionError::Format { what: error.to_string() })
}
