use crate::scene::compiled_scene::CompiledScene;
use crate::scene::compiler::{CompilationError, SceneCompiler};
use crate::scene::description::{SceneDescriptionError, ScenePart, parse_scene_description};
use crate::utils::version::Version;
use log::{info, warn};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneReloadError {
    #[error("failed to read scene description: {0}")]
    Description(#[from] SceneDescriptionError),
    #[error("failed to compile scene: {0}")]
    Compilation(#[from] CompilationError),
}

/// Holds the scene currently visible to the renderer. A reload swaps the whole compiled scene
/// at once; readers holding an earlier snapshot keep seeing consistent old arrays.
pub struct SceneStage {
    published: Arc<CompiledScene>,
    version: Version,
}

impl SceneStage {
    #[must_use]
    pub fn new() -> Self {
        Self { published: Arc::new(CompiledScene::default()), version: Version::default() }
    }

    #[must_use]
    pub fn published(&self) -> Arc<CompiledScene> {
        Arc::clone(&self.published)
    }

    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    pub fn reload(&mut self, parts: &[ScenePart]) -> Result<Version, CompilationError> {
        match SceneCompiler::compile(parts) {
            Ok(compiled) => {
                self.published = Arc::new(compiled);
                self.version += 1;
                info!("published scene version {}", self.version);
                Ok(self.version)
            }
            Err(error) => {
                warn!("scene reload rejected, keeping version {}: {}", self.version, error);
                Err(error)
            }
        }
    }

    pub fn reload_from_json(&mut self, json: &str) -> Result<Version, SceneReloadError> {
        let parts = parse_scene_description(json).inspect_err(|error| {
            warn!("scene reload rejected, keeping version {}: {}", self.version, error);
        })?;
        Ok(self.reload(&parts)?)
    }
}

impl Default for SceneStage {
    fn default() -> Self {
        Self::new()
    }
}
