//#![deny(warnings)]

#![allow(clippy::bool_assert_comparison)]
#![allow(clippy::bool_comparison)]
#![allow(clippy::needless_range_loop)]

pub mod geometry;
pub mod objects;
pub mod scene;
pub mod serialization;
pub mod utils;
mod tests;

pub use crate::scene::compiled_scene::{CompiledScene, SceneStatistics};
pub use crate::scene::compiler::{CompilationError, SceneCompiler};
pub use crate::scene::description::{ScenePart, SceneDescriptionError, parse_scene_description};
pub use crate::scene::stage::{SceneReloadError, SceneStage};

#[must_use]
pub fn get_reasonable_log_filter() -> &'static str {
    "info"
}
