pub mod compiled_scene;
pub mod compiler;
pub mod description;
pub mod frame_uniforms;
pub mod material_palette;
pub mod render_settings;
pub mod stage;
