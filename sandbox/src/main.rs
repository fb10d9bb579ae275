use anyhow::{Context, Result, bail};
use cgmath::{Deg, Rad};
use log::info;
use raytrace_scene::geometry::axis::Axis;
use raytrace_scene::geometry::rigid_transform::RigidTransform;
use raytrace_scene::geometry::vector3::Vector3;
use raytrace_scene::scene::frame_uniforms::FrameUniforms;
use raytrace_scene::scene::render_settings::RenderSettings;
use raytrace_scene::{SceneStage, get_reasonable_log_filter};
use std::env;
use std::fs;

const PREVIEW_FRAMES: u32 = 4;
const ORBIT_STEP: Deg<f64> = Deg(15.0);
const CAMERA_DISTANCE: f64 = 10.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(get_reasonable_log_filter())).init();

    let arguments: Vec<String> = env::args().collect();
    if arguments.len() < 2 {
        bail!("usage: {} <scene.json> [settings.json]", arguments[0]);
    }

    let scene_path = &arguments[1];
    let scene_json = fs::read_to_string(scene_path)
        .with_context(|| format!("failed to read scene description {}", scene_path))?;

    let settings = match arguments.get(2) {
        Some(settings_path) => {
            let settings_json = fs::read_to_string(settings_path)
                .with_context(|| format!("failed to read render settings {}", settings_path))?;
            serde_json::from_str::<RenderSettings>(&settings_json)
                .with_context(|| format!("malformed render settings {}", settings_path))?
        }
        None => RenderSettings::default(),
    };
    info!("render settings: {}x{}, {} rays per pixel, {} bounces", settings.width(), settings.height(), settings.rays_per_pixel, settings.max_bounce_count);

    let mut stage = SceneStage::new();
    let version = stage.reload_from_json(&scene_json)
        .with_context(|| format!("scene {} was not published", scene_path))?;

    let scene = stage.published();
    info!("scene version {}: {}", version, scene.statistics());
    info!(
        "buffer sizes (bytes): spheres {}, triangles {}, meshes {}, materials {}, settings {}",
        scene.serialize_spheres().backend().len(),
        scene.serialize_triangles().backend().len(),
        scene.serialize_mesh_infos().backend().len(),
        scene.serialize_materials().backend().len(),
        settings.serialize().backend().len(),
    );

    let aspect = settings.width() as f64 / settings.height().max(1) as f64;
    let mut uniforms = FrameUniforms::new(orbit_camera(Deg(0.0)), Vector3::new(aspect, 1.0, 1.0));
    for frame in 0..PREVIEW_FRAMES {
        let angle = ORBIT_STEP * frame as f64;
        uniforms.set_camera(orbit_camera(angle));
        uniforms.next_frame();
        info!("frame {}: camera at {:?}, uniforms {} bytes", uniforms.frame_number(), uniforms.camera().position(), uniforms.serialize().backend().len());
    }

    Ok(())
}

#[must_use]
fn orbit_camera(angle: Deg<f64>) -> RigidTransform {
    let Rad(radians) = Rad::from(angle);
    let rotation = RigidTransform::from_axis_angle(Axis::Y, radians);
    let eye = rotation.vector_to_world(Vector3::new(0.0, 0.0, CAMERA_DISTANCE));
    rotation.with_position(eye)
}
