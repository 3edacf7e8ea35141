//! Command-line model inspector: imports and indexes a model, then logs
//! upload sizes and the starting camera pose.
//!
//! ```text
//! RUST_LOG=info meshcam model.obj [options.toml]
//! ```

use std::path::Path;

use meshcam::camera::CameraController;
use meshcam::input::FrameInput;
use meshcam::mesh::load_obj;
use meshcam::options::Options;
use meshcam::MeshcamError;

/// Aspect ratio of the demos' 1024x768 window.
const ASPECT: f32 = 1024.0 / 768.0;

fn run(model: &Path, options_path: Option<&Path>) -> Result<(), MeshcamError> {
    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let mesh = load_obj(model, &options.import)?;
    if let Some((lo, hi)) = mesh.bounds() {
        log::info!("bounds: min {lo} max {hi}");
    }
    let index_width = if mesh.indices_u16().is_some() { 16 } else { 32 };
    log::info!(
        "upload: {} vertex bytes, {} indices ({index_width}-bit)",
        bytemuck::cast_slice::<_, u8>(&mesh.gpu_vertices()).len(),
        mesh.indices.len()
    );

    let mut camera = CameraController::from_options(&options.camera);
    let matrices = camera.update(0.0, &mut FrameInput::default(), ASPECT);
    let state = camera.state();
    log::info!(
        "camera at {} looking {} (fov {:.1} deg)",
        state.position,
        state.forward(),
        state.fovy
    );
    log::debug!("projection {}", matrices.projection);
    log::debug!("view {}", matrices.view);
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(model) = args.next() else {
        log::error!("Usage: meshcam <model.obj> [options.toml]");
        std::process::exit(1);
    };
    let options = args.next();

    if let Err(e) = run(Path::new(&model), options.as_deref().map(Path::new)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
