/// Cubeshade - Rotating flat-shaded cube
///
/// Controls:
///   - Q/W: Rotate around the x-axis
///   - A/S: Rotate around the y-axis
///   - Z/X: Rotate around the z-axis
///   - Arrow keys: Move the light source
///   - ESC: Quit
use anyhow::Context;
use cubeshade_core::SceneConfig;
use cubeshade_window::{WindowBackend, WindowConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let scene = SceneConfig::default();
    let mut backend = WindowBackend::open(&scene, &WindowConfig::default())
        .context("could not create the render window")?;

    let stats = cubeshade_core::run(&mut backend, &scene)?;
    tracing::info!(frames = stats.frames, "goodbye");

    Ok(())
}
