/// Frame loop, generic over the windowing backend
use crate::config::SceneConfig;
use crate::geometry::Mesh;
use crate::input::InputEvent;
use crate::renderer::Canvas;
use crate::simulation::SimulationState;

/// A window: a source of input events plus a canvas that can be shown
pub trait Backend {
    type Surface: Canvas + ?Sized;
    type Error: std::error::Error;

    /// Every event received since the previous call.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    fn canvas(&mut self) -> &mut Self::Surface;

    /// Show the canvas contents on screen.
    fn present(&mut self) -> Result<(), Self::Error>;

    fn set_title(&mut self, title: &str);
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub frames: u64,
}

/// Run frames until an exit event arrives.
///
/// Each frame drains the backend's events, advances the simulation and,
/// while it is still running, redraws and presents the cube. A backend
/// error ends the loop immediately.
pub fn run<B: Backend>(backend: &mut B, config: &SceneConfig) -> Result<FrameStats, B::Error> {
    let mesh = Mesh::cube();
    let mut simulation = SimulationState::new(config);
    let mut stats = FrameStats::default();

    tracing::info!(
        width = config.width,
        height = config.height,
        "starting render loop"
    );

    while simulation.is_running() {
        let events = backend.poll_events();
        simulation.update(events);
        if !simulation.is_running() {
            break;
        }

        simulation.render(&mesh, config, backend.canvas());
        backend.present()?;
        backend.set_title(&config.caption);
        stats.frames += 1;
    }

    tracing::info!(frames = stats.frames, "render loop finished");
    Ok(stats)
}
