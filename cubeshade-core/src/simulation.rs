//! Interaction state machine
//!
//! `SimulationState` owns every piece of mutable state the application has:
//! the rotation and light angles, their velocities and whether the loop is
//! still running. It never touches a window; events come in as
//! [`InputEvent`]s and frames go out through a [`Canvas`].

use crate::config::SceneConfig;
use crate::geometry::Mesh;
use crate::input::{DeltaState, InputEvent, Key};
use crate::light::LightState;
use crate::renderer::{Canvas, FaceDraw, FaceRenderer};
use crate::transform::{RotationState, Transform};
use nalgebra::Point3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

#[derive(Debug, Clone)]
pub struct SimulationState {
    pub rotation: RotationState,
    pub light: LightState,
    pub deltas: DeltaState,
    pub state: LoopState,
    step: f64,
}

impl SimulationState {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            rotation: config.initial_rotation,
            light: config.initial_light,
            deltas: DeltaState::default(),
            state: LoopState::Running,
            step: config.angle_step,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Consume one frame's worth of events, then advance every angle by its
    /// velocity.
    ///
    /// Escape (on release) and window close terminate the loop; events after
    /// the terminating one are dropped and the angles are left untouched.
    pub fn update<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        if !self.is_running() {
            return;
        }

        for event in events {
            match event {
                InputEvent::KeyUp(Key::Escape) | InputEvent::Close => {
                    tracing::info!(?event, "terminating");
                    self.state = LoopState::Terminated;
                    return;
                }
                _ => {
                    tracing::debug!(?event, "input");
                    self.deltas.apply(event, self.step);
                }
            }
        }

        self.rotation
            .rotate(self.deltas.alpha, self.deltas.beta, self.deltas.gamma);
        self.light.rotate(self.deltas.phi, self.deltas.theta);
    }

    /// The mesh's vertices under the current rotation.
    pub fn rotated_points(&self, mesh: &Mesh) -> Vec<Point3<f64>> {
        Transform::apply(&self.rotation.matrix(), mesh.vertices())
    }

    /// Clear `canvas` and draw the mesh for the current angles.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        mesh: &Mesh,
        config: &SceneConfig,
        canvas: &mut C,
    ) -> Vec<FaceDraw> {
        canvas.clear(config.clear_color);

        let points = self.rotated_points(mesh);
        let renderer = FaceRenderer::new(config.projection(), config.base_color);
        renderer.render(&points, mesh.faces(), &self.light.direction(), canvas)
    }
}
