/// Cubeshade Core Library - Flat-shaded cube rendering logic
///
/// This library provides the backend-independent part of the renderer:
/// cube geometry, rotation matrices, the spherical light model, perspective
/// projection, painter's-order face rendering and the interaction state
/// machine that drives it.

pub mod app;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod light;
pub mod projection;
pub mod raster;
pub mod renderer;
pub mod shading;
pub mod simulation;
pub mod transform;

// Re-export commonly used types
pub use app::{run, Backend, FrameStats};
pub use config::SceneConfig;
pub use error::GeometryError;
pub use geometry::{Face, Mesh, CUBE_FACES, CUBE_VERTICES};
pub use input::{DeltaState, InputEvent, Key};
pub use light::{light_direction, LightState};
pub use projection::Projection;
pub use raster::FrameBuffer;
pub use renderer::{Canvas, FaceDraw, FaceRenderer};
pub use shading::{shade, Color};
pub use simulation::{LoopState, SimulationState};
pub use transform::{RotationState, Transform};
