//! Scene configuration
//!
//! Every tunable constant of the renderer and the interaction loop lives
//! here. `SceneConfig::default()` is the configuration the application runs
//! with; tests build variants of it.

use crate::light::LightState;
use crate::projection::Projection;
use crate::shading::Color;
use crate::transform::RotationState;
use nalgebra::Point2;

/// Caption shown while the cube is on screen
pub const CAPTION: &str =
    "Control -   q,w : X Rotation    a,s : Y Rotation    z,x : Z Rotation       arrows: Light source rotation";

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Object-space to pixel scale before the perspective divide
    pub scale: f64,
    /// Focal length factor
    pub focal: f64,
    /// Distance the cube is pushed away from the viewer
    pub z_offset: f64,
    /// Surface colour of a face lit head-on
    pub base_color: Color,
    /// Background colour the canvas is cleared to every frame
    pub clear_color: Color,
    /// Magnitude of every angle delta while a key is held
    pub angle_step: f64,
    pub initial_rotation: RotationState,
    pub initial_light: LightState,
    pub caption: String,
}

impl SceneConfig {
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    pub fn projection(&self) -> Projection {
        Projection {
            scale: self.scale,
            focal: self.focal,
            z_offset: self.z_offset,
            center: self.center(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            scale: 100.0,
            focal: 10.0,
            z_offset: 7.0,
            base_color: Color::rgb(211.0, 211.0, 211.0),
            clear_color: Color::rgb(5.0, 5.0, 5.0),
            angle_step: 0.001,
            initial_rotation: RotationState::new(0.0, -1.0, 1.0),
            initial_light: LightState::new(-2.0, 3.0),
            caption: CAPTION.to_string(),
        }
    }
}
