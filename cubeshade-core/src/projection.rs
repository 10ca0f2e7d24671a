/// Fixed-focal-length perspective projection
use nalgebra::{Point2, Point3};

/// Smallest translated depth a vertex may have before projection is refused
const MIN_DEPTH: f64 = 1e-6;

/// Maps rotated object-space points to screen pixels.
///
/// The object is pushed `z_offset` units away from the viewer, then
/// `screen = (p * scale) * focal / z + center` on each of x and y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub scale: f64,
    pub focal: f64,
    pub z_offset: f64,
    pub center: Point2<f64>,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            scale: 100.0,
            focal: 10.0,
            z_offset: 7.0,
            center: Point2::new(width as f64 / 2.0, height as f64 / 2.0),
        }
    }

    /// Project a single point to screen space.
    ///
    /// Returns `None` when the translated depth is not in front of the
    /// viewer, which would otherwise divide by zero or mirror the point.
    pub fn project(&self, point: &Point3<f64>) -> Option<Point2<f64>> {
        let z = point.z + self.z_offset;
        if z < MIN_DEPTH {
            return None;
        }

        Some(Point2::new(
            (point.x * self.scale) * self.focal / z + self.center.x,
            (point.y * self.scale) * self.focal / z + self.center.y,
        ))
    }

    /// Project all four corners of a quad, or none of them.
    pub fn project_quad(&self, corners: &[Point3<f64>; 4]) -> Option<[Point2<f64>; 4]> {
        let a = self.project(&corners[0])?;
        let b = self.project(&corners[1])?;
        let c = self.project(&corners[2])?;
        let d = self.project(&corners[3])?;
        Some([a, b, c, d])
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(800, 800)
    }
}
