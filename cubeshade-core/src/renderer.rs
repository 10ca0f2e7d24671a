/// Painter's-algorithm face renderer
use crate::geometry::Face;
use crate::projection::Projection;
use crate::shading::{shade, Color};
use nalgebra::{Point2, Point3, Vector3};
use std::cmp::Ordering;

/// Drawing surface the renderer paints onto
pub trait Canvas {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Fill the quadrilateral with corners `points` (screen space) with `color`.
    fn fill_polygon(&mut self, points: &[Point2<f64>; 4], color: Color);
}

/// One face, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct FaceDraw {
    /// Index of the face in the mesh's face list
    pub face: usize,
    /// Mean z of the rotated corners, the depth sort key
    pub depth: f64,
    /// Dot product of the face's normal proxy with the light direction
    pub illumination: f64,
    pub color: Color,
    pub points: [Point2<f64>; 4],
}

/// Shades, projects and depth-orders the faces of a rotated mesh
#[derive(Debug, Clone, Copy)]
pub struct FaceRenderer {
    pub projection: Projection,
    pub base_color: Color,
}

impl FaceRenderer {
    pub fn new(projection: Projection, base_color: Color) -> Self {
        Self {
            projection,
            base_color,
        }
    }

    /// Compute the draw list for one frame, farthest face first.
    ///
    /// `points` are the rotated vertices, before the depth offset. Faces
    /// whose corners cannot be projected are left out.
    pub fn plan(
        &self,
        points: &[Point3<f64>],
        faces: &[Face],
        light: &Vector3<f64>,
    ) -> Vec<FaceDraw> {
        let mut order: Vec<(usize, f64)> = faces
            .iter()
            .enumerate()
            .map(|(index, face)| (index, face.average_z(points)))
            .collect();
        order.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        tracing::trace!(?order, "sorted faces by depth");

        order
            .into_iter()
            .filter_map(|(index, depth)| {
                let face = &faces[index];
                let illumination = face.normal_proxy(points).coords.dot(light);
                let color = shade(illumination, self.base_color);

                let Some(screen) = self.projection.project_quad(&face.corners(points)) else {
                    tracing::warn!(face = index, "face reaches the viewer plane, skipping");
                    return None;
                };

                Some(FaceDraw {
                    face: index,
                    depth,
                    illumination,
                    color,
                    points: screen,
                })
            })
            .collect()
    }

    /// Draw the faces onto `canvas` back to front.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        points: &[Point3<f64>],
        faces: &[Face],
        light: &Vector3<f64>,
        canvas: &mut C,
    ) -> Vec<FaceDraw> {
        let draws = self.plan(points, faces, light);
        for draw in &draws {
            canvas.fill_polygon(&draw.points, draw.color);
        }
        draws
    }
}

impl Default for FaceRenderer {
    fn default() -> Self {
        Self::new(Projection::default(), Color::rgb(211.0, 211.0, 211.0))
    }
}
