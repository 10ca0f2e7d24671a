/// Software rasterizer for filled polygons
use crate::renderer::Canvas;
use crate::shading::Color;
use nalgebra::Point2;

/// A `width × height` buffer of `0x00RRGGBB` pixels
///
/// Polygons are painted in call order with no depth test, so the last
/// polygon drawn over a pixel wins.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    fn fill_triangle(&mut self, v0: Point2<f64>, v1: Point2<f64>, v2: Point2<f64>, pixel: u32) {
        let area = edge_function(v0, v1, v2);
        if area.abs() < 1e-9 || self.width == 0 || self.height == 0 {
            return;
        }

        // Bounding box, clipped to the buffer
        let min_x = v0.x.min(v1.x).min(v2.x).floor().max(0.0);
        let max_x = v0.x.max(v1.x).max(v2.x).ceil().min(self.width as f64 - 1.0);
        let min_y = v0.y.min(v1.y).min(v2.y).floor().max(0.0);
        let max_y = v0.y.max(v1.y).max(v2.y).ceil().min(self.height as f64 - 1.0);
        if min_x > max_x || min_y > max_y {
            return;
        }

        // Either winding is accepted: weights just have to agree with the area's sign
        let sign = area.signum();

        for y in min_y as usize..=max_y as usize {
            for x in min_x as usize..=max_x as usize {
                let p = Point2::new(x as f64 + 0.5, y as f64 + 0.5);

                let w0 = edge_function(v1, v2, p) * sign;
                let w1 = edge_function(v2, v0, p) * sign;
                let w2 = edge_function(v0, v1, p) * sign;

                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.pixels[y * self.width + x] = pixel;
                }
            }
        }
    }
}

impl Canvas for FrameBuffer {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_pixel());
    }

    fn fill_polygon(&mut self, points: &[Point2<f64>; 4], color: Color) {
        let pixel = color.to_pixel();
        let [a, b, c, d] = *points;
        self.fill_triangle(a, b, c, pixel);
        self.fill_triangle(a, c, d, pixel);
    }
}

/// Edge function used in rasterization
fn edge_function(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    (c.x - a.x) * (b.y - a.y) - (c.y - a.y) * (b.x - a.x)
}
