/// Rotation matrices and rotation state
use nalgebra::{Matrix3, Point3};

/// Rotation state around the three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    /// Angle around the x-axis
    pub alpha: f64,
    /// Angle around the y-axis
    pub beta: f64,
    /// Angle around the z-axis
    pub gamma: f64,
}

impl RotationState {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, d_alpha: f64, d_beta: f64, d_gamma: f64) {
        self.alpha += d_alpha;
        self.beta += d_beta;
        self.gamma += d_gamma;
    }

    pub fn matrix(&self) -> Matrix3<f64> {
        Transform::rotation_matrix(self.alpha, self.beta, self.gamma)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D rotations
pub struct Transform;

impl Transform {
    /// Combined rotation `Rx(alpha) * Ry(beta) * Rz(gamma)`.
    pub fn rotation_matrix(alpha: f64, beta: f64, gamma: f64) -> Matrix3<f64> {
        let (sa, ca) = alpha.sin_cos();
        let (sb, cb) = beta.sin_cos();
        let (sg, cg) = gamma.sin_cos();

        Matrix3::new(
            cb * cg,
            -sg * cb,
            sb,
            sa * sb * cg + sg * ca,
            -sa * sb * sg + ca * cg,
            -sa * cb,
            sa * sg - sb * ca * cg,
            sa * cg + sb * sg * ca,
            ca * cb,
        )
    }

    /// Rotate every point by `matrix`, keeping the input order.
    pub fn apply(matrix: &Matrix3<f64>, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|p| matrix * p).collect()
    }
}
