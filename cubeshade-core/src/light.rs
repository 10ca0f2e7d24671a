/// Spherical light model
use nalgebra::Vector3;

/// Direction of the light source as two spherical angles (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    pub phi: f64,
    pub theta: f64,
}

impl LightState {
    pub fn new(phi: f64, theta: f64) -> Self {
        Self { phi, theta }
    }

    pub fn rotate(&mut self, d_phi: f64, d_theta: f64) {
        self.phi += d_phi;
        self.theta += d_theta;
    }

    pub fn direction(&self) -> Vector3<f64> {
        light_direction(self.phi, self.theta)
    }
}

/// Unit vector for the spherical angles `(phi, theta)` on a sphere of radius 1.
pub fn light_direction(phi: f64, theta: f64) -> Vector3<f64> {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vector3::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_unit_length() {
        for phi in [-2.0, 0.0, 0.7, FRAC_PI_2, 13.5, -400.0] {
            for theta in [3.0, 0.0, -1.1, 99.0] {
                let dir = light_direction(phi, theta);
                assert!((dir.norm() - 1.0).abs() < 1e-12, "phi={phi} theta={theta}");
            }
        }
    }

    #[test]
    fn test_axes() {
        assert!((light_direction(0.0, 0.0) - Vector3::x()).norm() < 1e-12);
        assert!((light_direction(0.0, FRAC_PI_2) - Vector3::y()).norm() < 1e-12);
        assert!((light_direction(FRAC_PI_2, 0.0) - Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn test_state_direction() {
        let mut light = LightState::new(-2.0, 3.0);
        light.rotate(0.001, -0.001);
        assert!((light.phi + 1.999).abs() < 1e-12);
        assert!((light.theta - 2.999).abs() < 1e-12);
        assert_eq!(light.direction(), light_direction(light.phi, light.theta));
    }
}
