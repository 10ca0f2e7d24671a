//! Flat Lambertian face shading

/// An RGB colour with unclamped floating-point channels.
///
/// Channels hold whatever the lighting computation produced; they are only
/// forced into 0–255 when converted for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self::rgb(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Clamp each channel to the displayable range.
    pub fn to_rgb8(self) -> [u8; 3] {
        let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Pack as `0x00RRGGBB`.
    pub fn to_pixel(self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        (r as u32) << 16 | (g as u32) << 8 | b as u32
    }
}

/// Colour of a face whose normal proxy has dot product `dp` with the light.
///
/// Lit faces scale `base` linearly by `dp`; faces turned away from the
/// light are drawn flat black whatever the magnitude of `dp`.
pub fn shade(dp: f64, base: Color) -> Color {
    if dp >= 0.0 {
        base.scaled(dp)
    } else {
        Color::BLACK
    }
}
