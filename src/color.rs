//! 8-bit RGB colors used for reflectance, light intensities and pixels.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const LIGHT_GREY: Self = Self::new(200, 200, 200);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from floating-point channels, rounding each to the
    /// nearest integer and clamping it to `0..=255` independently.
    pub fn from_channels(channels: [f32; 3]) -> Self {
        let [r, g, b] = channels.map(clamp_channel);
        Self { r, g, b }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channel values normalized to `[0, 1]`, used when the color describes
    /// a light rather than a surface.
    pub fn intensities(&self) -> [f32; 3] {
        self.channels().map(|c| c as f32 / 255.0)
    }

    /// Packs into ARGB8888 with an opaque alpha.
    pub fn to_argb(&self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

fn clamp_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}
