use crate::geometry::vector3::Vector3;
use palette::Srgb;
use serde::{Deserialize, Serialize};

const BYTE_SCALE: f64 = 255.0;

/// Linear-in-storage RGB triple; channels are nominally in [0, 1] but nothing clamps them,
/// emission colors may legitimately exceed 1.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color(Srgb<f64>);

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Color(Srgb::new(red, green, blue))
    }

    #[must_use]
    pub fn from_rgb_bytes(red: u8, green: u8, blue: u8) -> Self {
        Color::new(red as f64 / BYTE_SCALE, green as f64 / BYTE_SCALE, blue as f64 / BYTE_SCALE)
    }

    #[must_use]
    pub const fn red(self) -> f64 {
        self.0.red
    }

    #[must_use]
    pub const fn green(self) -> f64 {
        self.0.green
    }

    #[must_use]
    pub const fn blue(self) -> f64 {
        self.0.blue
    }

    /// Truncating 8-bit conversion; out-of-range channels saturate.
    #[must_use]
    pub fn to_rgb(self) -> [u8; 3] {
        let to_byte = |channel: f64| (channel * BYTE_SCALE).floor() as u8;
        [to_byte(self.red()), to_byte(self.green()), to_byte(self.blue())]
    }

    #[must_use]
    pub fn to_vector3(self) -> Vector3 {
        Vector3::new(self.red(), self.green(), self.blue())
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.red(), self.green(), self.blue()]
    }
}

impl Default for Color {
    #[must_use]
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<[f64; 3]> for Color {
    fn from(value: [f64; 3]) -> Self {
        Color::new(value[0], value[1], value[2])
    }
}

impl From<Color> for [f64; 3] {
    fn from(value: Color) -> Self {
        value.to_array()
    }
}

impl From<Srgb<f64>> for Color {
    fn from(value: Srgb<f64>) -> Self {
        Color(value)
    }
}
