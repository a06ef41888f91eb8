//! Linear RGBA colors for debug geometry.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGBA color, each channel in `[0, 1]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Creates a new color
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// White
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Red (X axis)
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Green (Y axis)
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Blue (Z axis)
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Magenta tail used for plane normals
    pub const NORMAL_BASE: Self = Self::rgb(0.75, 0.0, 0.5);

    /// Same color with a different alpha
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}
