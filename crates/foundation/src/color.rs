use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// RGBA color with `f32` components, nominally in `[0, 1]`.
///
/// Components are not clamped. Equality and hashing compare the exact bit
/// pattern of each component, so `Eq` and `Hash` agree even for NaN.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn from_array(rgba: [f32; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Overwrites all four components in place.
    pub fn set(&mut self, red: f32, green: f32, blue: f32, alpha: f32) -> &mut Self {
        self.red = red;
        self.green = green;
        self.blue = blue;
        self.alpha = alpha;
        self
    }

    pub fn is_finite(&self) -> bool {
        self.red.is_finite()
            && self.green.is_finite()
            && self.blue.is_finite()
            && self.alpha.is_finite()
    }

    fn bits(&self) -> [u32; 4] {
        [
            self.red.to_bits(),
            self.green.to_bits(),
            self.blue.to_bits(),
            self.alpha.to_bits(),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl From<[f32; 4]> for Color {
    fn from(rgba: [f32; 4]) -> Self {
        Color::from_array(rgba)
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}
