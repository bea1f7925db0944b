//! Appearance attributes shared by renderable shapes.
//!
//! A [`ShapeAttributes`] value tells a renderer how to draw a shape's interior,
//! outline and lighting without the shape carrying any rendering logic. Setters
//! never validate: out-of-range widths or stipple factors are stored as given
//! and left for the renderer to clamp or reject.

use std::hash::{Hash, Hasher};

use foundation::color::Color;
use serde::{Deserialize, Serialize};

use crate::image_source::ImageSource;
use crate::stipple::OutlineStipple;

pub const DEFAULT_OUTLINE_WIDTH: f32 = 1.0;
pub const DEFAULT_OUTLINE_STIPPLE_FACTOR: i32 = 0;
pub const DEFAULT_OUTLINE_STIPPLE_PATTERN: u16 = 0xF0F0;

/// Drawing style for a shape.
///
/// Cloning produces an independent value: both colors are copied out of the
/// source, and the image source is duplicated as an identifier only (the image
/// itself stays in the loader's cache).
///
/// Color getters hand out the attribute set's own color. Writing through
/// [`interior_color_mut`](Self::interior_color_mut) or
/// [`outline_color_mut`](Self::outline_color_mut) changes this value in place;
/// there is no copy-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeAttributes {
    draw_interior: bool,
    draw_outline: bool,
    enable_lighting: bool,
    interior_color: Color,
    outline_color: Color,
    outline_width: f32,
    outline_stipple_factor: i32,
    outline_stipple_pattern: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_source: Option<ImageSource>,
    depth_test: bool,
    draw_verticals: bool,
    apply_lighting: bool,
}

impl ShapeAttributes {
    pub fn new() -> Self {
        Self {
            draw_interior: true,
            draw_outline: true,
            enable_lighting: false,
            interior_color: Color::WHITE,
            outline_color: Color::RED,
            outline_width: DEFAULT_OUTLINE_WIDTH,
            outline_stipple_factor: DEFAULT_OUTLINE_STIPPLE_FACTOR,
            outline_stipple_pattern: DEFAULT_OUTLINE_STIPPLE_PATTERN,
            image_source: None,
            depth_test: true,
            draw_verticals: false,
            apply_lighting: false,
        }
    }

    /// Whether the shape's interior is drawn.
    pub fn draw_interior(&self) -> bool {
        self.draw_interior
    }

    pub fn set_draw_interior(&mut self, draw_interior: bool) -> &mut Self {
        self.draw_interior = draw_interior;
        self
    }

    /// Whether the shape's outline is drawn.
    pub fn draw_outline(&self) -> bool {
        self.draw_outline
    }

    pub fn set_draw_outline(&mut self, draw_outline: bool) -> &mut Self {
        self.draw_outline = draw_outline;
        self
    }

    /// Whether lighting is enabled for the shape.
    ///
    /// Independent of [`apply_lighting`](Self::apply_lighting); neither field
    /// implies the other.
    pub fn enable_lighting(&self) -> bool {
        self.enable_lighting
    }

    pub fn set_enable_lighting(&mut self, enable_lighting: bool) -> &mut Self {
        self.enable_lighting = enable_lighting;
        self
    }

    /// Interior color and opacity.
    pub fn interior_color(&self) -> &Color {
        &self.interior_color
    }

    pub fn interior_color_mut(&mut self) -> &mut Color {
        &mut self.interior_color
    }

    /// Replaces the interior color; the previous value is dropped.
    pub fn set_interior_color(&mut self, interior_color: Color) -> &mut Self {
        self.interior_color = interior_color;
        self
    }

    /// Outline color and opacity.
    pub fn outline_color(&self) -> &Color {
        &self.outline_color
    }

    pub fn outline_color_mut(&mut self) -> &mut Color {
        &mut self.outline_color
    }

    pub fn set_outline_color(&mut self, outline_color: Color) -> &mut Self {
        self.outline_color = outline_color;
        self
    }

    /// Outline width in pixels.
    pub fn outline_width(&self) -> f32 {
        self.outline_width
    }

    /// Stored unchecked; negative or non-finite widths are left to the renderer.
    pub fn set_outline_width(&mut self, outline_width: f32) -> &mut Self {
        self.outline_width = outline_width;
        self
    }

    /// Number of times each bit of the stipple pattern is repeated before the
    /// next bit is used. Zero means no stippling.
    pub fn outline_stipple_factor(&self) -> i32 {
        self.outline_stipple_factor
    }

    /// Sets how many pixels each stipple pattern bit covers. Zero disables
    /// stippling; negative values are stored as given.
    pub fn set_outline_stipple_factor(&mut self, outline_stipple_factor: i32) -> &mut Self {
        self.outline_stipple_factor = outline_stipple_factor;
        self
    }

    /// Which outline pixels are drawn (bit set) and which are suppressed, one
    /// bit per pixel, least significant bit first. `0xFFFF` disables stippling.
    pub fn outline_stipple_pattern(&self) -> u16 {
        self.outline_stipple_pattern
    }

    /// Sets the 16-pixel on/off stipple pattern, least significant bit first.
    /// `0xFFFF` draws a solid outline.
    pub fn set_outline_stipple_pattern(&mut self, outline_stipple_pattern: u16) -> &mut Self {
        self.outline_stipple_pattern = outline_stipple_pattern;
        self
    }

    /// Name of the first float field holding NaN or an infinity, if any.
    ///
    /// JSON has no encoding for such values, so documents carrying them cannot
    /// be written and read back.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        if !self.interior_color.is_finite() {
            Some("interior_color")
        } else if !self.outline_color.is_finite() {
            Some("outline_color")
        } else if !self.outline_width.is_finite() {
            Some("outline_width")
        } else {
            None
        }
    }

    /// Effective stipple for the outline, or `None` for a solid outline.
    pub fn outline_stipple(&self) -> Option<OutlineStipple> {
        OutlineStipple::resolve(self.outline_stipple_factor, self.outline_stipple_pattern)
    }

    /// Image applied to the interior. `None` means no image.
    pub fn image_source(&self) -> Option<&ImageSource> {
        self.image_source.as_ref()
    }

    /// Pass `None` to remove the image.
    pub fn set_image_source(&mut self, image_source: Option<ImageSource>) -> &mut Self {
        self.image_source = image_source;
        self
    }

    /// Whether the shape may be occluded by terrain and other scene geometry.
    pub fn depth_test(&self) -> bool {
        self.depth_test
    }

    pub fn set_depth_test(&mut self, depth_test: bool) -> &mut Self {
        self.depth_test = depth_test;
        self
    }

    /// Whether vertical lines are drawn from the shape's positions to the ground.
    pub fn draw_verticals(&self) -> bool {
        self.draw_verticals
    }

    pub fn set_draw_verticals(&mut self, draw_verticals: bool) -> &mut Self {
        self.draw_verticals = draw_verticals;
        self
    }

    /// Whether lighting is applied to the shape.
    pub fn apply_lighting(&self) -> bool {
        self.apply_lighting
    }

    pub fn set_apply_lighting(&mut self, apply_lighting: bool) -> &mut Self {
        self.apply_lighting = apply_lighting;
        self
    }
}

impl Default for ShapeAttributes {
    fn default() -> Self {
        Self::new()
    }
}

// Width is compared by bit pattern so that equality stays reflexive and in
// step with `Hash`.
impl PartialEq for ShapeAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.draw_interior == other.draw_interior
            && self.draw_outline == other.draw_outline
            && self.enable_lighting == other.enable_lighting
            && self.interior_color == other.interior_color
            && self.outline_color == other.outline_color
            && self.outline_width.to_bits() == other.outline_width.to_bits()
            && self.outline_stipple_factor == other.outline_stipple_factor
            && self.outline_stipple_pattern == other.outline_stipple_pattern
            && self.image_source == other.image_source
            && self.depth_test == other.depth_test
            && self.draw_verticals == other.draw_verticals
            && self.apply_lighting == other.apply_lighting
    }
}

impl Eq for ShapeAttributes {}

impl Hash for ShapeAttributes {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.draw_interior.hash(state);
        self.draw_outline.hash(state);
        self.enable_lighting.hash(state);
        self.interior_color.hash(state);
        self.outline_color.hash(state);
        self.outline_width.to_bits().hash(state);
        self.outline_stipple_factor.hash(state);
        self.outline_stipple_pattern.hash(state);
        self.image_source.hash(state);
        self.depth_test.hash(state);
        self.draw_verticals.hash(state);
        self.apply_lighting.hash(state);
    }
}
