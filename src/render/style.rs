// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! Draw colors for the adapter contract.

use serde::{Deserialize, Serialize};

/// An RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}
