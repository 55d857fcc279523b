// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! Render layer.
//!
//! - `adapter`: the drawing surface contract (line strips, colors, spheres)
//! - `style`: the RGB color value type
//! - `graph`: turns a BezierCurve into adapter draw calls
//! - `term`: a char-cell adapter implementation on top of crossterm

pub mod adapter;
pub mod graph;
pub mod style;
#[cfg(feature = "crossterm")]
pub mod term;

pub use adapter::{Adapter, AdapterBase};
pub use style::Color;
