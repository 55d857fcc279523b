// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! The rendering surface contract.
//!
//! An Adapter is whatever can draw colored connected line strips and filled
//! spheres at 3d positions: a terminal grid, a GL window, a test recorder.
//! The curve renderer in graph.rs only ever talks to this trait.

use crate::render::style::Color;
use crate::util::Point3;

/// Fields shared by every adapter implementation
pub struct AdapterBase {
    pub game_name: String,
    pub cell_w: u16,
    pub cell_h: u16,
    /// world half-extent mapped onto the drawing surface
    pub world_range: f32,
}

impl AdapterBase {
    pub fn new(gn: &str) -> Self {
        Self {
            game_name: gn.to_string(),
            cell_w: 0,
            cell_h: 0,
            world_range: 1.0,
        }
    }
}

pub trait Adapter {
    /// Initialize the adapter
    ///
    /// - `w`, `h`: logical surface size (cell count)
    /// - `range`: world half-extent to map onto the surface
    /// - `s`: window title
    fn init(&mut self, w: u16, h: u16, range: f32, s: String);

    /// Reset adapter state (restore the screen on terminals)
    fn reset(&mut self);

    fn get_base(&mut self) -> &mut AdapterBase;

    /// Drop everything drawn since the last present
    fn clear_frame(&mut self);

    /// Set the current draw color; affects subsequent strips and spheres
    fn set_color(&mut self, color: Color);

    /// Save the current draw color
    fn push_color(&mut self);

    /// Restore the most recently saved draw color
    fn pop_color(&mut self);

    /// Open a connected-line-segment primitive
    fn begin_line_strip(&mut self);

    /// Emit a 3d vertex into the open line strip
    fn vertex3f(&mut self, x: f32, y: f32, z: f32);

    /// Close the primitive, joining successive vertices with segments
    fn end_line_strip(&mut self);

    /// Filled sphere at a 3d translation with the given radius and
    /// tessellation
    fn solid_sphere(&mut self, center: Point3, radius: f32, slices: u16, stacks: u16);

    /// Flush the frame to the screen
    fn present(&mut self) -> Result<(), String>;

    fn set_size(&mut self, w: u16, h: u16) -> &mut Self
    where
        Self: Sized,
    {
        let bs = self.get_base();
        bs.cell_w = w;
        bs.cell_h = h;
        self
    }
}
