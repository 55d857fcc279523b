// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! Char-cell adapter on top of crossterm.
//!
//! World space [-range, range] is projected orthographically onto a w x h
//! cell grid (z dropped, y up). Line strips become Bresenham runs of
//! | - \ / symbols, spheres become midpoint circles or a single marker when
//! smaller than a cell.

use crate::render::adapter::{Adapter, AdapterBase};
use crate::render::style::Color;
use crate::util::{shape, Point3};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color as CColor, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use itertools::Itertools;
use std::io::{self, Write};

#[derive(Clone, Copy)]
struct Cell {
    sym: char,
    color: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            sym: ' ',
            color: Color::WHITE,
        }
    }
}

pub struct TermAdapter {
    pub base: AdapterBase,
    writer: Box<dyn Write>,
    cells: Vec<Cell>,
    strip: Vec<(i16, i16)>,
    color: Color,
    color_stack: Vec<Color>,
}

impl TermAdapter {
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Plug in any writer, e.g. a byte buffer in tests
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            base: AdapterBase::new(""),
            writer,
            cells: vec![],
            strip: vec![],
            color: Color::WHITE,
            color_stack: vec![],
        }
    }

    /// world (x, y) to grid (col, row); row 0 is the top of the screen
    fn project(&self, x: f32, y: f32) -> (i16, i16) {
        let b = &self.base;
        let r = b.world_range;
        let nx = (x / r + 1.0) * 0.5;
        let ny = 1.0 - (y / r + 1.0) * 0.5;
        let col = (nx * (b.cell_w.saturating_sub(1)) as f32).round() as i16;
        let row = (ny * (b.cell_h.saturating_sub(1)) as f32).round() as i16;
        (col, row)
    }

    fn plot(&mut self, x: i16, y: i16, sym: char) {
        let (w, h) = (self.base.cell_w as i16, self.base.cell_h as i16);
        if x < 0 || y < 0 || x >= w || y >= h {
            return;
        }
        self.cells[y as usize * w as usize + x as usize] = Cell {
            sym,
            color: self.color,
        };
    }
}

impl Default for TermAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for TermAdapter {
    fn init(&mut self, w: u16, h: u16, range: f32, s: String) {
        self.set_size(w, h);
        self.base.world_range = range;
        self.base.game_name = s;
        self.cells = vec![Cell::default(); w as usize * h as usize];
        execute!(self.writer, EnterAlternateScreen, Hide).unwrap();
    }

    fn reset(&mut self) {
        execute!(self.writer, LeaveAlternateScreen, Show).unwrap();
    }

    fn get_base(&mut self) -> &mut AdapterBase {
        &mut self.base
    }

    fn clear_frame(&mut self) {
        self.cells.fill(Cell::default());
        self.strip.clear();
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn push_color(&mut self) {
        self.color_stack.push(self.color);
    }

    fn pop_color(&mut self) {
        if let Some(c) = self.color_stack.pop() {
            self.color = c;
        }
    }

    fn begin_line_strip(&mut self) {
        self.strip.clear();
    }

    fn vertex3f(&mut self, x: f32, y: f32, _z: f32) {
        let p = self.project(x, y);
        self.strip.push(p);
    }

    fn end_line_strip(&mut self) {
        let strip = std::mem::take(&mut self.strip);
        for (a, b) in strip.iter().tuple_windows() {
            for (x, y, sym) in shape::line(a.0, a.1, b.0, b.1) {
                self.plot(x, y, sym);
            }
        }
    }

    fn solid_sphere(&mut self, center: Point3, radius: f32, _slices: u16, _stacks: u16) {
        let (cx, cy) = self.project(center.x, center.y);
        let cells = radius / self.base.world_range * (self.base.cell_w as f32 / 2.0);
        if cells < 2.0 {
            self.plot(cx, cy, 'o');
            return;
        }
        for (x, y) in shape::circle(cx, cy, cells.round() as i16) {
            self.plot(x, y, 'o');
        }
    }

    fn present(&mut self) -> Result<(), String> {
        to_error(queue!(self.writer, Clear(ClearType::All)))?;
        let w = self.base.cell_w as usize;
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.sym == ' ' {
                continue;
            }
            let (x, y) = ((i % w) as u16, (i / w) as u16);
            let c = CColor::Rgb {
                r: (cell.color.r * 255.0) as u8,
                g: (cell.color.g * 255.0) as u8,
                b: (cell.color.b * 255.0) as u8,
            };
            to_error(queue!(
                self.writer,
                MoveTo(x, y),
                SetForegroundColor(c),
                Print(cell.sym)
            ))?;
        }
        to_error(queue!(self.writer, ResetColor))?;
        to_error(self.writer.flush())
    }
}

fn to_error<T>(r: Result<T, io::Error>) -> Result<(), String> {
    r.map(|_| ()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn adapter(buf: &SharedBuf) -> TermAdapter {
        let mut a = TermAdapter::with_writer(Box::new(buf.clone()));
        a.init(21, 21, 10.0, "test".to_string());
        a
    }

    #[test]
    fn horizontal_strip_prints_dashes() {
        let buf = SharedBuf::default();
        let mut a = adapter(&buf);
        a.begin_line_strip();
        a.vertex3f(-10.0, 0.0, 0.0);
        a.vertex3f(10.0, 0.0, 0.0);
        a.end_line_strip();
        a.present().unwrap();
        let out = String::from_utf8_lossy(&buf.0.borrow()).to_string();
        assert!(out.contains('-'));
    }

    #[test]
    fn small_sphere_is_single_marker() {
        let buf = SharedBuf::default();
        let mut a = adapter(&buf);
        a.solid_sphere(Point3::new(0.0, 0.0, 0.0), 0.1, 10, 10);
        a.present().unwrap();
        let out = String::from_utf8_lossy(&buf.0.borrow()).to_string();
        assert_eq!(out.matches('o').count(), 1);
    }

    #[test]
    fn color_push_pop_restores() {
        let buf = SharedBuf::default();
        let mut a = adapter(&buf);
        a.set_color(Color::new(0.0, 1.0, 0.0));
        a.push_color();
        a.set_color(Color::new(1.0, 0.0, 0.0));
        a.pop_color();
        assert_eq!(a.color, Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn out_of_grid_plot_is_ignored() {
        let buf = SharedBuf::default();
        let mut a = adapter(&buf);
        a.begin_line_strip();
        a.vertex3f(-50.0, 30.0, 0.0);
        a.vertex3f(50.0, 30.0, 0.0);
        a.end_line_strip();
        // nothing inside the grid, nothing printed besides the clear
        a.present().unwrap();
    }
}
