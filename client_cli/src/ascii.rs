//! Terminal renderer: the field scaled down to a character grid.

use std::io::Write;

use game_core::{Aabb, Color, Field, Renderer};
use glam::DVec2;

/// Moves the cursor home so each frame overwrites the last one
const CURSOR_HOME: &str = "\x1b[H";

/// Raw mode turns off the terminal's newline translation
const EOL: &str = "\r\n";

pub struct AsciiRenderer<W: Write> {
    out: W,
    cols: usize,
    rows: usize,
    cell: DVec2, // field pixels per character cell
    grid: Vec<char>,
    caption: String,
    failed: bool,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(field: Field, cols: usize, rows: usize, out: W) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            out,
            cols,
            rows,
            cell: DVec2::new(field.width / cols as f64, field.height / rows as f64),
            grid: vec![' '; cols * rows],
            caption: String::new(),
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn glyph(color: Color) -> char {
        match color {
            Color::BLUE => 'O',
            Color::RED | Color::GREEN => '#',
            _ => '*',
        }
    }

    /// Grid cell holding a field point, clamped onto the grid
    fn cell_of(&self, point: DVec2) -> (usize, usize) {
        let col = (point.x / self.cell.x).floor().clamp(0.0, (self.cols - 1) as f64);
        let row = (point.y / self.cell.y).floor().clamp(0.0, (self.rows - 1) as f64);
        (col as usize, row as usize)
    }

    fn put(&mut self, col: usize, row: usize, ch: char) {
        if col < self.cols && row < self.rows {
            self.grid[row * self.cols + col] = ch;
        }
    }

    fn frame(&self) -> String {
        let border = "-".repeat(self.cols + 2);
        let mut frame = String::with_capacity((self.cols + 4) * (self.rows + 3));
        frame.push_str(CURSOR_HOME);
        frame.push_str(&self.caption);
        frame.push_str(EOL);
        frame.push_str(&border);
        frame.push_str(EOL);
        for row in self.grid.chunks(self.cols) {
            frame.push('|');
            frame.extend(row.iter());
            frame.push('|');
            frame.push_str(EOL);
        }
        frame.push_str(&border);
        frame.push_str(EOL);
        frame
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn clear(&mut self, _color: Color) {
        self.grid.fill(' ');
    }

    fn set_caption(&mut self, text: &str) {
        self.caption = text.to_string();
    }

    fn draw_rect(&mut self, rect: Aabb, color: Color) {
        let glyph = Self::glyph(color);
        let (c0, r0) = self.cell_of(rect.min);
        let (c1, r1) = self.cell_of(rect.max - DVec2::splat(1e-9));
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.put(col, row, glyph);
            }
        }
    }

    fn draw_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        let glyph = Self::glyph(color);
        let (c0, r0) = self.cell_of(center - DVec2::splat(radius));
        let (c1, r1) = self.cell_of(center + DVec2::splat(radius));
        for row in r0..=r1 {
            for col in c0..=c1 {
                let mid = DVec2::new(col as f64 + 0.5, row as f64 + 0.5) * self.cell;
                if mid.distance(center) <= radius {
                    self.put(col, row, glyph);
                }
            }
        }
        let (col, row) = self.cell_of(center);
        self.put(col, row, glyph);
    }

    fn draw_text(&mut self, text: &str, center: DVec2, _size: f64, _color: Color) {
        let (col, row) = self.cell_of(center);
        let len = text.chars().count();
        let start = col.saturating_sub(len / 2);
        for (i, ch) in text.chars().enumerate() {
            self.put(start + i, row, ch);
        }
    }

    fn present(&mut self) {
        if self.failed {
            return;
        }
        let frame = self.frame();
        if let Err(err) = self
            .out
            .write_all(frame.as_bytes())
            .and_then(|()| self.out.flush())
        {
            tracing::warn!(%err, "terminal output failed, no more frames will be drawn");
            self.failed = true;
        }
    }
}

/// Renderer for headless runs
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self, _color: Color) {}

    fn draw_rect(&mut self, _rect: Aabb, _color: Color) {}

    fn draw_circle(&mut self, _center: DVec2, _radius: f64, _color: Color) {}

    fn draw_text(&mut self, _text: &str, _center: DVec2, _size: f64, _color: Color) {}

    fn present(&mut self) {}
}
