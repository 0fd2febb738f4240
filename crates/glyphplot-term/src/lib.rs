//! Terminal cell-grid canvas backend.
//!
//! [`TermCanvas`] implements the engine's `Canvas` trait over a grid of
//! terminal cells. Fine primitives compose braille glyphs (2×4 dots per
//! cell), coarse primitives compose quadrant blocks (2×2 per cell), and
//! text runs overwrite whole cells. [`TermCanvas::frame`] serializes the
//! grid as an ANSI truecolor frame for stdout.
//!
//! Coordinates follow the engine's dot-space convention: a canvas created
//! with `cols × rows` cells is `2·cols` dots wide and `4·rows` dots tall.
//! Out-of-range draws (including negative coordinates) are ignored.

use glam::IVec2;
use glyphplot::{Canvas, Color};

/// Dots per cell, horizontally.
pub const DOTS_PER_CELL_X: i32 = 2;

/// Dots per cell, vertically.
pub const DOTS_PER_CELL_Y: i32 = 4;

/// Braille dot bit for a dot position within a cell, indexed `[y][x]`.
const BRAILLE_BITS: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Quadrant block glyphs indexed by bits: 1 = top-left, 2 = top-right,
/// 4 = bottom-left, 8 = bottom-right.
const QUADRANTS: [char; 16] = [
    ' ', '▘', '▝', '▀', '▖', '▌', '▞', '▛', '▗', '▚', '▐', '▜', '▄', '▙', '▟', '█',
];

/// What a cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Glyph {
    #[default]
    Empty,
    Braille(u8),
    Quadrant(u8),
    Text(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Cell {
    glyph: Glyph,
    color: Option<Color>,
}

impl Cell {
    fn to_char(self) -> char {
        match self.glyph {
            Glyph::Empty => ' ',
            Glyph::Braille(bits) => char::from_u32(0x2800 + bits as u32).unwrap_or(' '),
            Glyph::Quadrant(bits) => QUADRANTS[bits as usize & 0xF],
            Glyph::Text(c) => c,
        }
    }
}

/// A character grid implementing the engine's canvas contract.
#[derive(Debug, Clone)]
pub struct TermCanvas {
    cols: i32,
    rows: i32,
    cells: Vec<Cell>,
}

impl TermCanvas {
    /// Create a blank canvas of `cols × rows` terminal cells.
    pub fn new(cols: i32, rows: i32) -> Self {
        let (cols, rows) = (cols.max(0), rows.max(0));
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); (cols * rows) as usize],
        }
    }

    /// Width in cells.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Height in cells.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || col >= self.cols || row < 0 || row >= self.rows {
            return None;
        }
        Some(&mut self.cells[(row * self.cols + col) as usize])
    }

    fn set_dot(&mut self, pos: IVec2, color: Color) {
        let (col, row) = (
            pos.x.div_euclid(DOTS_PER_CELL_X),
            pos.y.div_euclid(DOTS_PER_CELL_Y),
        );
        let bit = BRAILLE_BITS[pos.y.rem_euclid(DOTS_PER_CELL_Y) as usize]
            [pos.x.rem_euclid(DOTS_PER_CELL_X) as usize];
        if let Some(cell) = self.cell_mut(col, row) {
            // Accumulate into an existing braille cell, otherwise start over.
            let bits = match cell.glyph {
                Glyph::Braille(existing) => existing | bit,
                _ => bit,
            };
            cell.glyph = Glyph::Braille(bits);
            cell.color = Some(color);
        }
    }

    fn set_quadrant(&mut self, pos: IVec2, color: Color) {
        let (col, row) = (
            pos.x.div_euclid(DOTS_PER_CELL_X),
            pos.y.div_euclid(DOTS_PER_CELL_Y),
        );
        let qx = pos.x.rem_euclid(DOTS_PER_CELL_X);
        let qy = pos.y.rem_euclid(DOTS_PER_CELL_Y) / 2;
        let bit = 1u8 << (qy * 2 + qx);
        if let Some(cell) = self.cell_mut(col, row) {
            let bits = match cell.glyph {
                Glyph::Quadrant(existing) => existing | bit,
                _ => bit,
            };
            cell.glyph = Glyph::Quadrant(bits);
            cell.color = Some(color);
        }
    }

    fn each_line_dot(from: IVec2, to: IVec2, mut plot: impl FnMut(IVec2)) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);
        loop {
            plot(IVec2::new(x, y));
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// The grid as plain text, one line per cell row. No escape codes;
    /// meant for tests and snapshots.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(self.cells[(row * self.cols + col) as usize].to_char());
            }
            out.push('\n');
        }
        out
    }

    /// Serialize as an ANSI truecolor frame for a terminal.
    pub fn frame(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            let mut current: Option<Color> = None;
            for col in 0..self.cols {
                let cell = self.cells[(row * self.cols + col) as usize];
                if cell.color != current {
                    match cell.color {
                        Some(c) => {
                            out.push_str(&format!("\x1b[38;2;{};{};{}m", c.r, c.g, c.b));
                        }
                        None => out.push_str("\x1b[39m"),
                    }
                    current = cell.color;
                }
                out.push(cell.to_char());
            }
            out.push_str("\x1b[0m\n");
        }
        out
    }
}

impl Canvas for TermCanvas {
    fn width(&self) -> i32 {
        self.cols * DOTS_PER_CELL_X
    }

    fn height(&self) -> i32 {
        self.rows * DOTS_PER_CELL_Y
    }

    fn draw_text(&mut self, pos: IVec2, text: &str) {
        let row = pos.y.div_euclid(DOTS_PER_CELL_Y);
        let mut col = pos.x.div_euclid(DOTS_PER_CELL_X);
        for c in text.chars() {
            if let Some(cell) = self.cell_mut(col, row) {
                cell.glyph = Glyph::Text(c);
                cell.color = None;
            }
            col += 1;
        }
    }

    fn draw_point(&mut self, pos: IVec2, color: Color) {
        self.set_dot(pos, color);
    }

    fn draw_block(&mut self, pos: IVec2, color: Color) {
        self.set_quadrant(pos, color);
    }

    fn draw_point_line(&mut self, from: IVec2, to: IVec2, color: Color) {
        Self::each_line_dot(from, to, |dot| self.set_dot(dot, color));
    }

    fn draw_block_line(&mut self, from: IVec2, to: IVec2, color: Color) {
        Self::each_line_dot(from, to, |dot| self.set_quadrant(dot, color));
    }
}
