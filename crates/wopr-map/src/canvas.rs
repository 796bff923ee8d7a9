//! Overlay canvas: fine pixel dots packed into braille cells, plus glyphs.
//!
//! Each character cell holds up to 2×4 braille dots and an optional glyph.
//! Glyphs are layered; a higher layer replaces a lower one in the same cell,
//! never the other way round.

use wopr_core::constants::{PIXELS_PER_COL, PIXELS_PER_ROW};
use wopr_core::enums::DisplaySurface;
use wopr_core::types::{Cell, Point};

use crate::escape::push_escaped;

/// First code point of the Unicode braille block.
const BRAILLE_BASE: u32 = 0x2800;

/// Braille dot bits indexed by [sub-row][sub-col].
const BRAILLE_BITS: [[u8; PIXELS_PER_COL]; PIXELS_PER_ROW] =
    [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Glyph layers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    /// Target marker on the static map.
    Marker,
    /// Permanent mark left by a finished explosion.
    Impact,
    /// Live missile head.
    Head,
    /// Animating explosion.
    Explosion,
}

#[derive(Debug, Clone, Copy, Default)]
struct OverlayCell {
    dots: u8,
    glyph: Option<(char, Layer)>,
}

/// Dynamic layer drawn over the base map.
#[derive(Debug, Clone)]
pub struct OverlayCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<OverlayCell>,
}

impl OverlayCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![OverlayCell::default(); cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.col >= self.cols || cell.row >= self.rows {
            return None;
        }
        Some(cell.row * self.cols + cell.col)
    }

    /// Set one fine pixel. Off-grid pixels are dropped; returns whether it landed.
    pub fn plot(&mut self, point: Point) -> bool {
        let Some(cell) = Cell::from_point(point) else {
            return false;
        };
        let Some(idx) = self.index(cell) else {
            return false;
        };
        let sub_col = (point.x as usize) % PIXELS_PER_COL;
        let sub_row = (point.y as usize) % PIXELS_PER_ROW;
        self.cells[idx].dots |= BRAILLE_BITS[sub_row][sub_col];
        true
    }

    /// Place a glyph in a cell unless a higher layer already owns it.
    pub fn put_glyph(&mut self, cell: Cell, ch: char, layer: Layer) -> bool {
        let Some(idx) = self.index(cell) else {
            return false;
        };
        let slot = &mut self.cells[idx].glyph;
        match slot {
            Some((_, existing)) if *existing > layer => false,
            _ => {
                *slot = Some((ch, layer));
                true
            }
        }
    }

    /// Place a glyph at the cell containing a pixel coordinate.
    pub fn put_glyph_at(&mut self, point: Point, ch: char, layer: Layer) -> bool {
        match Cell::from_point(point) {
            Some(cell) => self.put_glyph(cell, ch, layer),
            None => false,
        }
    }

    /// Place a glyph at a signed cell offset from `origin`; off-grid is dropped.
    pub fn put_glyph_offset(
        &mut self,
        origin: Cell,
        d_col: isize,
        d_row: isize,
        ch: char,
        layer: Layer,
    ) -> bool {
        let col = origin.col as isize + d_col;
        let row = origin.row as isize + d_row;
        if col < 0 || row < 0 {
            return false;
        }
        self.put_glyph(
            Cell {
                col: col as usize,
                row: row as usize,
            },
            ch,
            layer,
        )
    }

    /// Glyph currently in a cell, if any.
    pub fn glyph(&self, cell: Cell) -> Option<char> {
        self.index(cell)
            .and_then(|idx| self.cells[idx].glyph)
            .map(|(ch, _)| ch)
    }

    /// Braille character for a cell's dots, if any are set.
    pub fn braille(&self, cell: Cell) -> Option<char> {
        let idx = self.index(cell)?;
        let dots = self.cells[idx].dots;
        if dots == 0 {
            return None;
        }
        char::from_u32(BRAILLE_BASE + dots as u32)
    }

    /// Merge the overlay onto `base`, producing one escaped line per row.
    ///
    /// Precedence per cell: glyph, then braille dots, then the base character.
    pub fn compose(&self, base: &[Vec<char>], surface: DisplaySurface) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let mut line = String::with_capacity(self.cols * 3);
            for col in 0..self.cols {
                let cell = Cell { col, row };
                let ch = self
                    .glyph(cell)
                    .or_else(|| self.braille(cell))
                    .or_else(|| base.get(row).and_then(|r| r.get(col)).copied())
                    .unwrap_or(' ');
                push_escaped(surface, ch, &mut line);
            }
            lines.push(line.trim_end().to_string());
        }
        lines
    }
}
