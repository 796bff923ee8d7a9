//! Fundamental geometric and tally types.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::constants::{PIXELS_PER_COL, PIXELS_PER_ROW};
use crate::enums::Side;

/// A coordinate in fine pixel space.
///
/// x grows east (right), y grows south (down). Each character cell of the
/// base map covers `PIXELS_PER_COL` × `PIXELS_PER_ROW` pixels.
pub type Point = glam::DVec2;

/// A character cell on the coarse map grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    /// Convert a fine pixel coordinate to the character cell containing it.
    ///
    /// Returns None for coordinates left of / above the grid or non-finite
    /// values. The caller bounds-checks against its grid size.
    pub fn from_point(point: Point) -> Option<Self> {
        if !point.x.is_finite() || !point.y.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        Some(Self {
            col: (point.x / PIXELS_PER_COL as f64) as usize,
            row: (point.y / PIXELS_PER_ROW as f64) as usize,
        })
    }

    /// Pixel coordinate of this cell's center.
    pub fn center(&self) -> Point {
        Point::new(
            (self.col * PIXELS_PER_COL) as f64 + PIXELS_PER_COL as f64 / 2.0,
            (self.row * PIXELS_PER_ROW) as f64 + PIXELS_PER_ROW as f64 / 2.0,
        )
    }
}

/// Running casualty count per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasualtyTally {
    pub us: u64,
    pub ussr: u64,
}

impl CasualtyTally {
    /// Add casualties suffered by `side`.
    pub fn add(&mut self, side: Side, casualties: u64) {
        self[side] = self[side].saturating_add(casualties);
    }

    /// Combined casualties of both sides.
    pub fn total(&self) -> u64 {
        self.us.saturating_add(self.ussr)
    }
}

impl Index<Side> for CasualtyTally {
    type Output = u64;

    fn index(&self, side: Side) -> &u64 {
        match side {
            Side::Us => &self.us,
            Side::Ussr => &self.ussr,
        }
    }
}

impl IndexMut<Side> for CasualtyTally {
    fn index_mut(&mut self, side: Side) -> &mut u64 {
        match side {
            Side::Us => &mut self.us,
            Side::Ussr => &mut self.ussr,
        }
    }
}
