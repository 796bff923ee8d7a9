//! WorldMap: static base map plus named locations, rendered with overlays.
//!
//! Missile arcs are rasterized in fine pixel space and packed into braille
//! cells; heads, detonations and impact marks are glyphs on the coarse
//! character grid. Both layers are merged over the base map per frame.
//! The grid carries `ARC_ROWS` of headroom so arc peaks stay visible.

use std::collections::HashMap;

use wopr_core::components::{Explosion, Missile};
use wopr_core::constants::*;
use wopr_core::enums::{DisplaySurface, Side};
use wopr_core::types::{Cell, Point};

use crate::base_map::{banner, base_grid, grid_from_lines};
use crate::canvas::{Layer, OverlayCanvas};
use crate::escape::escape_text;
use crate::projection::MapProjection;

/// Live missile head.
pub const HEAD_GLYPH: char = '@';
/// Center of an animating explosion.
pub const BLAST_CORE_GLYPH: char = '*';
/// Rim of an animating explosion.
pub const BLAST_RIM_GLYPH: char = 'o';
/// Permanent impact site.
pub const IMPACT_GLYPH: char = 'X';
/// Selected target on the static map.
pub const MARKER_GLYPH: char = '+';

/// Launch anchor of each side: (name, lat, lon).
const LAUNCH_SITES: [(Side, &str, f64, f64); 2] = [
    (Side::Us, "US_LAUNCH", 47.5, -101.3),
    (Side::Ussr, "USSR_LAUNCH", 56.0, 60.0),
];

/// Loaded world map with geographic projection and named locations.
#[derive(Debug, Clone)]
pub struct WorldMap {
    base: Vec<Vec<char>>,
    projection: MapProjection,
    /// Upper-case location name → fine pixel coordinate.
    locations: HashMap<String, Point>,
    surface: DisplaySurface,
}

impl WorldMap {
    /// Built-in map with both launch anchors registered.
    pub fn new(surface: DisplaySurface) -> Self {
        Self::with_base(surface, base_grid())
    }

    /// Custom map art, `MAP_ROWS` lines of up to `MAP_COLS` characters.
    pub fn with_base_lines(surface: DisplaySurface, lines: &[&str]) -> Self {
        Self::with_base(surface, grid_from_lines(lines))
    }

    fn with_base(surface: DisplaySurface, base: Vec<Vec<char>>) -> Self {
        let mut map = Self {
            base,
            projection: MapProjection::default(),
            locations: HashMap::new(),
            surface,
        };
        for (_, name, lat, lon) in LAUNCH_SITES {
            map.register(name, lat, lon);
        }
        map
    }

    /// Register (or replace) a named location from lat/lon.
    pub fn register(&mut self, name: &str, lat: f64, lon: f64) -> Point {
        let point = self.projection.to_pixel(lat, lon);
        if !self.projection.contains(point) {
            tracing::warn!(name, lat, lon, "location outside map bounds");
        }
        self.locations.insert(name.to_ascii_uppercase(), point);
        point
    }

    /// Pixel coordinate of a named location.
    pub fn location(&self, name: &str) -> Option<Point> {
        self.locations.get(&name.to_ascii_uppercase()).copied()
    }

    /// Pixel coordinate of a side's launch anchor.
    pub fn launch_anchor(&self, side: Side) -> Point {
        let (_, name, lat, lon) = LAUNCH_SITES
            .iter()
            .copied()
            .find(|(s, ..)| *s == side)
            .unwrap_or(LAUNCH_SITES[0]);
        self.location(name)
            .unwrap_or_else(|| self.projection.to_pixel(lat, lon))
    }

    pub fn projection(&self) -> &MapProjection {
        &self.projection
    }

    pub fn surface(&self) -> DisplaySurface {
        self.surface
    }

    /// Character grid size as (cols, rows), headroom included.
    pub fn dimensions(&self) -> (usize, usize) {
        (MAP_COLS, GRID_ROWS)
    }

    fn canvas(&self) -> OverlayCanvas {
        OverlayCanvas::new(MAP_COLS, GRID_ROWS)
    }

    fn assemble(&self, canvas: &OverlayCanvas, footer: Option<&str>) -> String {
        let mut out = String::new();
        out.push_str(&escape_text(self.surface, &banner()));
        out.push('\n');
        for line in canvas.compose(&self.base, self.surface) {
            out.push_str(&line);
            out.push('\n');
        }
        if let Some(footer) = footer {
            out.push_str(&escape_text(self.surface, footer));
            out.push('\n');
        }
        out
    }

    /// Base map with title banner, no overlay.
    pub fn render_static(&self) -> String {
        self.assemble(&self.canvas(), None)
    }

    /// Base map with a marker at each given point (e.g. selected targets).
    pub fn render_markers(&self, points: &[Point]) -> String {
        let mut canvas = self.canvas();
        for &point in points {
            canvas.put_glyph_at(point, MARKER_GLYPH, Layer::Marker);
        }
        self.assemble(&canvas, Some(&format!("{MARKER_GLYPH} SELECTED TARGET")))
    }

    /// One animation frame.
    ///
    /// Every missile's full predicted arc is drawn as braille dots; live
    /// missiles get a head glyph; explosions are sized by their frame;
    /// finished sites get a permanent mark that an active explosion at the
    /// same cell overrides.
    pub fn render_frame(
        &self,
        missiles: &[Missile],
        explosions: &[Explosion],
        impact_sites: &[Point],
    ) -> String {
        let mut canvas = self.canvas();

        for missile in missiles {
            for point in missile.full_arc_points(arc_samples(missile)) {
                canvas.plot(point);
            }
        }

        for &site in impact_sites {
            canvas.put_glyph_at(site, IMPACT_GLYPH, Layer::Impact);
        }

        for missile in missiles.iter().filter(|m| !m.is_impacted()) {
            canvas.put_glyph_at(missile.current_position(), HEAD_GLYPH, Layer::Head);
        }

        for explosion in explosions {
            draw_explosion(&mut canvas, explosion);
        }

        let legend = format!(
            "{HEAD_GLYPH} MISSILE  \u{28FF} TRAJECTORY  {BLAST_CORE_GLYPH} DETONATION  {IMPACT_GLYPH} IMPACT"
        );
        self.assemble(&canvas, Some(&legend))
    }
}

/// Number of samples for a missile's arc: about two per pixel of flight.
fn arc_samples(missile: &Missile) -> usize {
    let length = missile.origin.distance(missile.destination) + 2.0 * missile.arc_height();
    let samples = (length * 2.0).ceil();
    if !samples.is_finite() {
        return ARC_MIN_SAMPLES;
    }
    (samples as usize).clamp(ARC_MIN_SAMPLES, ARC_MAX_SAMPLES)
}

/// Draw an explosion as a filled ellipse of cells sized by its frame.
///
/// Terminal cells are about twice as tall as wide, so the horizontal
/// radius is doubled.
fn draw_explosion(canvas: &mut OverlayCanvas, explosion: &Explosion) {
    if explosion.is_finished() {
        return;
    }
    let Some(center) = Cell::from_point(explosion.location) else {
        return;
    };
    let radius = explosion.size(EXPLOSION_MAX_RADIUS) as isize;
    canvas.put_glyph(center, BLAST_CORE_GLYPH, Layer::Explosion);
    if radius == 0 {
        return;
    }
    let r = radius as f64;
    for d_row in -radius..=radius {
        for d_col in -2 * radius..=2 * radius {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            let dist = ((d_col as f64 / 2.0).powi(2) + (d_row as f64).powi(2)).sqrt();
            if dist > r + 0.25 {
                continue;
            }
            let glyph = if dist > r - 0.75 {
                BLAST_RIM_GLYPH
            } else {
                BLAST_CORE_GLYPH
            };
            canvas.put_glyph_offset(center, d_col, d_row, glyph, Layer::Explosion);
        }
    }
}
