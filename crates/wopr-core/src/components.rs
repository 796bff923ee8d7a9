//! ECS components for hecs entities.
//!
//! A missile entity carries a `Missile`; when it impacts, the detonation
//! system attaches an `Explosion` to the same entity so the arc stays on
//! screen until the blast animation finishes.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ARC_HEIGHT;
use crate::enums::Side;
use crate::types::Point;

/// A single munition in flight along a parabolic screen-space arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    pub origin: Point,
    pub destination: Point,
    /// Flight progress, 0.0 at launch and 1.0 at impact.
    pub progress: f64,
    /// Side that launched the missile.
    pub side: Side,
    /// Peak height as a fraction of straight-line distance.
    pub arc_height_fraction: f64,
    /// Name of the target at `destination`.
    pub target: String,
}

impl Missile {
    pub fn new(origin: Point, destination: Point, side: Side, target: impl Into<String>) -> Self {
        Self::with_arc_height(origin, destination, side, target, DEFAULT_ARC_HEIGHT)
    }

    pub fn with_arc_height(
        origin: Point,
        destination: Point,
        side: Side,
        target: impl Into<String>,
        arc_height_fraction: f64,
    ) -> Self {
        Self {
            origin,
            destination,
            progress: 0.0,
            side,
            arc_height_fraction,
            target: target.into(),
        }
    }

    /// Peak arc height in pixels. Zero for degenerate (zero-length) arcs.
    pub fn arc_height(&self) -> f64 {
        let distance = self.origin.distance(self.destination);
        if distance <= f64::EPSILON || !distance.is_finite() {
            return 0.0;
        }
        self.arc_height_fraction * distance
    }

    /// Position on the arc at parameter `t` (clamped to [0, 1]).
    ///
    /// x and y interpolate linearly; y is lifted by `4h·t·(1−t)` so the arc
    /// bows upward on screen whichever way the missile flies.
    pub fn point_at(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 {
            return self.origin;
        }
        if t == 1.0 {
            return self.destination;
        }
        let base = self.origin.lerp(self.destination, t);
        let lift = 4.0 * self.arc_height() * t * (1.0 - t);
        Point::new(base.x, base.y - lift)
    }

    /// Current position for the present progress.
    pub fn current_position(&self) -> Point {
        self.point_at(self.progress)
    }

    pub fn is_impacted(&self) -> bool {
        self.progress >= 1.0
    }

    /// Advance progress by `step`, clamped to 1.0.
    ///
    /// Returns true only on the call that moves the missile into impact.
    pub fn advance(&mut self, step: f64) -> bool {
        if self.is_impacted() {
            return false;
        }
        let step = if step.is_finite() { step.max(0.0) } else { 0.0 };
        self.progress = (self.progress + step).min(1.0);
        self.is_impacted()
    }

    /// Jump straight to impact. Returns true if the missile was still in flight.
    pub fn force_impact(&mut self) -> bool {
        let was_flying = !self.is_impacted();
        self.progress = 1.0;
        was_flying
    }

    /// Sample the complete predicted flight path at `steps + 1` points.
    ///
    /// The first point is exactly the origin and the last exactly the
    /// destination. `steps == 0` is treated as 1.
    pub fn full_arc_points(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| self.point_at(i as f64 / steps as f64))
            .collect()
    }

    /// Sample the part of the arc already flown, up to the current position.
    pub fn trail_points(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| self.point_at(self.progress * i as f64 / steps as f64))
            .collect()
    }
}

/// An expanding-then-contracting blast at an impact point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub location: Point,
    /// Render ticks elapsed since detonation.
    pub frame: u32,
    pub max_frames: u32,
}

impl Explosion {
    pub fn new(location: Point, max_frames: u32) -> Self {
        Self {
            location,
            frame: 0,
            max_frames: max_frames.max(1),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.max_frames
    }

    /// Advance one render tick.
    pub fn tick(&mut self) {
        self.frame = self.frame.saturating_add(1);
    }

    /// Blast size on a 0..=`max_size` scale.
    ///
    /// Grows over the first half of the lifetime and shrinks over the second.
    pub fn size(&self, max_size: usize) -> usize {
        if self.is_finished() || max_size == 0 {
            return 0;
        }
        let half = (self.max_frames as f64 / 2.0).max(1.0);
        let phase = self.frame as f64;
        let scale = if phase < half {
            (phase + 1.0) / half
        } else {
            (self.max_frames as f64 - phase) / half
        };
        ((scale.clamp(0.0, 1.0) * max_size as f64).round() as usize).min(max_size)
    }
}
