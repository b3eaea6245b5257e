//! Agent Components
//!
//! A wandering point that moves in a straight line, reflects off the field
//! edges with a fresh random heading, and marks its pixel every frame.

use bevy_ecs::prelude::*;

use crate::components::field::{Bounds, TrailField, TRAIL_WHITE};
use crate::UniformSource;

/// Angular margin kept away from the edge-parallel directions after a reflection,
/// so the new heading does not immediately leave through the same edge.
pub const REFLECTION_MARGIN_DEG: f32 = 45.0;

/// Rounding used both for boundary checks and for picking the stamped pixel.
/// Ties go to even, so 2.5 lands on pixel 2 and 3.5 on pixel 4.
pub fn pixel_round(coord: f32) -> f32 {
    coord.round_ties_even()
}

/// Which edge an agent bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Right,
    Left,
    Bottom,
    Top,
}

impl Edge {
    /// Heading range (degrees, `[low, high)`) that points back into the field.
    /// `y` grows downward, so positive headings point down.
    pub fn inward_headings(self) -> (f32, f32) {
        let m = REFLECTION_MARGIN_DEG;
        match self {
            Edge::Right => (90.0 + m, 270.0 - m),
            Edge::Left => (-90.0 + m, 90.0 - m),
            Edge::Bottom => (-180.0 + m, -m),
            Edge::Top => (m, 180.0 - m),
        }
    }
}

/// A single trail-laying agent
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Agent {
    pub x: f32,
    pub y: f32,
    /// Direction of travel in degrees; 0 is +x, 90 is +y (down)
    pub heading: f32,
    /// Pixels per second
    pub speed: f32,
    bounds: Bounds,
}

impl Agent {
    pub fn new(x: f32, y: f32, heading: f32, speed: f32, bounds: Bounds) -> Self {
        Self {
            x,
            y,
            heading,
            speed,
            bounds,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Advance along the current heading for `dt` seconds, then reflect off any
    /// edge that was crossed.
    ///
    /// All four edges are checked in turn; at a corner both axes are clamped and
    /// the heading drawn last wins. Only the end position is observed, so a step
    /// longer than the field simply lands on the far edge.
    pub fn step<R: UniformSource + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        let radians = self.heading.to_radians();
        self.x += self.speed * radians.cos() * dt;
        self.y += self.speed * radians.sin() * dt;

        let width = self.bounds.width as f32;
        let height = self.bounds.height as f32;

        if pixel_round(self.x) >= width {
            self.x = width - 1.0;
            self.reflect(Edge::Right, rng);
        }
        if pixel_round(self.x) < 0.0 {
            self.x = 0.0;
            self.reflect(Edge::Left, rng);
        }
        if pixel_round(self.y) >= height {
            self.y = height - 1.0;
            self.reflect(Edge::Bottom, rng);
        }
        if pixel_round(self.y) < 0.0 {
            self.y = 0.0;
            self.reflect(Edge::Top, rng);
        }
    }

    fn reflect<R: UniformSource + ?Sized>(&mut self, edge: Edge, rng: &mut R) {
        let (low, high) = edge.inward_headings();
        self.heading = rng.uniform(low, high);
        tracing::trace!(?edge, heading = self.heading, "agent reflected");
    }

    /// Pixel under the agent, or `None` if it sits outside the field
    /// (only possible before its first step) or has a NaN coordinate.
    pub fn pixel(&self) -> Option<(usize, usize)> {
        let px = pixel_round(self.x);
        let py = pixel_round(self.y);
        if px.is_nan() || py.is_nan() || px < 0.0 || py < 0.0 {
            return None;
        }
        let (px, py) = (px as usize, py as usize);
        self.bounds.contains(px, py).then_some((px, py))
    }

    /// Write full white into the agent's pixel. Touches no other pixel.
    pub fn stamp(&self, field: &mut TrailField) {
        debug_assert_eq!(field.bounds(), self.bounds, "agent bounds differ from field");
        let pixel = self.pixel();
        debug_assert!(pixel.is_some(), "agent at ({}, {}) is outside the field", self.x, self.y);
        if let Some((x, y)) = pixel {
            field.set(x, y, TRAIL_WHITE);
        }
    }
}
