// Point model for the background simulation
//
// A point drifts at constant speed and bounces off the surface edges.
// Nodes additionally carry a pulse ring that breathes between the point's
// radius and twice that radius.

use rand::Rng;

use super::surface::{Surface, Vec2};
use super::{NODE_RING_COLOR, POINT_FILL_COLOR, RING_LINE_WIDTH};

/// Growth per frame of a node's pulse ring
pub const RING_GROWTH_RATE: f64 = 0.1;

/// Maximum absolute speed on each axis (units per frame)
const MAX_AXIS_SPEED: f64 = 0.25;

/// Pulse ring of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseRing {
    /// Current ring radius
    pub size: f64,
    /// Change per frame
    pub rate: f64,
    /// true while expanding, false while contracting
    pub growing: bool,
}

impl PulseRing {
    fn new(base_radius: f64) -> Self {
        Self {
            size: base_radius,
            rate: RING_GROWTH_RATE,
            growing: true,
        }
    }

    /// Advance the ring one frame, bouncing between base and 2x base
    fn advance(&mut self, base_radius: f64) {
        let max = base_radius * 2.0;
        if self.growing {
            self.size = (self.size + self.rate).min(max);
            if self.size >= max {
                self.growing = false;
            }
        } else {
            self.size = (self.size - self.rate).max(base_radius);
            if self.size <= base_radius {
                self.growing = true;
            }
        }
    }
}

/// A moving element of the background
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    /// Fixed for the lifetime of the point
    pub radius: f64,
    /// Present only for nodes
    pub ring: Option<PulseRing>,
}

impl Point {
    /// Create a point at an explicit position
    pub fn new(position: Vec2, speed: Vec2, radius: f64, is_node: bool) -> Self {
        Self {
            x: position.0,
            y: position.1,
            speed_x: speed.0,
            speed_y: speed.1,
            radius,
            ring: is_node.then(|| PulseRing::new(radius)),
        }
    }

    /// Create a point at a random position with random speed and size
    ///
    /// Nodes are larger (radius 2..6) than plain points (radius 1..3).
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, is_node: bool) -> Self {
        let x = rng.gen::<f64>() * width;
        let y = rng.gen::<f64>() * height;
        let radius = if is_node {
            rng.gen::<f64>() * 4.0 + 2.0
        } else {
            rng.gen::<f64>() * 2.0 + 1.0
        };
        let speed_x = (rng.gen::<f64>() - 0.5) * 2.0 * MAX_AXIS_SPEED;
        let speed_y = (rng.gen::<f64>() - 0.5) * 2.0 * MAX_AXIS_SPEED;

        Self::new((x, y), (speed_x, speed_y), radius, is_node)
    }

    pub fn is_node(&self) -> bool {
        self.ring.is_some()
    }

    pub fn position(&self) -> Vec2 {
        (self.x, self.y)
    }

    /// Advance one frame inside a `width` x `height` surface
    ///
    /// The speed component flips once the position leaves the bounds on that
    /// axis; the position is never clamped, so a point may overshoot by at
    /// most one step (or sit outside after a shrinking resize) until its own
    /// motion brings it back.
    pub fn update(&mut self, width: f64, height: f64) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.x < 0.0 || self.x > width {
            self.speed_x = -self.speed_x;
        }
        if self.y < 0.0 || self.y > height {
            self.speed_y = -self.speed_y;
        }

        let radius = self.radius;
        if let Some(ring) = self.ring.as_mut() {
            ring.advance(radius);
        }
    }

    /// Draw the point, plus its ring for nodes
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.position(), self.radius, POINT_FILL_COLOR);
        if let Some(ring) = &self.ring {
            surface.stroke_circle(self.position(), ring.size, NODE_RING_COLOR, RING_LINE_WIDTH);
        }
    }
}
