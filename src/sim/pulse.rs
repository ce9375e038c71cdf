// Data pulses traveling between two nodes
//
// A pulse is a straight-line tween between the two node positions captured
// when it was spawned. It does not follow the nodes as they keep moving.

use rand::Rng;

use super::surface::Vec2;

/// Lower bound of the per-frame progress increment
pub const PULSE_SPEED_MIN: f64 = 0.005;

/// Upper bound (exclusive) of the per-frame progress increment
pub const PULSE_SPEED_MAX: f64 = 0.01;

/// Linear interpolation between `start` and `end` at parameter `t`
pub fn interpolate(start: Vec2, end: Vec2, t: f64) -> Vec2 {
    (
        start.0 + (end.0 - start.0) * t,
        start.1 + (end.1 - start.1) * t,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pulse {
    pub start: Vec2,
    pub end: Vec2,
    /// Current position, always interpolate(start, end, progress)
    pub position: Vec2,
    /// Progress gained per frame
    pub speed: f64,
    /// Frames advanced so far; progress is derived from it so repeated
    /// additions cannot drift
    steps: u32,
}

impl Pulse {
    pub fn new(start: Vec2, end: Vec2, speed: f64) -> Self {
        Self {
            start,
            end,
            position: start,
            speed,
            steps: 0,
        }
    }

    /// Draw a speed uniformly from [PULSE_SPEED_MIN, PULSE_SPEED_MAX)
    pub fn random_speed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        rng.gen_range(PULSE_SPEED_MIN..PULSE_SPEED_MAX)
    }

    pub fn progress(&self) -> f64 {
        self.speed * f64::from(self.steps)
    }

    /// Move one frame along the segment
    pub fn advance(&mut self) {
        self.steps = self.steps.saturating_add(1);
        self.position = interpolate(self.start, self.end, self.progress());
    }

    /// Whether the pulse has arrived and must be retired
    pub fn is_expired(&self) -> bool {
        self.progress() >= 1.0
    }
}
