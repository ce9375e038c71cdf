// Background network simulation
//
// Owns the drifting point population, the node index (every 5th point) and
// the active data pulses. One Simulation value is the whole context: the
// render pass updates it and draws into any Surface.

pub mod point;
pub mod pulse;
pub mod scheduler;
pub mod surface;

use rand::{rngs::StdRng, Rng, SeedableRng};
use ratatui::style::Color;

use point::Point;
use pulse::Pulse;
use surface::{Surface, Vec2};

// ============================================================================
// Constants
// ============================================================================

/// Surface width (in viewport units) per point in the population
pub const UNITS_PER_POINT: f64 = 5.0;

/// Every Nth created point is a node
pub const NODE_SAMPLING_RATIO: usize = 5;

/// Nodes closer than this are joined by a line
pub const CONNECTION_DISTANCE: f64 = 250.0;

/// Chance per frame of spawning a pulse
pub const PULSE_SPAWN_PROBABILITY: f64 = 0.05;

/// Radius of the traveling pulse dot
pub const PULSE_DOT_RADIUS: f64 = 2.5;

pub const CONNECTION_LINE_WIDTH: f64 = 0.9;
pub const RING_LINE_WIDTH: f64 = 1.0;

// Canvas colors, pre-blended against the dark terminal background since the
// terminal has no alpha channel
/// rgba(30, 64, 175, 0.8)
pub const POINT_FILL_COLOR: Color = Color::Rgb(26, 54, 145);
/// rgba(217, 119, 6, 1.0)
pub const NODE_RING_COLOR: Color = Color::Rgb(217, 119, 6);
/// rgba(30, 58, 138, 0.4)
pub const CONNECTION_COLOR: Color = Color::Rgb(18, 32, 72);
/// #D97706
pub const PULSE_FILL_COLOR: Color = Color::Rgb(217, 119, 6);

/// Number of points created for a surface `width` units wide
pub fn population_size(width: f64) -> usize {
    if width.is_finite() && width > 0.0 {
        (width / UNITS_PER_POINT).floor() as usize
    } else {
        0
    }
}

/// Whether the point created at `index` is a node
pub fn is_node_index(index: usize) -> bool {
    index % NODE_SAMPLING_RATIO == 0
}

fn distance(a: Vec2, b: Vec2) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Explicit simulation context
pub struct Simulation {
    width: f64,
    height: f64,
    points: Vec<Point>,
    /// Indices into `points` of the node subset, ascending
    nodes: Vec<usize>,
    pulses: Vec<Pulse>,
    rng: StdRng,
    frames: u64,
}

impl Simulation {
    /// Create a simulation and build its initial population
    pub fn new(width: f64, height: f64, rng: StdRng) -> Self {
        let mut sim = Self {
            width,
            height,
            points: Vec::new(),
            nodes: Vec::new(),
            pulses: Vec::new(),
            rng,
            frames: 0,
        };
        sim.reinitialize();
        sim
    }

    /// Deterministic simulation for a given seed
    pub fn with_seed(width: f64, height: f64, seed: u64) -> Self {
        Self::new(width, height, StdRng::seed_from_u64(seed))
    }

    /// Simulation seeded from the OS entropy source
    pub fn from_entropy(width: f64, height: f64) -> Self {
        Self::new(width, height, StdRng::from_entropy())
    }

    /// Rebuild the population for the current surface width
    ///
    /// Points, node index and pulses are built into fresh collections and
    /// swapped in together, so a frame never observes a partial population.
    pub fn reinitialize(&mut self) {
        let count = population_size(self.width);
        let mut points = Vec::with_capacity(count);
        let mut nodes = Vec::with_capacity(count.div_ceil(NODE_SAMPLING_RATIO));

        for i in 0..count {
            let is_node = is_node_index(i);
            points.push(Point::random(&mut self.rng, self.width, self.height, is_node));
            if is_node {
                nodes.push(i);
            }
        }

        self.points = points;
        self.nodes = nodes;
        self.pulses = Vec::new();

        tracing::debug!(
            points = self.points.len(),
            nodes = self.nodes.len(),
            width = self.width,
            "Background population initialized"
        );
    }

    /// Re-measure the surface; the population is kept as is
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Drop every point and pulse
    pub fn dispose(&mut self) {
        self.points.clear();
        self.nodes.clear();
        self.pulses.clear();
    }

    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[cfg(test)]
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Indices of the node points, in creation order
    pub fn node_indices(&self) -> &[usize] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    /// Frames rendered since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance every point one step
    pub fn update_points(&mut self) {
        let (width, height) = (self.width, self.height);
        for point in &mut self.points {
            point.update(width, height);
        }
    }

    /// Pairs of point indices (a < b) of nodes within CONNECTION_DISTANCE
    ///
    /// Each unordered pair appears once and a node is never paired with
    /// itself. O(n^2) over the node index.
    pub fn connections(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, &a) in self.nodes.iter().enumerate() {
            let pa = self.points[a].position();
            for &b in &self.nodes[i + 1..] {
                if distance(pa, self.points[b].position()) < CONNECTION_DISTANCE {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }

    /// Spawn a pulse between two nodes given their positions in the node index
    ///
    /// Returns false (and spawns nothing) when both picks are the same node
    /// or either pick is out of range.
    pub fn spawn_between(&mut self, from_node: usize, to_node: usize) -> bool {
        if from_node == to_node {
            return false;
        }
        let (Some(&a), Some(&b)) = (self.nodes.get(from_node), self.nodes.get(to_node)) else {
            return false;
        };

        let speed = Pulse::random_speed(&mut self.rng);
        let start = self.points[a].position();
        let end = self.points[b].position();
        self.pulses.push(Pulse::new(start, end, speed));
        true
    }

    /// Roll for a new pulse this frame
    ///
    /// Needs at least two nodes. Both endpoints are drawn with replacement;
    /// picking the same node twice spawns nothing.
    pub fn maybe_spawn_pulse(&mut self) -> bool {
        if self.nodes.len() < 2 || !self.rng.gen_bool(PULSE_SPAWN_PROBABILITY) {
            return false;
        }
        let from = self.rng.gen_range(0..self.nodes.len());
        let to = self.rng.gen_range(0..self.nodes.len());
        self.spawn_between(from, to)
    }

    #[cfg(test)]
    pub fn push_pulse(&mut self, pulse: Pulse) {
        self.pulses.push(pulse);
    }

    /// Advance all pulses and retire the ones that arrived
    ///
    /// Returns how many pulses were removed.
    pub fn advance_pulses(&mut self) -> usize {
        for pulse in &mut self.pulses {
            pulse.advance();
        }
        let before = self.pulses.len();
        self.pulses.retain(|p| !p.is_expired());
        before - self.pulses.len()
    }

    /// Simulate and draw one frame
    ///
    /// Order: clear, node connections, update + draw points, spawn, then
    /// advance, prune and draw pulses. A pulse that arrives this frame is
    /// removed before drawing.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);

        for (a, b) in self.connections() {
            surface.line(
                self.points[a].position(),
                self.points[b].position(),
                CONNECTION_COLOR,
                CONNECTION_LINE_WIDTH,
            );
        }

        self.update_points();
        for point in &self.points {
            point.draw(surface);
        }

        self.maybe_spawn_pulse();
        let arrived = self.advance_pulses();
        if arrived > 0 {
            tracing::trace!(arrived, active = self.pulses.len(), "Pulses retired");
        }
        for pulse in &self.pulses {
            surface.fill_circle(pulse.position, PULSE_DOT_RADIUS, PULSE_FILL_COLOR);
        }

        self.frames += 1;
    }
}
