// Frame scheduling and the background redraw loop
//
// The terminal has no display-refresh callback, so FrameScheduler plays that
// role: a frame is requested for a due time, fires at most once when polled
// after that time, and can be cancelled through its handle. BackgroundLoop
// ties the scheduler to a Simulation and implements the Running/Paused
// lifecycle driven by visibility changes.

use std::time::{Duration, Instant};

use super::surface::FrameRecorder;
use super::Simulation;

/// Opaque handle of a pending frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Single-slot frame request queue
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameHandle, Instant)>,
}

impl FrameScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 0,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the frame interval; an already pending request keeps its due time
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Request a frame one interval after `now`
    ///
    /// There is only one redraw loop, so a new request replaces any pending one.
    pub fn request_frame(&mut self, now: Instant) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some((handle, now + self.interval));
        handle
    }

    /// Cancel a pending request; returns whether it was still pending
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        match self.pending {
            Some((pending, _)) if pending == handle => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Fire the pending request if it is due; each request fires at most once
    pub fn poll(&mut self, now: Instant) -> Option<FrameHandle> {
        match self.pending {
            Some((handle, due)) if due <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    /// Time left before the pending request is due (zero if overdue)
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, due)| due.saturating_duration_since(now))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Lifecycle state of the redraw loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Paused,
}

impl LoopState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
        }
    }
}

/// The background redraw loop: simulation + scheduler + last recorded frame
pub struct BackgroundLoop {
    sim: Simulation,
    scheduler: FrameScheduler,
    state: LoopState,
    pending: Option<FrameHandle>,
    frame: FrameRecorder,
}

impl BackgroundLoop {
    /// Start the loop: render the first frame now and schedule the next one
    pub fn start(sim: Simulation, interval: Duration, now: Instant) -> Self {
        let mut bg = Self {
            sim,
            scheduler: FrameScheduler::new(interval),
            state: LoopState::Running,
            pending: None,
            frame: FrameRecorder::new(),
        };
        bg.run_frame(now);
        bg
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Draw commands of the latest rendered frame
    pub fn frame(&self) -> &FrameRecorder {
        &self.frame
    }

    pub fn frame_interval(&self) -> Duration {
        self.scheduler.interval()
    }

    pub fn set_frame_interval(&mut self, interval: Duration) {
        self.scheduler.set_interval(interval);
    }

    /// Run the frame callback if its request is due
    ///
    /// Returns true when a frame was rendered.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.scheduler.poll(now) {
            Some(handle) if Some(handle) == self.pending => {
                self.run_frame(now);
                true
            }
            _ => false,
        }
    }

    fn run_frame(&mut self, now: Instant) {
        self.sim.render_frame(&mut self.frame);
        self.pending = Some(self.scheduler.request_frame(now));
    }

    /// React to a visibility change
    ///
    /// Hidden cancels the pending frame and pauses; visible requests a new
    /// frame and resumes with the population and pulses untouched. Repeated
    /// notifications in the same direction change nothing.
    pub fn set_hidden(&mut self, hidden: bool, now: Instant) {
        match (hidden, self.state) {
            (true, LoopState::Running) => {
                if let Some(handle) = self.pending.take() {
                    self.scheduler.cancel(handle);
                }
                self.state = LoopState::Paused;
                tracing::debug!(frames = self.sim.frames(), "Background loop paused");
            }
            (false, LoopState::Paused) => {
                self.pending = Some(self.scheduler.request_frame(now));
                self.state = LoopState::Running;
                tracing::debug!(frames = self.sim.frames(), "Background loop resumed");
            }
            _ => {}
        }
    }

    /// Re-measure the drawing surface without touching the population
    pub fn resize(&mut self, width: f64, height: f64) {
        self.sim.resize(width, height);
    }

    /// Rebuild the population for the current surface size
    pub fn reinitialize(&mut self) {
        self.sim.reinitialize();
        tracing::info!(
            points = self.sim.points().len(),
            nodes = self.sim.node_count(),
            "Background population rebuilt"
        );
    }

    /// Time until the next frame is due, None while paused
    pub fn time_until_next_frame(&self, now: Instant) -> Option<Duration> {
        if self.state == LoopState::Paused {
            return None;
        }
        self.scheduler.time_until_due(now)
    }
}

impl Drop for BackgroundLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.sim.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_request_fires_once_when_due() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new(FRAME);
        let h = s.request_frame(t0);

        assert_eq!(s.poll(t0), None);
        assert_eq!(s.poll(t0 + FRAME), Some(h));
        assert_eq!(s.poll(t0 + FRAME * 2), None);
        assert!(!s.is_pending());
    }

    #[test]
    fn test_cancel_stops_request() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new(FRAME);
        let h = s.request_frame(t0);

        assert!(s.cancel(h));
        assert!(!s.cancel(h));
        assert_eq!(s.poll(t0 + FRAME * 10), None);
    }

    #[test]
    fn test_cancel_stale_handle_keeps_newer_request() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new(FRAME);
        let old = s.request_frame(t0);
        let new = s.request_frame(t0);
        assert_ne!(old, new);

        assert!(!s.cancel(old));
        assert_eq!(s.poll(t0 + FRAME), Some(new));
    }

    #[test]
    fn test_time_until_due() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new(FRAME);
        assert_eq!(s.time_until_due(t0), None);
        s.request_frame(t0);
        assert_eq!(s.time_until_due(t0), Some(FRAME));
        assert_eq!(s.time_until_due(t0 + FRAME * 3), Some(Duration::ZERO));
    }

    #[test]
    fn test_loop_starts_running_with_first_frame() {
        let t0 = Instant::now();
        let bg = BackgroundLoop::start(Simulation::with_seed(500.0, 300.0, 1), FRAME, t0);
        assert_eq!(bg.state(), LoopState::Running);
        assert_eq!(bg.simulation().frames(), 1);
        assert!(!bg.frame().commands().is_empty());
        assert_eq!(bg.time_until_next_frame(t0), Some(FRAME));
    }

    #[test]
    fn test_tick_renders_and_reschedules() {
        let t0 = Instant::now();
        let mut bg = BackgroundLoop::start(Simulation::with_seed(500.0, 300.0, 1), FRAME, t0);

        assert!(!bg.tick(t0));
        assert!(bg.tick(t0 + FRAME));
        assert_eq!(bg.simulation().frames(), 2);
        // Same instant again: the new request is not due yet
        assert!(!bg.tick(t0 + FRAME));
        assert!(bg.tick(t0 + FRAME * 2));
        assert_eq!(bg.simulation().frames(), 3);
    }

    #[test]
    fn test_hidden_pauses_and_visible_resumes() {
        let t0 = Instant::now();
        let mut bg = BackgroundLoop::start(Simulation::with_seed(500.0, 300.0, 1), FRAME, t0);
        let snapshot = bg.simulation().points().to_vec();

        bg.set_hidden(true, t0);
        assert_eq!(bg.state(), LoopState::Paused);
        assert_eq!(bg.time_until_next_frame(t0), None);
        for i in 1..20 {
            assert!(!bg.tick(t0 + FRAME * i));
        }
        assert_eq!(bg.simulation().frames(), 1);
        assert_eq!(bg.simulation().points(), snapshot.as_slice());

        let t1 = t0 + FRAME * 20;
        bg.set_hidden(false, t1);
        assert_eq!(bg.state(), LoopState::Running);
        assert!(bg.tick(t1 + FRAME));
        assert_eq!(bg.simulation().frames(), 2);
    }

    #[test]
    fn test_visibility_notifications_are_idempotent() {
        let t0 = Instant::now();
        let mut bg = BackgroundLoop::start(Simulation::with_seed(500.0, 300.0, 1), FRAME, t0);

        // Visible while running: no extra request, no double loop
        bg.set_hidden(false, t0 + FRAME / 2);
        assert!(bg.tick(t0 + FRAME));
        assert_eq!(bg.simulation().frames(), 2);

        bg.set_hidden(true, t0 + FRAME);
        bg.set_hidden(true, t0 + FRAME);
        assert_eq!(bg.state(), LoopState::Paused);

        bg.set_hidden(false, t0 + FRAME * 2);
        bg.set_hidden(false, t0 + FRAME * 2);
        assert!(bg.tick(t0 + FRAME * 3));
        assert!(!bg.tick(t0 + FRAME * 3));
        assert_eq!(bg.simulation().frames(), 3);
    }

    #[test]
    fn test_resize_does_not_pause_or_reinitialize() {
        let t0 = Instant::now();
        let mut bg = BackgroundLoop::start(Simulation::with_seed(500.0, 300.0, 1), FRAME, t0);
        bg.resize(2000.0, 900.0);
        assert_eq!(bg.state(), LoopState::Running);
        assert_eq!(bg.simulation().points().len(), 100);
        assert_eq!(bg.simulation().dimensions(), (2000.0, 900.0));

        bg.reinitialize();
        assert_eq!(bg.simulation().points().len(), 400);
    }
}
