// Application configuration types
//
// This module contains configuration constants and structs for:
// - Frame pacing of the background animation
// - Background visual settings
// - Terminal-cell to viewport-unit scaling
// - Carousel geometry

use std::time::{Duration, Instant};

// ============================================================================
// Constants
// ============================================================================

/// Default frame interval of the background animation (~30 fps)
pub const DEFAULT_FRAME_MS: u64 = 33;

/// Shortest allowed frame interval in milliseconds
pub const MIN_FRAME_MS: u64 = 16;

/// Longest allowed frame interval in milliseconds
pub const MAX_FRAME_MS: u64 = 200;

/// Frame interval adjustment step in milliseconds
pub const FRAME_STEP_MS: u64 = 16;

/// Longest the event loop waits for input before redrawing the UI
pub const UI_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Duration to highlight a recently changed frame interval
pub const CHANGE_HIGHLIGHT_DURATION: Duration = Duration::from_millis(500);

/// Viewport units per terminal column
pub const UNITS_PER_COLUMN: f64 = 8.0;

/// Viewport units per terminal row (cells are about twice as tall as wide)
pub const UNITS_PER_ROW: f64 = 16.0;

/// Gap between carousel cards in cells
pub const CARD_GAP: usize = 2;

/// Width of a journey timeline card in cells
pub const JOURNEY_CARD_WIDTH: usize = 28;

/// Width of a certification card in cells
pub const CERT_CARD_WIDTH: usize = 30;

/// Cells the project tab strip moves per arrow press
pub const TAB_SCROLL_STEP: usize = 20;

/// Visible fraction at which a card counts as revealed
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Vertical scroll (lines) past which the header turns compact
pub const HEADER_SCROLL_THRESHOLD: u16 = 2;

/// Convert a terminal size in cells to viewport units
pub fn viewport_units(columns: u16, rows: u16) -> (f64, f64) {
    (
        f64::from(columns) * UNITS_PER_COLUMN,
        f64::from(rows) * UNITS_PER_ROW,
    )
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Visual settings for the background canvas
#[derive(Debug, Clone)]
pub struct BackgroundSettings {
    /// Show and animate the background (toggle with 'a' key)
    pub animations_enabled: bool,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            animations_enabled: true,
        }
    }
}

/// Frame pacing configuration
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Frame interval in milliseconds (MIN_FRAME_MS..=MAX_FRAME_MS)
    pub frame_ms: u64,

    /// Timestamp of last interval change (for visual feedback)
    pub last_change: Option<Instant>,
}

impl FrameConfig {
    pub fn new(frame_ms: u64) -> Self {
        Self {
            frame_ms: frame_ms.clamp(MIN_FRAME_MS, MAX_FRAME_MS),
            last_change: None,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// Approximate frames per second for display
    pub fn fps(&self) -> u64 {
        1000 / self.frame_ms.max(1)
    }

    /// Whether the interval changed within CHANGE_HIGHLIGHT_DURATION
    pub fn recently_changed(&self, now: Instant) -> bool {
        self.last_change
            .map(|t| now.duration_since(t) < CHANGE_HIGHLIGHT_DURATION)
            .unwrap_or(false)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_config_clamps() {
        assert_eq!(FrameConfig::new(1).frame_ms, MIN_FRAME_MS);
        assert_eq!(FrameConfig::new(10_000).frame_ms, MAX_FRAME_MS);
        assert_eq!(FrameConfig::default().frame_ms, DEFAULT_FRAME_MS);
    }

    #[test]
    fn test_fps() {
        assert_eq!(FrameConfig::new(33).fps(), 30);
        assert_eq!(FrameConfig::new(16).fps(), 62);
    }

    #[test]
    fn test_recently_changed() {
        let now = Instant::now();
        let mut cfg = FrameConfig::default();
        assert!(!cfg.recently_changed(now));
        cfg.last_change = Some(now);
        assert!(cfg.recently_changed(now));
        assert!(!cfg.recently_changed(now + CHANGE_HIGHLIGHT_DURATION));
    }

    #[test]
    fn test_viewport_units() {
        assert_eq!(viewport_units(100, 40), (800.0, 640.0));
        assert_eq!(viewport_units(0, 0), (0.0, 0.0));
    }
}
