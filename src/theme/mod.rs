// Theme module - Color palette and color helpers
//
// Deep navy panels with amber accents, matching the background canvas
// (blue points, amber node rings and pulses).

use ratatui::style::Color;

/// Panel background
/// RGB: (15, 23, 42)
pub const DEEP_NAVY: Color = Color::Rgb(15, 23, 42);
const DEEP_NAVY_RGB: (u8, u8, u8) = (15, 23, 42);

/// Accent color - titles, active tab, enabled arrows
/// RGB: (217, 119, 6)
pub const AMBER: Color = Color::Rgb(217, 119, 6);

/// Secondary accent - borders, tags
/// RGB: (96, 165, 250)
pub const SKY_BLUE: Color = Color::Rgb(96, 165, 250);

/// Body text
/// RGB: (226, 232, 240)
pub const SLATE_WHITE: Color = Color::Rgb(226, 232, 240);

/// Dates, secondary text
/// RGB: (148, 163, 184)
pub const MUTED_SLATE: Color = Color::Rgb(148, 163, 184);

/// Disabled controls
/// RGB: (71, 85, 105)
pub const DISABLED_GRAY: Color = Color::Rgb(71, 85, 105);

/// Errors, very fast frame rates
/// RGB: (248, 113, 113)
pub const SIGNAL_RED: Color = Color::Rgb(248, 113, 113);

/// Healthy state indicator
/// RGB: (74, 222, 128)
pub const SIGNAL_GREEN: Color = Color::Rgb(74, 222, 128);

/// Interpolate between two RGB colors based on a ratio (0.0 ~ 1.0)
///
/// # Arguments
/// * `color1` - Starting color as (r, g, b) tuple
/// * `color2` - Ending color as (r, g, b) tuple
/// * `ratio` - Interpolation ratio (0.0 = color1, 1.0 = color2)
pub fn interpolate_color(color1: (u8, u8, u8), color2: (u8, u8, u8), ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * ratio).round() as u8;
    Color::Rgb(
        channel(color1.0, color2.0),
        channel(color1.1, color2.1),
        channel(color1.2, color2.2),
    )
}

/// RGB channels of a palette color (non-RGB colors map to white)
pub fn rgb_of(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (255, 255, 255),
    }
}

/// Text color of a card that has or has not been revealed yet
///
/// Unrevealed cards are drawn most of the way faded into the panel.
pub fn reveal_color(color: Color, revealed: bool) -> Color {
    if revealed {
        color
    } else {
        interpolate_color(rgb_of(color), DEEP_NAVY_RGB, 0.7)
    }
}

/// Color of the frame interval readout relative to the default
///
/// Green at or above the default interval, amber when faster, red when
/// the interval is less than half the default. Recently changed values are
/// brightened.
pub fn frame_rate_color(frame_ms: u64, default_ms: u64, recently_changed: bool) -> Color {
    let base = if frame_ms >= default_ms {
        SIGNAL_GREEN
    } else if ((default_ms - frame_ms) as f32 / default_ms as f32) > 0.5 {
        SIGNAL_RED
    } else {
        AMBER
    };

    match (recently_changed, base) {
        (true, Color::Rgb(r, g, b)) => {
            let bright = |c: u8| (c as f32 * 1.2).min(255.0) as u8;
            Color::Rgb(bright(r), bright(g), bright(b))
        }
        _ => base,
    }
}
