// Background canvas rendering module
//
// Replays the last recorded simulation frame onto a full-screen Braille
// canvas. The simulation's y axis grows downward; the canvas y axis grows
// upward, so every y coordinate is flipped against the surface height.

use crate::app::AppState;
use crate::sim::surface::{DrawCommand, Vec2};
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points},
    Frame,
};

/// Filled circles at or below this radius are drawn as a single dot
const DOT_RADIUS: f64 = 4.0;

pub fn render_background(f: &mut Frame, area: Rect, app: &AppState) {
    if !app.background_settings.animations_enabled {
        return;
    }
    let Some(bg) = app.background.as_ref() else {
        return;
    };

    let (width, height) = bg.simulation().dimensions();
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    let commands = bg.frame().commands();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            for command in commands {
                replay(ctx, command, height);
            }
        });

    f.render_widget(canvas, area);
}

/// Map a surface position to canvas coordinates
pub fn to_canvas(position: Vec2, height: f64) -> (f64, f64) {
    (position.0, height - position.1)
}

fn replay(ctx: &mut Context<'_>, command: &DrawCommand, height: f64) {
    match *command {
        // The canvas starts blank every draw
        DrawCommand::Clear { .. } => {}
        DrawCommand::Line { from, to, color, .. } => {
            let (x1, y1) = to_canvas(from, height);
            let (x2, y2) = to_canvas(to, height);
            ctx.draw(&CanvasLine {
                x1,
                y1,
                x2,
                y2,
                color,
            });
        }
        DrawCommand::FillCircle {
            center,
            radius,
            color,
        } => {
            let (x, y) = to_canvas(center, height);
            draw_dot(ctx, x, y, color);
            if radius > DOT_RADIUS {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius,
                    color,
                });
            }
        }
        DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            ..
        } => {
            let (x, y) = to_canvas(center, height);
            ctx.draw(&Circle {
                x,
                y,
                radius,
                color,
            });
        }
    }
}

fn draw_dot(ctx: &mut Context<'_>, x: f64, y: f64, color: Color) {
    ctx.draw(&Points {
        coords: &[(x, y)],
        color,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_canvas_flips_y() {
        assert_eq!(to_canvas((10.0, 0.0), 100.0), (10.0, 100.0));
        assert_eq!(to_canvas((10.0, 100.0), 100.0), (10.0, 0.0));
        assert_eq!(to_canvas((3.0, 25.0), 100.0), (3.0, 75.0));
    }
}
