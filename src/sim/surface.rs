// Drawing surface for the background canvas
//
// The simulation draws through the Surface trait. The production surface is
// a FrameRecorder: it keeps the draw commands of the most recent frame so the
// terminal canvas can replay them during layout, independently of how often
// the simulation itself advances.

use ratatui::style::Color;

/// A position in viewport units (x grows right, y grows down)
pub type Vec2 = (f64, f64);

/// 2D raster target the simulation renders into
pub trait Surface {
    /// Clear the whole surface
    fn clear(&mut self, width: f64, height: f64);

    /// Draw a filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color);

    /// Draw a circle outline
    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Color, line_width: f64);

    /// Draw a straight line segment
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f64);
}

/// One recorded drawing operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    FillCircle {
        center: Vec2,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f64,
        color: Color,
        line_width: f64,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        line_width: f64,
    },
}

/// Surface that records the commands of the last frame
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recent frame, in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of line segments in the recorded frame
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Number of filled circles in the recorded frame
    #[cfg(test)]
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }
}

impl Surface for FrameRecorder {
    fn clear(&mut self, width: f64, height: f64) {
        // Clearing discards everything drawn by the previous frame
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            line_width,
        });
    }
}
