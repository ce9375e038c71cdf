// Horizontal card strip layout
//
// Maps a Carousel's content-space card spans onto screen rectangles and
// draws the scroll arrows on either side.

use crate::app::carousel::Carousel;
use crate::theme::{AMBER, DISABLED_GRAY};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// Columns reserved for each arrow
pub const ARROW_WIDTH: u16 = 2;

/// A card (partially) inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub index: usize,
    /// Screen area of the visible part
    pub area: Rect,
    /// Columns of the card cut off on the left
    pub clip_left: u16,
}

/// Split an area into left arrow, viewport and right arrow
pub fn split_arrows(area: Rect) -> (Rect, Rect, Rect) {
    let arrow = ARROW_WIDTH.min(area.width / 2);
    let left = Rect::new(area.x, area.y, arrow, area.height);
    let right = Rect::new(
        area.x + area.width - arrow,
        area.y,
        arrow,
        area.height,
    );
    let middle = Rect::new(
        area.x + arrow,
        area.y,
        area.width.saturating_sub(arrow * 2),
        area.height,
    );
    (left, middle, right)
}

/// Cards of `carousel` that intersect the viewport, positioned in `viewport`
pub fn visible_cards(carousel: &Carousel, viewport: Rect) -> Vec<CardSlot> {
    let view_start = carousel.offset();
    let view_end = view_start + viewport.width as usize;

    (0..carousel.len())
        .filter_map(|index| {
            let (start, end) = carousel.card_span(index);
            if end <= view_start || start >= view_end {
                return None;
            }
            let vis_start = start.max(view_start);
            let vis_end = end.min(view_end);
            Some(CardSlot {
                index,
                area: Rect::new(
                    viewport.x + (vis_start - view_start) as u16,
                    viewport.y,
                    (vis_end - vis_start) as u16,
                    viewport.height,
                ),
                clip_left: (vis_start - start) as u16,
            })
        })
        .collect()
}

/// Draw the ◀ ▶ arrows, dimmed when that direction cannot scroll
pub fn render_arrows(f: &mut Frame, left: Rect, right: Rect, can_left: bool, can_right: bool) {
    let style = |enabled: bool| {
        if enabled {
            Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DISABLED_GRAY)
        }
    };
    let mid = |r: Rect| Rect::new(r.x, r.y + r.height / 2, r.width, r.height.min(1));

    f.render_widget(Paragraph::new(Span::styled("◀", style(can_left))), mid(left));
    f.render_widget(
        Paragraph::new(Span::styled("▶", style(can_right))),
        mid(right),
    );
}
