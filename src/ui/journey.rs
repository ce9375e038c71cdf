// Journey section rendering module
//
// Renders the career timeline as a horizontal carousel: cards alternate
// above and below a timeline axis, with scroll arrows on both sides and a
// detail modal for the selected stop.

use super::strip::{render_arrows, split_arrows, visible_cards};
use super::{centered_rect, section_block, wrap_text};
use crate::app::config::JOURNEY_CARD_WIDTH;
use crate::app::reveal::RevealId;
use crate::app::{AppState, Section};
use crate::portfolio::JourneyItem;
use crate::theme::{reveal_color, AMBER, DEEP_NAVY, MUTED_SLATE, SKY_BLUE, SLATE_WHITE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_journey(f: &mut Frame, area: Rect, app: &mut AppState) {
    let block = section_block(Section::Journey.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let len = app.portfolio.journey.len();
    if len == 0 {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No journey entries yet.",
                Style::default().fg(MUTED_SLATE),
            )),
            inner,
        );
        return;
    }

    let (left, view, right) = split_arrows(inner);
    app.journey.set_viewport(view.width as usize);

    // Even cards above the axis, odd cards below
    let card_height = view.height.saturating_sub(1) / 2;
    let axis_y = view.y + card_height;
    let top = Rect::new(view.x, view.y, view.width, card_height);
    let bottom = Rect::new(
        view.x,
        axis_y + 1,
        view.width,
        view.height.saturating_sub(card_height + 1),
    );

    if view.height > 0 {
        render_axis(f, Rect::new(view.x, axis_y, view.width, 1), app);
    }

    for slot in visible_cards(&app.journey, view) {
        let id = RevealId::new(Section::Journey, slot.index);
        app.reveal
            .observe(id, app.journey.visible_fraction(slot.index));
        let revealed = app.reveal.is_revealed(id);

        let row = if slot.index % 2 == 0 { top } else { bottom };
        let card_area = Rect::new(slot.area.x, row.y, slot.area.width, row.height);
        if let Some(item) = app.portfolio.journey.get(slot.index) {
            render_card(f, card_area, slot.clip_left, item, revealed);
        }
    }

    render_arrows(
        f,
        left,
        right,
        app.journey.can_scroll_left(),
        app.journey.can_scroll_right(),
    );

    if let Some(item) = app.journey_modal.and_then(|i| app.portfolio.journey.get(i)) {
        render_modal(f, area, item);
    }
}

/// Axis line with a marker under the center of each card
fn render_axis(f: &mut Frame, area: Rect, app: &AppState) {
    let line = axis_line(app, area.width as usize);
    f.render_widget(
        Paragraph::new(Span::styled(line, Style::default().fg(MUTED_SLATE))),
        area,
    );
}

fn axis_line(app: &AppState, width: usize) -> String {
    let mut cells = vec!['─'; width];
    let offset = app.journey.offset();
    for index in 0..app.portfolio.journey.len() {
        let (start, end) = app.journey.card_span(index);
        let center = start + (end - start) / 2;
        if center >= offset && center - offset < width {
            cells[center - offset] = '●';
        }
    }
    cells.into_iter().collect()
}

/// Lines of a timeline card
fn card_lines(item: &JourneyItem, revealed: bool) -> Vec<Line<'static>> {
    let width = JOURNEY_CARD_WIDTH.saturating_sub(2);
    let color = |c| reveal_color(c, revealed);

    let mut lines: Vec<Line> = wrap_text(&item.title, width)
        .into_iter()
        .map(|t| {
            Line::from(Span::styled(
                t,
                Style::default().fg(color(AMBER)).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::from(Span::styled(
        item.date.clone(),
        Style::default().fg(color(MUTED_SLATE)),
    )));
    if !item.company_or_empty().is_empty() {
        lines.push(Line::from(Span::styled(
            item.company_or_empty().to_string(),
            Style::default().fg(color(SKY_BLUE)),
        )));
    }
    lines.extend(wrap_text(&item.description, width).into_iter().map(|t| {
        Line::from(Span::styled(t, Style::default().fg(color(SLATE_WHITE))))
    }));
    lines
}

fn render_card(f: &mut Frame, area: Rect, clip_left: u16, item: &JourneyItem, revealed: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let card = Paragraph::new(card_lines(item, revealed))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(reveal_color(SKY_BLUE, revealed))),
        )
        .scroll((0, clip_left));
    f.render_widget(card, area);
}

/// Detail modal over the section panel
fn render_modal(f: &mut Frame, area: Rect, item: &JourneyItem) {
    let modal = centered_rect(70, 70, area);
    if modal.width < 3 || modal.height < 3 {
        return;
    }
    let width = modal.width.saturating_sub(4) as usize;

    let mut lines = vec![Line::from(Span::styled(
        item.date.clone(),
        Style::default().fg(MUTED_SLATE),
    ))];
    if !item.company_or_empty().is_empty() {
        lines.push(Line::from(Span::styled(
            item.company_or_empty().to_string(),
            Style::default().fg(SKY_BLUE).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::raw(""));
    lines.extend(
        wrap_text(&item.description, width)
            .into_iter()
            .map(|t| Line::from(Span::styled(t, Style::default().fg(SLATE_WHITE)))),
    );
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Esc / Enter: close",
        Style::default().fg(MUTED_SLATE),
    )));

    f.render_widget(Clear, modal);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(AMBER))
                .title(Span::styled(
                    format!(" {} ", item.title),
                    Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(DEEP_NAVY)),
        )
        .alignment(Alignment::Left);
    f.render_widget(paragraph, modal);
}
