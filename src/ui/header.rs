// Header rendering module
//
// Renders the top header: owner name, tagline and the section navigation.
// Once the section is scrolled down a little the header collapses to a
// single line.

use crate::app::{AppState, Section};
use crate::theme::{AMBER, DEEP_NAVY, MUTED_SLATE, SKY_BLUE, SLATE_WHITE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const FULL_HEIGHT: u16 = 5;
const COMPACT_HEIGHT: u16 = 3;

pub fn header_height(app: &AppState) -> u16 {
    if app.header_compact() {
        COMPACT_HEIGHT
    } else {
        FULL_HEIGHT
    }
}

pub fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let name = Span::styled(
        app.portfolio.display_name().to_string(),
        Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
    );

    let lines = if app.header_compact() {
        let mut spans = vec![name, Span::raw("   ")];
        spans.extend(nav_spans(app.section));
        vec![Line::from(spans)]
    } else {
        vec![
            Line::from(name),
            Line::from(Span::styled(
                app.portfolio.tagline.clone(),
                Style::default().fg(MUTED_SLATE),
            )),
            Line::from(nav_spans(app.section)),
        ]
    };

    let border_type = if app.header_compact() {
        BorderType::Plain
    } else {
        BorderType::Double
    };

    let header = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(SKY_BLUE))
                .style(Style::default().bg(DEEP_NAVY)),
        )
        .alignment(Alignment::Left);

    f.render_widget(header, area);
}

/// "1 About  2 Journey ..." with the current section highlighted
fn nav_spans(current: Section) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == current {
            Style::default()
                .fg(DEEP_NAVY)
                .bg(AMBER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SLATE_WHITE)
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, section.title()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    spans
}
