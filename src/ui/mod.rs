// UI rendering module
//
// This module contains all UI rendering components for netfolio.
// The main draw() function paints the animated background first and then
// layers the header, the current section panel and the status bar on top.

mod about;
mod background;
mod certifications;
mod header;
mod journey;
mod projects;
mod status_bar;
mod strip;
mod toolkit;

use crate::app::reveal::{vertical_fraction, RevealId};
use crate::app::{AppState, Section};
use crate::theme::{reveal_color, AMBER, DEEP_NAVY, MUTED_SLATE, SIGNAL_RED, SKY_BLUE, SLATE_WHITE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use about::render_about;
use background::render_background;
use certifications::render_certifications;
use header::{header_height, render_header};
use journey::render_journey;
use projects::render_projects;
use status_bar::render_status_bar;
use toolkit::render_toolkit;

/// Widest the section panel grows
const MAX_PANEL_WIDTH: u16 = 110;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let size = f.area();

    // Background fills the whole screen, everything else sits on top
    render_background(f, size, app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height(app)), // Header
            Constraint::Min(0),                     // Section panel
            Constraint::Length(3),                  // Status bar
        ])
        .split(size);

    render_header(f, chunks[0], app);

    let panel = panel_area(chunks[1]);
    f.render_widget(Clear, panel);

    if let Some(message) = app.load_error.as_deref() {
        render_load_error(f, panel, message);
    } else {
        match app.section {
            Section::About => render_about(f, panel, app),
            Section::Journey => render_journey(f, panel, app),
            Section::Projects => render_projects(f, panel, app),
            Section::Toolkit => render_toolkit(f, panel, app),
            Section::Certifications => render_certifications(f, panel, app),
        }
    }

    render_status_bar(f, chunks[2], app);
}

/// Horizontally centered panel area, leaving the background visible at
/// the sides on wide terminals
fn panel_area(body: Rect) -> Rect {
    let width = body.width.saturating_sub(4).min(MAX_PANEL_WIDTH);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(body);
    area
}

/// Bordered block used by every section panel
pub(crate) fn section_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SKY_BLUE))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(DEEP_NAVY))
}

fn render_load_error(f: &mut Frame, area: Rect, message: &str) {
    let inner_height = area.height.saturating_sub(2);
    let mut lines = vec![Line::raw(""); (inner_height / 2) as usize];
    lines.push(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(SIGNAL_RED).add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines)
        .block(section_block("Portfolio"))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Rectangle of `percent_x` by `percent_y` centered in `area`
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// Word-wrap `text` to `width` display columns
///
/// Newlines start a new paragraph; words wider than `width` are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width + ch_width > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
            }
        }

        lines.push(current);
    }

    // Drop trailing empty paragraphs
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Text role of a line in a scrolled panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    Heading,
    Title,
    Body,
    Muted,
    Accent,
}

impl Tone {
    fn style(self, revealed: bool) -> Style {
        let (color, bold) = match self {
            Tone::Heading => (SKY_BLUE, true),
            Tone::Title => (AMBER, true),
            Tone::Body => (SLATE_WHITE, false),
            Tone::Muted => (MUTED_SLATE, false),
            Tone::Accent => (SKY_BLUE, false),
        };
        let style = Style::default().fg(reveal_color(color, revealed));
        if bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

/// One line of a vertically scrolled panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextLine {
    /// Revealable card this line belongs to
    pub card: Option<usize>,
    pub tone: Tone,
    pub text: String,
}

impl TextLine {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            card: None,
            tone,
            text: text.into(),
        }
    }

    pub fn blank() -> Self {
        Self::new(Tone::Body, "")
    }

    pub fn in_card(mut self, card: usize) -> Self {
        self.card = Some(card);
        self
    }
}

/// Push `text` wrapped to `width` as lines of the given tone
pub(crate) fn push_wrapped(
    rows: &mut Vec<TextLine>,
    text: &str,
    width: usize,
    tone: Tone,
    card: Option<usize>,
) {
    for line in wrap_text(text, width) {
        rows.push(TextLine {
            card,
            tone,
            text: line,
        });
    }
}

/// Render `rows` into `inner` with the section's vertical scroll applied
///
/// Records the scroll extent and reports each card's visible fraction to
/// the reveal tracker before styling, so a card fades in on the frame it
/// first comes into view.
pub(crate) fn render_scrolled(
    f: &mut Frame,
    inner: Rect,
    app: &mut AppState,
    section: Section,
    rows: Vec<TextLine>,
) {
    let total = u16::try_from(rows.len()).unwrap_or(u16::MAX);
    app.set_vertical_extent(total, inner.height);
    let scroll = app.scroll_y as usize;
    let viewport = inner.height as usize;

    // (first line, line count) per card
    let mut spans: Vec<(usize, usize, usize)> = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let Some(card) = row.card else { continue };
        match spans.last_mut() {
            Some((c, _, height)) if *c == card => *height += 1,
            _ => spans.push((card, i, 1)),
        }
    }
    for &(card, start, height) in &spans {
        let fraction = vertical_fraction(start, height, scroll, viewport);
        app.reveal.observe(RevealId::new(section, card), fraction);
    }

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|row| {
            let revealed = row
                .card
                .map(|c| app.reveal.is_revealed(RevealId::new(section, c)))
                .unwrap_or(true);
            Line::from(Span::styled(row.text, row.tone.style(revealed)))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).scroll((app.scroll_y, 0)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
        assert_eq!(wrap_text("", 10), Vec::<String>::new());
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn test_render_scrolled_reveals_visible_cards() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        let mut app = test_app();
        let mut rows = Vec::new();
        for card in 0..4 {
            rows.push(TextLine::new(Tone::Title, format!("Card {}", card)).in_card(card));
            rows.push(TextLine::new(Tone::Body, "text").in_card(card));
            rows.push(TextLine::blank());
        }
        terminal
            .draw(|f| render_scrolled(f, f.area(), &mut app, Section::Toolkit, rows.clone()))
            .unwrap();

        // 5 visible lines: cards 0 and 1 fully in view
        assert!(app.reveal.is_revealed(RevealId::new(Section::Toolkit, 0)));
        assert!(app.reveal.is_revealed(RevealId::new(Section::Toolkit, 1)));
        assert!(!app.reveal.is_revealed(RevealId::new(Section::Toolkit, 3)));
        assert_eq!(app.max_scroll_y, 7);

        for _ in 0..10 {
            app.scroll_down();
        }
        terminal
            .draw(|f| render_scrolled(f, f.area(), &mut app, Section::Toolkit, rows.clone()))
            .unwrap();
        assert!(app.reveal.is_revealed(RevealId::new(Section::Toolkit, 3)));
    }

    #[test]
    fn test_centered_rect() {
        let r = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(r, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_panel_area_is_capped() {
        let area = panel_area(Rect::new(0, 5, 200, 30));
        assert_eq!(area.width, MAX_PANEL_WIDTH);
        assert_eq!(area.x, 45);
        assert_eq!(panel_area(Rect::new(0, 0, 60, 10)).width, 56);
    }

    #[test]
    fn test_draw_every_section() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = test_app();
        for section in Section::ALL {
            app.select_section(section);
            terminal.draw(|f| draw(f, &mut app)).unwrap();
        }
        // Carousels learned their viewport during layout
        assert!(app.certifications.viewport() > 0);
    }

    #[test]
    fn test_draw_journey_modal() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = test_app();
        app.select_section(Section::Journey);
        app.activate();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Role 0"));
    }

    #[test]
    fn test_draw_load_error() {
        let err = crate::portfolio::Portfolio::load("/missing/data.json").unwrap_err();
        let mut app = AppState::new(Err(err), crate::app::AppOptions::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Failed to load portfolio data"));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        let mut app = test_app();
        for section in Section::ALL {
            app.select_section(section);
            terminal.draw(|f| draw(f, &mut app)).unwrap();
        }
    }
}
