// Certifications section rendering module
//
// Horizontal carousel of certification cards with scroll arrows.

use super::strip::{render_arrows, split_arrows, visible_cards};
use super::{section_block, wrap_text};
use crate::app::config::CERT_CARD_WIDTH;
use crate::app::reveal::RevealId;
use crate::app::{AppState, Section};
use crate::portfolio::Certification;
use crate::theme::{reveal_color, AMBER, MUTED_SLATE, SKY_BLUE, SLATE_WHITE};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Tallest a certification card gets
const CARD_HEIGHT: u16 = 9;

pub fn render_certifications(f: &mut Frame, area: Rect, app: &mut AppState) {
    let block = section_block(Section::Certifications.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let len = app.portfolio.certifications.len();
    if len == 0 {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No certifications yet.",
                Style::default().fg(MUTED_SLATE),
            )),
            inner,
        );
        return;
    }

    let height = inner.height.min(CARD_HEIGHT);
    let row = Rect::new(inner.x, inner.y, inner.width, height);
    let (left, view, right) = split_arrows(row);
    app.certifications.set_viewport(view.width as usize);

    for slot in visible_cards(&app.certifications, view) {
        let id = RevealId::new(Section::Certifications, slot.index);
        app.reveal
            .observe(id, app.certifications.visible_fraction(slot.index));
        let revealed = app.reveal.is_revealed(id);

        if let Some(cert) = app.portfolio.certifications.get(slot.index) {
            render_card(f, slot.area, slot.clip_left, cert, revealed);
        }
    }

    render_arrows(
        f,
        left,
        right,
        app.certifications.can_scroll_left(),
        app.certifications.can_scroll_right(),
    );
}

fn card_lines(cert: &Certification, revealed: bool) -> Vec<Line<'static>> {
    let width = CERT_CARD_WIDTH.saturating_sub(2);
    let color = |c| reveal_color(c, revealed);

    let mut lines: Vec<Line> = wrap_text(&cert.name, width)
        .into_iter()
        .map(|t| {
            Line::from(Span::styled(
                t,
                Style::default().fg(color(AMBER)).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::from(Span::styled(
        cert.issuer.clone(),
        Style::default().fg(color(SLATE_WHITE)),
    )));
    lines.push(Line::from(Span::styled(
        cert.date.clone(),
        Style::default().fg(color(MUTED_SLATE)),
    )));
    if !cert.image.is_empty() {
        lines.push(Line::from(Span::styled(
            cert.image.clone(),
            Style::default().fg(color(SKY_BLUE)),
        )));
    }
    lines
}

fn render_card(f: &mut Frame, area: Rect, clip_left: u16, cert: &Certification, revealed: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let card = Paragraph::new(card_lines(cert, revealed))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(reveal_color(SKY_BLUE, revealed))),
        )
        .scroll((0, clip_left));
    f.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_card_lines() {
        let app = test_app();
        let lines = card_lines(&app.portfolio.certifications[0], true);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].spans[0].content, "Vendor");
    }

    #[test]
    fn test_layout_sets_viewport_and_arrows() {
        let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
        let mut app = test_app();
        app.select_section(Section::Certifications);
        terminal
            .draw(|f| render_certifications(f, f.area(), &mut app))
            .unwrap();

        // 50 - 2 border - 4 arrows
        assert_eq!(app.certifications.viewport(), 44);
        assert!(!app.certifications.can_scroll_left());
        assert!(app.certifications.can_scroll_right());
        assert!(app
            .reveal
            .is_revealed(RevealId::new(Section::Certifications, 0)));
    }
}
