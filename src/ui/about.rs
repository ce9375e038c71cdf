// About section rendering module
//
// Renders the free-text introduction followed by the education entries.
// Each education entry fades in when it first scrolls into view.

use super::{push_wrapped, render_scrolled, section_block, TextLine, Tone};
use crate::app::{AppState, Section};
use ratatui::{layout::Rect, Frame};

pub fn render_about(f: &mut Frame, area: Rect, app: &mut AppState) {
    let block = section_block(Section::About.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = about_rows(app, inner.width as usize);
    render_scrolled(f, inner, app, Section::About, rows);
}

fn about_rows(app: &AppState, width: usize) -> Vec<TextLine> {
    let mut rows = Vec::new();
    push_wrapped(&mut rows, &app.portfolio.about, width, Tone::Body, None);

    if app.portfolio.education.is_empty() {
        return rows;
    }

    rows.push(TextLine::blank());
    rows.push(TextLine::new(Tone::Heading, "Education"));
    for (i, edu) in app.portfolio.education.iter().enumerate() {
        rows.push(TextLine::blank());
        push_wrapped(&mut rows, &edu.degree, width, Tone::Title, Some(i));
        let place = match (edu.institution.is_empty(), edu.date.is_empty()) {
            (false, false) => format!("{} · {}", edu.institution, edu.date),
            (false, true) => edu.institution.clone(),
            (true, _) => edu.date.clone(),
        };
        if !place.is_empty() {
            rows.push(TextLine::new(Tone::Muted, place).in_card(i));
        }
        push_wrapped(&mut rows, &edu.description, width, Tone::Body, Some(i));
    }
    rows
}
