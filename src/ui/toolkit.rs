// Toolkit section rendering module
//
// One card per skill category, listing each skill with its logo path.

use super::{render_scrolled, section_block, TextLine, Tone};
use crate::app::{AppState, Section};
use ratatui::{layout::Rect, Frame};

pub fn render_toolkit(f: &mut Frame, area: Rect, app: &mut AppState) {
    let block = section_block(Section::Toolkit.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = toolkit_rows(app);
    render_scrolled(f, inner, app, Section::Toolkit, rows);
}

fn toolkit_rows(app: &AppState) -> Vec<TextLine> {
    let mut rows = Vec::new();
    for (i, category) in app.portfolio.skills.iter().enumerate() {
        if i > 0 {
            rows.push(TextLine::blank());
        }
        rows.push(TextLine::new(Tone::Title, category.title.clone()).in_card(i));
        for skill in &category.items {
            rows.push(TextLine::new(Tone::Body, format!("  • {}", skill.name)).in_card(i));
            rows.push(TextLine::new(Tone::Muted, format!("    {}", skill.image())).in_card(i));
        }
    }
    rows
}
