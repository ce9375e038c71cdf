// Projects section rendering module
//
// A scrollable strip of project tabs on top and the selected project's
// image carousel and details below.

use super::strip::{render_arrows, split_arrows};
use super::{push_wrapped, render_scrolled, section_block, TextLine, Tone};
use crate::app::{project_tab_label, AppState, Section};
use crate::theme::{AMBER, DEEP_NAVY, SLATE_WHITE};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_projects(f: &mut Frame, area: Rect, app: &mut AppState) {
    let block = section_block(Section::Projects.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.portfolio.projects.is_empty() {
        let rows = vec![TextLine::new(Tone::Muted, "No projects yet.")];
        render_scrolled(f, inner, app, Section::Projects, rows);
        return;
    }
    if inner.height == 0 {
        return;
    }

    let tabs_row = Rect::new(inner.x, inner.y, inner.width, 1);
    render_tab_strip(f, tabs_row, app);

    let body = Rect::new(
        inner.x,
        inner.y + inner.height.min(2),
        inner.width,
        inner.height.saturating_sub(2),
    );
    let rows = project_rows(app, body.width as usize);
    render_scrolled(f, body, app, Section::Projects, rows);
}

fn render_tab_strip(f: &mut Frame, area: Rect, app: &mut AppState) {
    let (left, view, right) = split_arrows(area);
    app.project_tabs.set_viewport(view.width as usize);

    let mut spans = Vec::new();
    for (i, project) in app.portfolio.projects.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if i == app.selected_project {
            Style::default()
                .fg(DEEP_NAVY)
                .bg(AMBER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SLATE_WHITE)
        };
        spans.push(Span::styled(project_tab_label(&project.name), style));
    }

    let offset = u16::try_from(app.project_tabs.offset()).unwrap_or(u16::MAX);
    f.render_widget(Paragraph::new(Line::from(spans)).scroll((0, offset)), view);
    render_arrows(
        f,
        left,
        right,
        app.project_tabs.can_scroll_left(),
        app.project_tabs.can_scroll_right(),
    );
}

/// Details of the selected project; the whole block is one revealable card
fn project_rows(app: &AppState, width: usize) -> Vec<TextLine> {
    let index = app.selected_project;
    let Some(project) = app.portfolio.projects.get(index) else {
        return Vec::new();
    };
    let card = Some(index);
    let mut rows = Vec::new();

    push_wrapped(&mut rows, &project.name, width, Tone::Title, card);

    let images = &app.project_images;
    match project.images.get(images.current()) {
        Some(path) => {
            rows.push(
                TextLine::new(
                    Tone::Muted,
                    format!("Image {}/{}  ([ / ] to browse)", images.current() + 1, images.len()),
                )
                .in_card(index),
            );
            rows.push(TextLine::new(Tone::Accent, path.clone()).in_card(index));
        }
        None => rows.push(TextLine::new(Tone::Muted, "No images").in_card(index)),
    }

    if !project.description.is_empty() {
        rows.push(TextLine::blank().in_card(index));
        push_wrapped(&mut rows, &project.description, width, Tone::Body, card);
    }

    let mut facts = Vec::new();
    if let Some(role) = project.role.as_deref() {
        facts.push(format!("Role: {}", role));
    }
    if let Some(year) = project.year.as_deref() {
        facts.push(format!("Year: {}", year));
    }
    if !project.tech.is_empty() {
        facts.push(format!("Tech: {}", project.tech.join(", ")));
    }
    if !project.tags.is_empty() {
        let tags: Vec<String> = project.tags.iter().map(|t| format!("#{}", t)).collect();
        facts.push(tags.join(" "));
    }
    if !facts.is_empty() {
        rows.push(TextLine::blank().in_card(index));
        for fact in facts {
            push_wrapped(&mut rows, &fact, width, Tone::Accent, card);
        }
    }

    if !project.details.is_empty() {
        rows.push(TextLine::blank().in_card(index));
        for detail in &project.details {
            push_wrapped(&mut rows, &format!("• {}", detail), width, Tone::Body, card);
        }
    }

    if let Some(link) = project.link.as_deref() {
        rows.push(TextLine::blank().in_card(index));
        rows.push(TextLine::new(Tone::Heading, format!("→ {}", link)).in_card(index));
    }
    rows
}
