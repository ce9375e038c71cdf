// Status Bar rendering module
//
// Renders the bottom status bar with keyboard shortcuts, toggle indicators
// and the background loop readout.

use crate::app::config::DEFAULT_FRAME_MS;
use crate::app::{AppState, Section};
use crate::sim::scheduler::LoopState;
use crate::theme::{frame_rate_color, AMBER, DEEP_NAVY, MUTED_SLATE, SIGNAL_GREEN, SKY_BLUE, SLATE_WHITE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    // Section-specific arrow hint
    let arrow_hint = match app.section {
        Section::Projects => "Project | ",
        Section::Journey | Section::Certifications => "Scroll | ",
        Section::About | Section::Toolkit => "",
    };

    // Indicators are always shown; hints fill the rest
    let indicators = build_toggle_indicators(app);
    let indicator_width: usize = indicators.iter().map(|s| s.width()).sum();
    let available_width = (area.width.saturating_sub(4) as usize).saturating_sub(indicator_width + 1);

    // Define all hints with priority levels
    struct Hint {
        priority: u8,
        key: &'static str,
        desc: &'static str,
        color: Color,
    }

    let mut hints = vec![
        Hint {
            priority: 1,
            key: "Q:",
            desc: "Quit | ",
            color: Color::Red,
        },
        Hint {
            priority: 1,
            key: "Tab:",
            desc: "Section | ",
            color: AMBER,
        },
        Hint {
            priority: 2,
            key: "↑↓:",
            desc: "Scroll | ",
            color: AMBER,
        },
        Hint {
            priority: 2,
            key: "A:",
            desc: "Anim | ",
            color: AMBER,
        },
        Hint {
            priority: 3,
            key: "+/-:",
            desc: "FPS | ",
            color: AMBER,
        },
        Hint {
            priority: 3,
            key: "R:",
            desc: "Regen | ",
            color: AMBER,
        },
    ];
    if !arrow_hint.is_empty() {
        hints.push(Hint {
            priority: 1,
            key: "←→:",
            desc: arrow_hint,
            color: AMBER,
        });
    }
    match app.section {
        Section::Journey => hints.push(Hint {
            priority: 2,
            key: "Enter:",
            desc: "Details | ",
            color: AMBER,
        }),
        Section::Projects => hints.push(Hint {
            priority: 2,
            key: "[]:",
            desc: "Image | ",
            color: AMBER,
        }),
        _ => {}
    }

    let mut spans = vec![Span::styled(" ◆ ", Style::default().fg(AMBER))];
    let mut current_length = 3;

    // Process hints by priority
    for priority in 1..=3 {
        for hint in hints.iter().filter(|h| h.priority == priority) {
            let hint_length = hint.key.chars().count() + hint.desc.len();
            if current_length + hint_length <= available_width {
                spans.push(Span::styled(
                    hint.key,
                    Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(hint.desc, Style::default().fg(SLATE_WHITE)));
                current_length += hint_length;
            }
        }
    }

    spans.push(Span::raw(" "));
    spans.extend(indicators);

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(SKY_BLUE))
                .style(Style::default().bg(DEEP_NAVY)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}

/// Build the indicator spans: [A:ON/OFF] [RUNNING] [30fps] [P:.. N:.. ~:..]
pub fn build_toggle_indicators(app: &AppState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let bracket = Style::default().fg(MUTED_SLATE);

    // Animation toggle [A:ON/OFF]
    let enabled = app.background_settings.animations_enabled;
    spans.push(Span::styled("[A:", bracket));
    spans.push(Span::styled(
        if enabled { "ON" } else { "OFF" },
        Style::default()
            .fg(if enabled { SIGNAL_GREEN } else { MUTED_SLATE })
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("] ", bracket));

    let Some(bg) = app.background.as_ref() else {
        spans.push(Span::styled("[BG:OFF]", bracket));
        return spans;
    };

    // Loop state
    let state_color = match bg.state() {
        LoopState::Running => SIGNAL_GREEN,
        LoopState::Paused => MUTED_SLATE,
    };
    spans.push(Span::styled("[", bracket));
    spans.push(Span::styled(
        bg.state().label(),
        Style::default().fg(state_color).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("] ", bracket));

    // Frame rate, highlighted right after a change
    let fps_color = frame_rate_color(
        app.frame_config.frame_ms,
        DEFAULT_FRAME_MS,
        app.frame_config.recently_changed(Instant::now()),
    );
    spans.push(Span::styled("[", bracket));
    spans.push(Span::styled(
        format!("{}fps", app.frame_config.fps()),
        Style::default().fg(fps_color).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("] ", bracket));

    // Population counters
    let sim = bg.simulation();
    spans.push(Span::styled(
        format!(
            "[P:{} N:{} ~:{}]",
            sim.points().len(),
            sim.node_count(),
            sim.pulses().len()
        ),
        bracket,
    ));

    spans
}
