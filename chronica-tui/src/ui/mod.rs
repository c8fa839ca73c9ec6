//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames;
//! screens first, then whichever overlay is open above them.

mod detail;
mod lightbox;
mod stats;
mod timeline;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, Overlay, Screen};

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    match state.screen {
        Screen::Timeline => timeline::render(frame, chunks[0], state),
        Screen::Gallery => render_gallery_grid(frame, chunks[0], state),
        Screen::Stats => stats::render(frame, chunks[0], state),
    }

    render_status_bar(frame, chunks[1], state);

    // Overlays, if any, above the screen
    if state.gallery.is_active() {
        lightbox::render(frame, area, state);
    }
    match &state.overlay {
        Overlay::Detail(view) => detail::render(frame, area, view),
        Overlay::Help => render_help_overlay(frame, area),
        Overlay::None => {}
    }
}

/// Gallery grid: every item with its resolved media marker, cursor included
fn render_gallery_grid(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title(" Gallery ").borders(Borders::ALL);

    if state.gallery.is_empty() {
        let empty = Paragraph::new("No media in the reference document")
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = state
        .gallery
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let marker = match libchronica::gallery::media_kind(item) {
                libchronica::gallery::MediaKind::Video(_) => "▶",
                libchronica::gallery::MediaKind::Image(_) => "🖼",
                libchronica::gallery::MediaKind::Placeholder => {
                    libchronica::gallery::PLACEHOLDER_GLYPH
                }
            };
            let selected = index == state.gallery.cursor();
            let style = if selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::styled(format!(" {} {}", marker, item.title), style)
        })
        .collect();

    let list = Paragraph::new(lines).block(block);
    frame.render_widget(list, area);
}

/// Render status bar with the current message and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.screen {
        Screen::Timeline => "↑/↓ select · ←/→ filter · Enter details · r reload",
        Screen::Gallery => "←/→ move · Enter lightbox",
        Screen::Stats => "←/→ generation",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::Gray))];
    if let Some(message) = &state.status {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Cyan)));
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" chronica "));
    frame.render_widget(bar, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q        - Quit"),
        Line::from("  Tab/1-3  - Switch screen"),
        Line::from("  ?        - Toggle help"),
        Line::from("  r        - Reload feed"),
        Line::from(""),
        Line::from("Timeline:"),
        Line::from("  ↑/↓ j/k  - Select event"),
        Line::from("  ←/→ h/l  - Cycle filter"),
        Line::from("  Enter    - Event details"),
        Line::from(""),
        Line::from("Gallery / Stats:"),
        Line::from("  ←/→      - Navigate"),
        Line::from("  Enter    - Open lightbox"),
        Line::from(""),
        Line::from("Press Esc to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
