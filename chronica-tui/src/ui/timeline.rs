//! Timeline screen
//!
//! The filtered event list with era dividers, selection highlight and the
//! reveal-on-scroll dimming. Items that have never entered the viewport
//! render dim until they do; the effect never reverts.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use libchronica::render::{format::format_category, timeline_rows, TimelineRow};

use crate::app::{AppState, FeedPhase};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    match &state.feed {
        FeedPhase::Loading => render_notice(frame, area, "Loading timeline…", Color::Yellow),
        FeedPhase::Failed(message) => render_notice(
            frame,
            area,
            &format!("Error loading timeline data: {}\nPress r to retry.", message),
            Color::Red,
        ),
        FeedPhase::Ready => render_timeline(frame, area, state),
    }
}

fn render_notice(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let notice = Paragraph::new(message.to_string())
        .block(Block::default().title(" Timeline ").borders(Borders::ALL))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(notice, area);
}

fn render_timeline(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    render_filter_bar(frame, chunks[0], state);

    let rows = timeline_rows(&state.timeline.store);
    let mut item_index = 0usize;

    let lines: Vec<Line> = rows
        .iter()
        .map(|row| match row {
            TimelineRow::Divider { label, .. } => Line::from(Span::styled(
                format!("── {} ──", label),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            TimelineRow::Item(event) => {
                let selected = item_index == state.timeline.selected;
                item_index += 1;

                let mut style = Style::default();
                if !state.timeline.is_revealed(event.id) {
                    style = style.add_modifier(Modifier::DIM);
                }
                if selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                Line::from(vec![
                    Span::raw(if selected { "▶ " } else { "  " }),
                    Span::styled(format!("{}  ", event.year), Style::default().fg(Color::Yellow)),
                    Span::raw(event.title.clone()),
                    Span::styled(
                        format!(
                            "  [{} · {}]",
                            format_category(&event.category),
                            event.manufacturer
                        ),
                        Style::default().fg(Color::Gray),
                    ),
                ])
                .style(style)
            }
        })
        .collect();

    let list = Paragraph::new(lines)
        .block(Block::default().title(" Timeline ").borders(Borders::ALL))
        .scroll((state.timeline.scroll_offset as u16, 0));

    frame.render_widget(list, chunks[1]);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let ring = state.timeline.store.filter_ring();
    let position = format!("{}/{}", state.timeline.filter_index + 1, ring.len().max(1));

    let bar = Line::from(vec![
        Span::styled("Filter: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.timeline.store.filter().token(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({})", position), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("  {} visible", state.timeline.visible_count()),
            Style::default().fg(Color::Gray),
        ),
    ]);

    frame.render_widget(Paragraph::new(bar), area);
}
