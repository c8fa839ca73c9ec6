//! Stats screen: spec comparison bars, the generation comparison slider and
//! the market-share legend, all built from the reference document.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use libchronica::viz::{pie_slices, spec_charts};

use crate::app::AppState;

const BAR_WIDTH: usize = 24;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(7),
            Constraint::Length(6),
        ])
        .split(area);

    render_spec_charts(frame, chunks[0], state);
    render_slider(frame, chunks[1], state);
    render_market_share(frame, chunks[2], state);
}

fn render_spec_charts(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title(" Console Specs ").borders(Borders::ALL);

    if state.reference.consoles.is_empty() {
        let empty = Paragraph::new("No console specs in the reference document").block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::new();
    for chart in spec_charts(&state.reference.consoles) {
        lines.push(Line::from(Span::styled(
            chart.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for bar in &chart.bars {
            let filled = (bar.fill_pct / 100.0 * BAR_WIDTH as f64).round() as usize;
            lines.push(Line::from(vec![
                Span::raw(format!("{:<16}", bar.label)),
                Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
                Span::raw(" ".repeat(BAR_WIDTH.saturating_sub(filled))),
                Span::styled(format!(" {}", bar.display), Style::default().fg(Color::Gray)),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_slider(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Graphics Evolution ")
        .borders(Borders::ALL);

    let Some(generation) = state.slider.current() else {
        let empty = Paragraph::new("No generations in the reference document").block(block);
        frame.render_widget(empty, area);
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                generation.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", generation.years),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("   {}", state.slider.indicator()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(format!("Resolution: {}", generation.resolution)),
        Line::from(format!("Colors: {}", generation.colors)),
        Line::from(format!("Key Innovation: {}", generation.innovation)),
        Line::from(Span::styled(
            "← Previous Generation · Next Generation →",
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_market_share(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title(" Market Share ").borders(Borders::ALL);

    let slices = pie_slices(&state.reference.market_share);
    if slices.is_empty() {
        let empty = Paragraph::new("No market share data in the reference document").block(block);
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = slices
        .iter()
        .map(|slice| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(Color::Magenta)),
                Span::raw(format!("{}: {:.1}%", slice.label, slice.pct)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
