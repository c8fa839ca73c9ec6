//! Event detail overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use libchronica::render::DetailView;

use super::centered_rect;

pub fn render(frame: &mut Frame, area: Rect, view: &DetailView) {
    let popup_area = centered_rect(70, 60, area);

    let mut lines = vec![
        Line::from(Span::styled(
            view.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(view.year.to_string(), Style::default().fg(Color::Yellow)),
            Span::raw("  "),
            Span::styled(
                view.manufacturer.clone(),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(""),
        Line::from(view.description.clone()),
        Line::from(""),
        Line::from(format!("Console/Platform: {}", view.console)),
        Line::from(format!("Type: {}", view.category_label)),
    ];

    if let Some(link) = &view.console_link {
        lines.push(Line::from(Span::styled(
            format!("Console page: {}", link),
            Style::default().fg(Color::Blue),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc/x to close",
        Style::default().fg(Color::Gray),
    )));

    let detail = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Event ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(detail, popup_area);
}
