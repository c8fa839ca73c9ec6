//! Gallery lightbox overlay

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use libchronica::gallery::{media_kind, MediaKind, PLACEHOLDER_GLYPH};

use crate::app::AppState;

use super::centered_rect;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(item) = state.gallery.current() else {
        return;
    };

    let popup_area = centered_rect(70, 70, area);

    let media_line = match media_kind(item) {
        MediaKind::Video(src) => Line::from(Span::styled(
            format!("▶ Video — {}", src),
            Style::default().fg(Color::Yellow),
        )),
        MediaKind::Image(src) => Line::from(Span::styled(
            format!("🖼 {}", src),
            Style::default().fg(Color::Cyan),
        )),
        MediaKind::Placeholder => Line::from(Span::raw(PLACEHOLDER_GLYPH)),
    };

    let lines = vec![
        Line::from(""),
        media_line,
        Line::from(""),
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(item.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            state.gallery.position_caption(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "←/→ navigate · Esc close",
            Style::default().fg(Color::Gray),
        )),
    ];

    let lightbox = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Lightbox ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(lightbox, popup_area);
}
