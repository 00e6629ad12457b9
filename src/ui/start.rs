use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::TerminalSurface;

pub fn render(frame: &mut Frame, area: Rect, surface: &TerminalSurface) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "CLASSIC ROCK TRIVIA",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Multiple choice · Beat the clock".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(""),
    ];

    if surface.start_visible() {
        content.push(Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )));
        content.push(Line::from(Span::styled(
            format!("to {}", surface.start_label().to_lowercase()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
