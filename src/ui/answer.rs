use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::TerminalSurface;

pub fn render(frame: &mut Frame, area: Rect, surface: &TerminalSurface) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let (number, total) = surface.progress();
    let progress = Paragraph::new(format!("Question {} of {}", number, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(progress, chunks[0]);

    if let Some(outcome) = surface.outcome() {
        let color = if outcome.is_correct() {
            Color::Green
        } else {
            Color::Red
        };
        let result = Paragraph::new(outcome.message())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).bold());
        frame.render_widget(result, chunks[1]);
    }

    let explanation = Paragraph::new(surface.explanation())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Answer ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(explanation, chunks[2]);

    let hint = Paragraph::new("next question shortly  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(hint, chunks[3]);
}
