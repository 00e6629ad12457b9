use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::TerminalSurface;

pub fn render(frame: &mut Frame, area: Rect, surface: &TerminalSurface) {
    let (correct, incorrect) = surface.score();
    let percentage = calculate_percentage(correct, correct + incorrect);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("You got {} answers correct", correct),
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("You got {} answers incorrect", incorrect),
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{:.0}%", percentage),
            Style::default().fg(grade_color(percentage)).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    if surface.start_visible() {
        let controls = Paragraph::new(format!(
            "enter {}  ·  q quit",
            surface.start_label().to_lowercase()
        ))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
        frame.render_widget(controls, chunks[2]);
    }
}

fn calculate_percentage(score: u32, total: u32) -> f64 {
    if total > 0 {
        (f64::from(score) / f64::from(total)) * 100.0
    } else {
        0.0
    }
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}
