use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::TerminalSurface;

const LOW_TIME_SECONDS: u32 = 5;

pub fn render(frame: &mut Frame, area: Rect, surface: &TerminalSurface) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_status(frame, chunks[0], surface);
    render_prompt(frame, chunks[1], surface.prompt());
    render_choices(frame, chunks[2], surface.choices(), surface.selected());
    if surface.confirm_visible() {
        render_controls(frame, chunks[3]);
    }
}

fn render_status(frame: &mut Frame, area: Rect, surface: &TerminalSurface) {
    let [time_area, progress_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let seconds = surface.seconds_remaining();
    let time_color = if seconds <= LOW_TIME_SECONDS {
        Color::Red
    } else {
        Color::Yellow
    };
    let time = Paragraph::new(format!("Time Remaining: {} seconds", seconds))
        .style(Style::default().fg(time_color).bold());
    frame.render_widget(time, time_area);

    let (number, total) = surface.progress();
    let progress = Paragraph::new(format!("Question {} of {}", number, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(progress, progress_area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .filter(u8::is_ascii_uppercase)
        .map(char::from)
        .unwrap_or('?')
}

fn render_choices(frame: &mut Frame, area: Rect, choices: &[String], selected: Option<usize>) {
    let mut lines: Vec<Line> = Vec::with_capacity(choices.len() * 2);

    for (index, choice) in choices.iter().enumerate() {
        let is_selected = selected == Some(index);
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { "(*)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(choice.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Choices ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k choose  ·  enter confirm  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
