mod answer;
mod game_over;
mod question;
mod start;
mod surface;

use ratatui::{prelude::*, widgets::Block};

pub use surface::{Screen, TerminalSurface};

pub fn render(frame: &mut Frame, surface: &TerminalSurface) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match surface.screen() {
        Screen::Start => start::render(frame, area, surface),
        Screen::Question => question::render(frame, area, surface),
        Screen::Answer => answer::render(frame, area, surface),
        Screen::GameOver => game_over::render(frame, area, surface),
    }
}
