//! Terminal view model driven by the quiz engine.

use crate::port::{Outcome, PresentationPort};

/// Which pane is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Question,
    Answer,
    GameOver,
}

/// Holds everything the terminal draws. The engine writes to it through
/// [`PresentationPort`]; the key handler moves the choice cursor.
#[derive(Debug)]
pub struct TerminalSurface {
    screen: Screen,
    number: usize,
    total: usize,
    prompt: String,
    choices: Vec<String>,
    cursor: Option<usize>,
    seconds_remaining: u32,
    outcome: Option<Outcome>,
    explanation: String,
    score: (u32, u32),
    start_visible: bool,
    confirm_visible: bool,
    games_played: usize,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            screen: Screen::Start,
            number: 0,
            total: 0,
            prompt: String::new(),
            choices: Vec::new(),
            cursor: None,
            seconds_remaining: 0,
            outcome: None,
            explanation: String::new(),
            score: (0, 0),
            start_visible: false,
            confirm_visible: false,
            games_played: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn progress(&self) -> (usize, usize) {
        (self.number, self.total)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The highlighted choice; `None` until the player moves the cursor.
    pub fn selected(&self) -> Option<usize> {
        self.cursor
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn score(&self) -> (u32, u32) {
        self.score
    }

    pub fn start_visible(&self) -> bool {
        self.start_visible
    }

    pub fn confirm_visible(&self) -> bool {
        self.confirm_visible
    }

    /// "Start" before the first game, "Play Again" after.
    pub fn start_label(&self) -> &'static str {
        if self.games_played == 0 {
            "Start"
        } else {
            "Play Again"
        }
    }

    pub fn select_next(&mut self) {
        let len = self.choices.len();
        if len == 0 || !self.confirm_visible {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(index) => (index + 1) % len,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        let len = self.choices.len();
        if len == 0 || !self.confirm_visible {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        });
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationPort for TerminalSurface {
    fn show_quiz_chrome(&mut self) {
        self.start_visible = false;
        self.score = (0, 0);
        self.outcome = None;
    }

    fn render_progress(&mut self, number: usize, total: usize) {
        self.number = number;
        self.total = total;
    }

    fn render_question(&mut self, prompt: &str, choices: &[String]) {
        self.screen = Screen::Question;
        self.prompt = prompt.to_string();
        self.choices = choices.to_vec();
        self.cursor = None;
        self.outcome = None;
        self.explanation.clear();
    }

    fn render_countdown(&mut self, seconds_remaining: u32) {
        self.seconds_remaining = seconds_remaining;
    }

    fn render_outcome(&mut self, outcome: Outcome, explanation: &str) {
        self.screen = Screen::Answer;
        self.outcome = Some(outcome);
        self.explanation = explanation.to_string();
    }

    fn render_game_over(&mut self, correct: u32, incorrect: u32) {
        self.screen = Screen::GameOver;
        self.score = (correct, incorrect);
        self.games_played += 1;
    }

    fn show_start_control(&mut self) {
        self.start_visible = true;
    }

    fn show_confirm_control(&mut self) {
        self.confirm_visible = true;
    }

    fn hide_confirm_control(&mut self) {
        self.confirm_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<String> {
        ["a", "b", "c"].iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_cursor_starts_empty_and_wraps() {
        let mut surface = TerminalSurface::new();
        surface.render_question("q", &choices());
        surface.show_confirm_control();
        assert_eq!(surface.selected(), None);

        surface.select_previous();
        assert_eq!(surface.selected(), Some(2));
        surface.select_next();
        assert_eq!(surface.selected(), Some(0));
        surface.select_previous();
        assert_eq!(surface.selected(), Some(2));

        surface.render_question("next", &choices());
        assert_eq!(surface.selected(), None);
    }

    #[test]
    fn test_cursor_frozen_without_confirm_control() {
        let mut surface = TerminalSurface::new();
        surface.render_question("q", &choices());
        surface.select_next();
        assert_eq!(surface.selected(), None);
    }

    #[test]
    fn test_screens_follow_engine_calls() {
        let mut surface = TerminalSurface::new();
        surface.show_start_control();
        assert_eq!(surface.screen(), Screen::Start);
        assert_eq!(surface.start_label(), "Start");

        surface.show_quiz_chrome();
        assert!(!surface.start_visible());
        surface.render_question("q", &choices());
        assert_eq!(surface.screen(), Screen::Question);

        surface.render_outcome(Outcome::Correct, "because");
        assert_eq!(surface.screen(), Screen::Answer);
        assert_eq!(surface.explanation(), "because");

        surface.render_game_over(3, 7);
        surface.show_start_control();
        assert_eq!(surface.screen(), Screen::GameOver);
        assert_eq!(surface.score(), (3, 7));
        assert_eq!(surface.start_label(), "Play Again");
    }
}
