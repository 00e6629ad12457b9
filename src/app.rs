use crossterm::event::KeyCode;
use tracing::info;

use crate::QuizError;
use crate::engine::QuizEngine;
use crate::timer::{TimerDriver, TimerEvent};
use crate::ui::{Screen, TerminalSurface};

/// Routes key presses and timer events into a quiz engine drawing on a
/// terminal surface.
pub struct App<D> {
    engine: QuizEngine<TerminalSurface, D>,
    should_quit: bool,
}

impl<D: TimerDriver> App<D> {
    pub fn new(engine: QuizEngine<TerminalSurface, D>) -> Self {
        Self {
            engine,
            should_quit: false,
        }
    }

    pub fn surface(&self) -> &TerminalSurface {
        self.engine.port()
    }

    pub fn engine(&self) -> &QuizEngine<TerminalSurface, D> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut QuizEngine<TerminalSurface, D> {
        &mut self.engine
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_timer(&mut self, event: TimerEvent) -> Result<(), QuizError> {
        self.engine.handle_timer(event)
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), QuizError> {
        if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
            info!(session = %self.engine.id(), "quit requested");
            self.should_quit = true;
            return Ok(());
        }

        match self.surface().screen() {
            Screen::Start | Screen::GameOver => self.handle_start_input(key),
            Screen::Question => {
                self.handle_question_input(key);
                Ok(())
            }
            Screen::Answer => Ok(()),
        }
    }

    fn handle_start_input(&mut self, key: KeyCode) -> Result<(), QuizError> {
        if key == KeyCode::Enter && self.surface().start_visible() {
            self.engine.on_start_requested()?;
        }
        Ok(())
    }

    fn handle_question_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.engine.port_mut().select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.engine.port_mut().select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.surface().confirm_visible() {
                    let selected = self.surface().selected();
                    self.engine.on_confirm_requested(selected);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::QuizConfig;
    use crate::data::QuestionBank;
    use crate::models::Phase;
    use crate::port::Outcome;
    use crate::timer::ManualTimers;

    fn app() -> App<ManualTimers> {
        App::new(QuizEngine::new(
            QuestionBank::classic_rock(),
            QuizConfig::default(),
            TerminalSurface::new(),
            ManualTimers::new(),
        ))
    }

    #[test]
    fn test_enter_starts_the_quiz() {
        let mut app = app();
        assert_eq!(app.surface().screen(), Screen::Start);

        app.handle_key(KeyCode::Char('j')).unwrap();
        assert_eq!(app.engine().phase(), Phase::NotStarted);

        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.surface().screen(), Screen::Question);
        assert_eq!(app.surface().progress(), (1, 10));
        assert_eq!(app.surface().seconds_remaining(), 30);
    }

    #[test]
    fn test_confirm_sends_highlighted_choice() {
        let mut app = app();
        app.handle_key(KeyCode::Enter).unwrap();

        // First question's answer is the second choice.
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Char('j')).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(app.surface().screen(), Screen::Answer);
        assert_eq!(app.surface().outcome(), Some(Outcome::Correct));
        assert_eq!(app.engine().session().correct_count(), 1);

        // Confirming again during the reveal does nothing.
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.engine().session().correct_count(), 1);
        assert_eq!(app.engine().session().incorrect_count(), 0);
    }

    #[test]
    fn test_confirm_without_choice_is_incorrect() {
        let mut app = app();
        app.handle_key(KeyCode::Enter).unwrap();
        app.handle_key(KeyCode::Char(' ')).unwrap();

        assert_eq!(app.surface().outcome(), Some(Outcome::Incorrect));
        assert_eq!(app.engine().session().incorrect_count(), 1);
    }

    #[test]
    fn test_full_run_and_play_again() {
        let mut app = app();
        app.handle_key(KeyCode::Enter).unwrap();

        for _ in 0..10 {
            app.handle_key(KeyCode::Enter).unwrap();
            app.engine_mut().advance(Duration::from_secs(5)).unwrap();
        }

        assert_eq!(app.surface().screen(), Screen::GameOver);
        assert_eq!(app.surface().score(), (0, 10));
        assert_eq!(app.surface().start_label(), "Play Again");

        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.surface().screen(), Screen::Question);
        assert_eq!(app.surface().progress(), (1, 10));
    }

    #[test]
    fn test_quit_from_any_screen() {
        let mut app = app();
        app.handle_key(KeyCode::Enter).unwrap();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q')).unwrap();
        assert!(app.should_quit());
    }
}
