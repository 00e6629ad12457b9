//! # trivia-quiz
//!
//! A timed multiple-choice trivia quiz for the terminal.
//!
//! The heart of the crate is [`QuizEngine`], a phase-guarded state machine
//! that walks a [`QuestionBank`] front to back, runs a countdown per
//! question, scores answers and reveals each explanation before moving on.
//! It draws through a [`PresentationPort`] and takes time from a
//! [`TimerDriver`], so it runs the same against the terminal UI and against
//! [`ManualTimers`] in tests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_quiz::{Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // The built-in classic rock questions, 30 seconds per answer
//!     Quiz::classic_rock().run()
//! }
//! ```

mod app;
mod config;
mod data;
mod engine;
mod models;
mod port;
pub mod terminal;
pub mod timer;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::info;

pub use app::App;
pub use config::{
    ConfigError, DEFAULT_ANSWER_WINDOW_SECS, DEFAULT_REVEAL_DELAY, DEFAULT_TICK_INTERVAL,
    QuizConfig,
};
pub use data::{LoadError, QuestionBank, load_questions_from_json, parse_questions};
pub use engine::{InvalidTransition, QuizEngine};
pub use models::{ChoiceError, ChoiceSet, Phase, Question, QuestionKind, QuizSession};
pub use port::{Outcome, PresentationPort};
pub use timer::{ManualTimers, TimerDriver, TimerEvent, TokioTimers};
pub use ui::{Screen, TerminalSurface};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("invalid quiz timing: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("{0} questions are not implemented")]
    NotImplemented(QuestionKind),
}

/// A quiz ready to be played in the terminal.
pub struct Quiz {
    bank: QuestionBank,
    config: QuizConfig,
}

impl Quiz {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            config: QuizConfig::default(),
        }
    }

    /// The built-in classic rock question set.
    pub fn classic_rock() -> Self {
        Self::new(QuestionBank::classic_rock())
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use trivia_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json")?;
    /// # Ok::<(), trivia_quiz::QuizError>(())
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let bank = load_questions_from_json(path)?;
        Ok(Self::new(bank))
    }

    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.config = config;
        self
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Run the quiz in the terminal until the player quits.
    ///
    /// Timers are tokio tasks, so this must be called from within a tokio
    /// runtime.
    pub fn run(self) -> Result<(), QuizError> {
        let (timers, timer_events) = TokioTimers::new();
        let engine = QuizEngine::new(self.bank, self.config, TerminalSurface::new(), timers);
        info!(session = %engine.id(), questions = engine.bank().len(), "quiz ready");

        let mut app = App::new(engine);
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut app, timer_events)
    }
}

fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App<TokioTimers>,
    mut timer_events: UnboundedReceiver<TimerEvent>,
) -> Result<(), QuizError> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::render(frame, app.surface()))?;

        loop {
            match timer_events.try_recv() {
                Ok(timer_event) => app.handle_timer(timer_event)?,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key.code)?;
            }
        }
    }

    info!("quiz closed");
    Ok(())
}
