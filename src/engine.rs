//! The quiz state machine.
//!
//! ```text
//! NotStarted -> AwaitingAnswer -> ShowingAnswer -> AwaitingAnswer ...
//!                                               -> Finished -> (start) ...
//! ```
//!
//! Every entry point checks the phase first. A request that arrives in the
//! wrong phase, such as a confirm racing the countdown expiry, is logged and
//! dropped. Entering a phase cancels the timers of the previous one, and
//! timer events for anything but the live timer are ignored.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::QuizError;
use crate::config::QuizConfig;
use crate::data::QuestionBank;
use crate::models::{Phase, Question, QuestionKind, QuizSession};
use crate::port::{Outcome, PresentationPort};
use crate::timer::{
    Countdown, CountdownTimer, DelayHandle, ManualTimers, TimerDriver, TimerEvent,
    schedule_delayed,
};

/// An operation requested in a phase that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {operation} while {phase}")]
pub struct InvalidTransition {
    pub operation: &'static str,
    pub phase: Phase,
}

pub struct QuizEngine<P, D> {
    id: Uuid,
    bank: QuestionBank,
    config: QuizConfig,
    session: QuizSession,
    port: P,
    timers: D,
    countdown: CountdownTimer,
    pending_advance: Option<DelayHandle>,
}

impl<P: PresentationPort, D: TimerDriver> QuizEngine<P, D> {
    /// Creates an engine in [`Phase::NotStarted`] and offers the start
    /// control.
    pub fn new(bank: QuestionBank, config: QuizConfig, mut port: P, timers: D) -> Self {
        port.show_start_control();
        Self {
            id: Uuid::new_v4(),
            bank,
            config,
            session: QuizSession::new(),
            port,
            timers,
            countdown: CountdownTimer::new(),
            pending_advance: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn timers(&self) -> &D {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut D {
        &mut self.timers
    }

    /// Begins a fresh run from the first question.
    ///
    /// Only acts before the first run or after the last one finished; while
    /// a run is in progress this does nothing.
    #[instrument(level = "debug", skip_all, fields(session = %self.id))]
    pub fn start(&mut self) -> Result<(), QuizError> {
        if let Err(err) = self.require("start", |phase| !phase.is_running()) {
            debug!(%err, "start ignored");
            return Ok(());
        }

        self.session.reset(self.bank.load());
        self.session.phase = Phase::NotStarted;
        info!(questions = self.session.total_questions(), "quiz started");

        self.port.show_quiz_chrome();
        self.advance_to_next_question()
    }

    /// Shows the next question, or the final score once none are left.
    #[instrument(level = "debug", skip_all, fields(session = %self.id))]
    pub fn advance_to_next_question(&mut self) -> Result<(), QuizError> {
        if let Err(err) = self.require("advance", |phase| {
            matches!(phase, Phase::NotStarted | Phase::ShowingAnswer)
        }) {
            debug!(%err, "advance ignored");
            return Ok(());
        }

        if let Some(pending) = self.pending_advance.take() {
            pending.cancel(&mut self.timers);
        }
        self.countdown.cancel(&mut self.timers);

        let Some(question) = self.session.take_next() else {
            self.finish();
            return Ok(());
        };

        match question.kind() {
            QuestionKind::TextMultipleChoice => {
                self.present_text_multiple_choice(&question);
                Ok(())
            }
            kind => {
                warn!(session = %self.id, %kind, "question kind has no renderer");
                self.finish();
                Err(QuizError::NotImplemented(kind))
            }
        }
    }

    /// Scores `selected` against the current question. `None` means no
    /// choice was made and always counts as incorrect.
    ///
    /// Returns `None` without touching the score unless a question is
    /// awaiting its answer, so at most one answer counts per question.
    #[instrument(level = "debug", skip_all, fields(session = %self.id))]
    pub fn submit_answer(&mut self, selected: Option<usize>) -> Option<Outcome> {
        if let Err(err) = self.require("submit an answer", |phase| phase == Phase::AwaitingAnswer) {
            debug!(%err, ?selected, "answer ignored");
            return None;
        }

        self.countdown.cancel(&mut self.timers);

        let outcome = Outcome::from_correct(self.session.record_answer(selected));
        info!(
            ?selected,
            ?outcome,
            correct = self.session.correct_count(),
            incorrect = self.session.incorrect_count(),
            "answer scored"
        );

        self.port.hide_confirm_control();
        if let Some(question) = self.session.current.clone() {
            self.port.render_outcome(outcome, question.explanation());
        }

        self.session.phase = Phase::ShowingAnswer;
        self.pending_advance = Some(schedule_delayed(&mut self.timers, self.config.reveal_delay()));
        Some(outcome)
    }

    /// The answer window ran out: submits an empty answer.
    pub fn on_countdown_expired(&mut self) -> Option<Outcome> {
        if let Err(err) = self.require("expire the countdown", |phase| phase == Phase::AwaitingAnswer) {
            debug!(session = %self.id, %err, "expiry ignored");
            return None;
        }

        self.countdown.cancel(&mut self.timers);
        self.session.seconds_remaining = 0;
        info!(session = %self.id, "answer window expired");
        self.submit_answer(None)
    }

    /// Start or play-again pressed on the surface.
    pub fn on_start_requested(&mut self) -> Result<(), QuizError> {
        self.start()
    }

    /// Confirm pressed on the surface, with the highlighted choice if any.
    pub fn on_confirm_requested(&mut self, selected: Option<usize>) -> Option<Outcome> {
        self.submit_answer(selected)
    }

    /// Routes an event from the timer driver.
    pub fn handle_timer(&mut self, event: TimerEvent) -> Result<(), QuizError> {
        match event {
            TimerEvent::Tick(id) => {
                if self.session.phase != Phase::AwaitingAnswer {
                    debug!(session = %self.id, ?id, phase = %self.session.phase, "tick ignored");
                    return Ok(());
                }

                match self.countdown.on_tick(&mut self.timers, id) {
                    Some(Countdown::Tick(remaining)) => {
                        self.session.seconds_remaining = remaining;
                        self.port.render_countdown(remaining);
                    }
                    Some(Countdown::Expired) => {
                        self.on_countdown_expired();
                    }
                    None => debug!(session = %self.id, ?id, "stale tick"),
                }
                Ok(())
            }
            TimerEvent::Delay(id) => {
                let live = self
                    .pending_advance
                    .as_ref()
                    .is_some_and(|pending| pending.matches(id));
                if !live || self.session.phase != Phase::ShowingAnswer {
                    debug!(session = %self.id, ?id, phase = %self.session.phase, "delay ignored");
                    return Ok(());
                }

                self.pending_advance = None;
                self.advance_to_next_question()
            }
        }
    }

    fn require(
        &self,
        operation: &'static str,
        allowed: impl FnOnce(Phase) -> bool,
    ) -> Result<(), InvalidTransition> {
        let phase = self.session.phase;
        if allowed(phase) {
            Ok(())
        } else {
            Err(InvalidTransition { operation, phase })
        }
    }

    fn present_text_multiple_choice(&mut self, question: &Arc<Question>) {
        self.port
            .render_progress(self.session.question_number(), self.session.total_questions());
        self.port
            .render_question(question.prompt(), question.choices().labels());
        self.port.show_confirm_control();

        self.session.phase = Phase::AwaitingAnswer;
        self.session.seconds_remaining = self.config.answer_window();
        self.port.render_countdown(self.session.seconds_remaining);
        self.countdown.start(
            &mut self.timers,
            self.config.answer_window(),
            self.config.tick_interval(),
        );

        debug!(
            session = %self.id,
            number = self.session.question_number(),
            total = self.session.total_questions(),
            "question shown"
        );
    }

    fn finish(&mut self) {
        self.session.phase = Phase::Finished;
        let correct = self.session.correct_count();
        let incorrect = self.session.incorrect_count();
        info!(session = %self.id, correct, incorrect, "quiz finished");

        self.port.hide_confirm_control();
        self.port.render_game_over(correct, incorrect);
        self.port.show_start_control();
    }
}

impl<P: PresentationPort> QuizEngine<P, ManualTimers> {
    /// Moves the virtual clock forward, handling every timer that falls due
    /// on the way in order.
    pub fn advance(&mut self, by: std::time::Duration) -> Result<(), QuizError> {
        let target = self.timers.now() + by;
        while let Some(event) = self.timers.fire_next(target) {
            self.handle_timer(event)?;
        }
        Ok(())
    }
}
