use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use super::Question;

/// Where a quiz run currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No run yet.
    #[default]
    NotStarted,
    /// A question is shown and the countdown is running.
    AwaitingAnswer,
    /// The answer and explanation are shown until the reveal delay passes.
    ShowingAnswer,
    /// Every question has been answered; waits for a restart.
    Finished,
}

impl Phase {
    /// Whether a run is in progress (start must not reset it).
    pub fn is_running(self) -> bool {
        matches!(self, Phase::AwaitingAnswer | Phase::ShowingAnswer)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::AwaitingAnswer => "awaiting answer",
            Phase::ShowingAnswer => "showing answer",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Mutable state of one quiz run. Owned by a single engine.
#[derive(Debug, Default)]
pub struct QuizSession {
    pub(crate) remaining: VecDeque<Arc<Question>>,
    pub(crate) current: Option<Arc<Question>>,
    pub(crate) correct_index: Option<usize>,
    pub(crate) correct_count: u32,
    pub(crate) incorrect_count: u32,
    pub(crate) seconds_remaining: u32,
    pub(crate) phase: Phase,
    pub(crate) total: usize,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh run over `questions`, counters zeroed. The phase is left to
    /// the caller.
    pub(crate) fn reset(&mut self, questions: VecDeque<Arc<Question>>) {
        self.total = questions.len();
        self.remaining = questions;
        self.current = None;
        self.correct_index = None;
        self.correct_count = 0;
        self.incorrect_count = 0;
        self.seconds_remaining = 0;
    }

    /// Pops the next question and makes it current.
    pub(crate) fn take_next(&mut self) -> Option<Arc<Question>> {
        let next = self.remaining.pop_front();
        self.correct_index = next.as_ref().map(|q| q.choices().correct_index());
        self.current = next.clone();
        next
    }

    /// Scores `selected` against the current question's correct index.
    pub(crate) fn record_answer(&mut self, selected: Option<usize>) -> bool {
        let is_correct = self.correct_index.is_some() && selected == self.correct_index;
        if is_correct {
            self.correct_count += 1;
        } else {
            self.incorrect_count += 1;
        }
        is_correct
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_deref()
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn remaining_questions(&self) -> usize {
        self.remaining.len()
    }

    pub fn total_questions(&self) -> usize {
        self.total
    }

    /// 1-based position of the current question in the run.
    pub fn question_number(&self) -> usize {
        let pending = self.remaining.len() + usize::from(self.current.is_some());
        self.total - pending + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChoiceSet;

    fn questions(n: usize) -> VecDeque<Arc<Question>> {
        (0..n)
            .map(|i| {
                Arc::new(Question::text(
                    format!("question {i}"),
                    "why",
                    ChoiceSet::four(["a", "b", "c", "d"], i % 4),
                ))
            })
            .collect()
    }

    #[test]
    fn test_take_next_pops_front_and_tracks_correct_index() {
        let mut session = QuizSession::new();
        session.reset(questions(2));

        let first = session.take_next().unwrap();
        assert_eq!(first.prompt(), "question 0");
        assert_eq!(session.correct_index, Some(0));
        assert_eq!(session.question_number(), 1);

        session.take_next().unwrap();
        assert_eq!(session.correct_index, Some(1));
        assert_eq!(session.question_number(), 2);
        assert_eq!(session.remaining_questions(), 0);

        assert!(session.take_next().is_none());
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_record_answer_counts() {
        let mut session = QuizSession::new();
        session.reset(questions(1));
        session.take_next();

        assert!(session.record_answer(Some(0)));
        assert!(!session.record_answer(None));
        assert!(!session.record_answer(Some(3)));
        assert_eq!(session.correct_count(), 1);
        assert_eq!(session.incorrect_count(), 2);

        session.reset(questions(3));
        assert_eq!(session.correct_count(), 0);
        assert_eq!(session.incorrect_count(), 0);
        assert_eq!(session.total_questions(), 3);
    }
}
