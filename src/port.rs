//! The surface a quiz engine draws on.
//!
//! The engine never touches a screen itself. It pushes everything the
//! player should see through [`PresentationPort`], and the surface feeds
//! player actions back through `QuizEngine::on_start_requested` and
//! `QuizEngine::on_confirm_requested`.

/// Result of scoring one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn from_correct(is_correct: bool) -> Self {
        if is_correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Outcome::Correct)
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::Correct => "Your answer is correct!",
            Outcome::Incorrect => "Sorry, your answer is not correct!",
        }
    }
}

pub trait PresentationPort {
    /// Shows the in-progress chrome and hides the start control and the
    /// game-over surface.
    fn show_quiz_chrome(&mut self);

    /// Position of the question about to be rendered, 1-based.
    fn render_progress(&mut self, _number: usize, _total: usize) {}

    fn render_question(&mut self, prompt: &str, choices: &[String]);

    fn render_countdown(&mut self, seconds_remaining: u32);

    fn render_outcome(&mut self, outcome: Outcome, explanation: &str);

    fn render_game_over(&mut self, correct: u32, incorrect: u32);

    fn show_start_control(&mut self);

    fn show_confirm_control(&mut self);

    fn hide_confirm_control(&mut self);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::{Outcome, PresentationPort};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PortCall {
        QuizChrome,
        Progress(usize, usize),
        Question(String, Vec<String>),
        Countdown(u32),
        Outcome(Outcome, String),
        GameOver(u32, u32),
        StartControl,
        ShowConfirm,
        HideConfirm,
    }

    /// Remembers every call, in order.
    #[derive(Debug, Default)]
    pub struct RecordingPort {
        pub calls: Vec<PortCall>,
    }

    impl RecordingPort {
        pub fn countdowns(&self) -> Vec<u32> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    PortCall::Countdown(seconds) => Some(*seconds),
                    _ => None,
                })
                .collect()
        }

        pub fn prompts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    PortCall::Question(prompt, _) => Some(prompt.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn outcomes(&self) -> Vec<Outcome> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    PortCall::Outcome(outcome, _) => Some(*outcome),
                    _ => None,
                })
                .collect()
        }

        pub fn game_overs(&self) -> Vec<(u32, u32)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    PortCall::GameOver(correct, incorrect) => Some((*correct, *incorrect)),
                    _ => None,
                })
                .collect()
        }
    }

    impl PresentationPort for RecordingPort {
        fn show_quiz_chrome(&mut self) {
            self.calls.push(PortCall::QuizChrome);
        }

        fn render_progress(&mut self, number: usize, total: usize) {
            self.calls.push(PortCall::Progress(number, total));
        }

        fn render_question(&mut self, prompt: &str, choices: &[String]) {
            self.calls
                .push(PortCall::Question(prompt.to_string(), choices.to_vec()));
        }

        fn render_countdown(&mut self, seconds_remaining: u32) {
            self.calls.push(PortCall::Countdown(seconds_remaining));
        }

        fn render_outcome(&mut self, outcome: Outcome, explanation: &str) {
            self.calls
                .push(PortCall::Outcome(outcome, explanation.to_string()));
        }

        fn render_game_over(&mut self, correct: u32, incorrect: u32) {
            self.calls.push(PortCall::GameOver(correct, incorrect));
        }

        fn show_start_control(&mut self) {
            self.calls.push(PortCall::StartControl);
        }

        fn show_confirm_control(&mut self) {
            self.calls.push(PortCall::ShowConfirm);
        }

        fn hide_confirm_control(&mut self) {
            self.calls.push(PortCall::HideConfirm);
        }
    }
}
