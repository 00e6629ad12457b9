use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_ANSWER_WINDOW_SECS: u32 = 30;
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_secs(5);
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("answer window must be at least one second")]
    ZeroAnswerWindow,
    #[error("reveal delay must be greater than zero")]
    ZeroRevealDelay,
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Timing of a quiz run. Every value is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    answer_window: u32,
    reveal_delay: Duration,
    tick_interval: Duration,
}

impl QuizConfig {
    pub fn new(
        answer_window: u32,
        reveal_delay: Duration,
        tick_interval: Duration,
    ) -> Result<Self, ConfigError> {
        Self::default()
            .with_answer_window(answer_window)?
            .with_reveal_delay(reveal_delay)?
            .with_tick_interval(tick_interval)
    }

    pub fn with_answer_window(mut self, seconds: u32) -> Result<Self, ConfigError> {
        if seconds == 0 {
            return Err(ConfigError::ZeroAnswerWindow);
        }
        self.answer_window = seconds;
        Ok(self)
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Result<Self, ConfigError> {
        if delay.is_zero() {
            return Err(ConfigError::ZeroRevealDelay);
        }
        self.reveal_delay = delay;
        Ok(self)
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        self.tick_interval = interval;
        Ok(self)
    }

    /// Seconds the player gets per question.
    pub fn answer_window(&self) -> u32 {
        self.answer_window
    }

    /// How long the answer stays on screen before the next question.
    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    /// Length of one countdown step.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            answer_window: DEFAULT_ANSWER_WINDOW_SECS,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}
