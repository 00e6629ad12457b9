//! Answer-window countdown and delayed transitions.
//!
//! Timers never call back into the quiz directly. A [`TimerDriver`] arms a
//! timer under a fresh [`TimerId`] and later delivers a [`TimerEvent`]
//! carrying that id; whoever owns the timer decides whether the id is
//! still live. Cancelling a timer makes any event already in flight for it
//! stale, so it is simply ignored.

mod manual;
mod runtime;

use std::time::Duration;

pub use manual::ManualTimers;
pub use runtime::TokioTimers;

/// Identifies one armed timer. Never reused by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// A timer firing, as delivered by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// A repeating interval elapsed once.
    Tick(TimerId),
    /// A one-shot delay elapsed.
    Delay(TimerId),
}

/// Arms and cancels timers.
pub trait TimerDriver {
    /// Arms a repeating timer. The first tick arrives one `period` from now.
    fn start_interval(&mut self, period: Duration) -> TimerId;

    /// Arms a one-shot timer.
    fn start_delay(&mut self, delay: Duration) -> TimerId;

    /// Disarms a timer. Unknown or already finished ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// What a live countdown tick means for the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// Time is left; the value is always at least 1.
    Tick(u32),
    /// The countdown reached zero. Reported once, after which the timer is
    /// disarmed.
    Expired,
}

/// A seconds countdown backed by a repeating driver interval.
#[derive(Debug, Default)]
pub struct CountdownTimer {
    active: Option<TimerId>,
    remaining: u32,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting down from `seconds`, one step per `period`. A running
    /// countdown is cancelled first.
    pub fn start<D: TimerDriver + ?Sized>(&mut self, driver: &mut D, seconds: u32, period: Duration) {
        self.cancel(driver);
        self.remaining = seconds;
        self.active = Some(driver.start_interval(period));
    }

    /// Applies a tick from the driver. Returns `None` when `id` is not the
    /// live timer.
    pub fn on_tick<D: TimerDriver + ?Sized>(&mut self, driver: &mut D, id: TimerId) -> Option<Countdown> {
        if self.active != Some(id) {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return Some(Countdown::Tick(self.remaining));
        }

        self.cancel(driver);
        Some(Countdown::Expired)
    }

    /// Stops ticking. Safe to call at any time.
    pub fn cancel<D: TimerDriver + ?Sized>(&mut self, driver: &mut D) {
        if let Some(id) = self.active.take() {
            driver.cancel(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// A pending one-shot delay.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping the handle leaves no way to cancel or recognise the delay"]
pub struct DelayHandle {
    id: TimerId,
}

impl DelayHandle {
    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn matches(&self, id: TimerId) -> bool {
        self.id == id
    }

    pub fn cancel<D: TimerDriver + ?Sized>(self, driver: &mut D) {
        driver.cancel(self.id);
    }
}

/// Arms a one-shot delay and returns its handle.
pub fn schedule_delayed<D: TimerDriver + ?Sized>(driver: &mut D, delay: Duration) -> DelayHandle {
    DelayHandle {
        id: driver.start_delay(delay),
    }
}
