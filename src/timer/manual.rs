use std::collections::BTreeMap;
use std::time::Duration;

use super::{TimerDriver, TimerEvent, TimerId};

#[derive(Debug, Clone, Copy)]
struct Armed {
    deadline: Duration,
    period: Option<Duration>,
}

/// A driver on a virtual clock that only moves when told to.
///
/// Used to step the quiz deterministically in tests and simulations.
#[derive(Debug, Default)]
pub struct ManualTimers {
    now: Duration,
    next_id: u64,
    armed: BTreeMap<TimerId, Armed>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time since the driver was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.armed.contains_key(&id)
    }

    /// Moves the clock to the earliest deadline not after `limit` and
    /// returns that timer's event. Intervals are re-armed one period later;
    /// delays are dropped. With nothing due, the clock moves to `limit` and
    /// `None` is returned.
    ///
    /// Timers sharing a deadline fire in the order they were armed.
    pub fn fire_next(&mut self, limit: Duration) -> Option<TimerEvent> {
        let due = self
            .armed
            .iter()
            .filter(|(_, armed)| armed.deadline <= limit)
            .min_by_key(|(id, armed)| (armed.deadline, **id))
            .map(|(id, armed)| (*id, *armed));

        let Some((id, armed)) = due else {
            self.now = self.now.max(limit);
            return None;
        };

        self.now = self.now.max(armed.deadline);
        match armed.period {
            Some(period) => {
                if let Some(entry) = self.armed.get_mut(&id) {
                    entry.deadline += period;
                }
                Some(TimerEvent::Tick(id))
            }
            None => {
                self.armed.remove(&id);
                Some(TimerEvent::Delay(id))
            }
        }
    }

    fn arm(&mut self, after: Duration, period: Option<Duration>) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        self.armed.insert(
            id,
            Armed {
                deadline: self.now + after,
                period,
            },
        );
        id
    }
}

impl TimerDriver for ManualTimers {
    fn start_interval(&mut self, period: Duration) -> TimerId {
        self.arm(period, Some(period))
    }

    fn start_delay(&mut self, delay: Duration) -> TimerId {
        self.arm(delay, None)
    }

    fn cancel(&mut self, id: TimerId) {
        self.armed.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_next_orders_by_deadline() {
        let mut timers = ManualTimers::new();
        let slow = timers.start_delay(Duration::from_secs(3));
        let fast = timers.start_interval(Duration::from_secs(1));

        let limit = Duration::from_secs(3);
        let mut events = Vec::new();
        while let Some(event) = timers.fire_next(limit) {
            events.push(event);
        }

        assert_eq!(
            events,
            vec![
                TimerEvent::Tick(fast),
                TimerEvent::Tick(fast),
                TimerEvent::Delay(slow),
                TimerEvent::Tick(fast),
            ]
        );
        assert!(timers.is_armed(fast));
        assert!(!timers.is_armed(slow));
        assert_eq!(timers.now(), limit);
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let mut timers = ManualTimers::new();
        assert_eq!(timers.fire_next(Duration::from_secs(10)), None);
        assert_eq!(timers.fire_next(Duration::from_secs(2)), None);
        assert_eq!(timers.now(), Duration::from_secs(10));
    }
}
