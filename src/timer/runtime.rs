use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::{TimerDriver, TimerEvent, TimerId};

/// A driver backed by tokio tasks.
///
/// Each armed timer is a spawned task that sends its events down an
/// unbounded channel; cancelling aborts the task. Must be used from inside
/// a tokio runtime.
pub struct TokioTimers {
    next_id: u64,
    tasks: HashMap<TimerId, JoinHandle<()>>,
    events: mpsc::UnboundedSender<TimerEvent>,
}

impl TokioTimers {
    /// Creates the driver and the receiver its events arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let timers = Self {
            next_id: 0,
            tasks: HashMap::new(),
            events,
        };
        (timers, rx)
    }

    fn next_id(&mut self) -> TimerId {
        self.next_id += 1;
        TimerId::new(self.next_id)
    }

    fn forget_finished(&mut self) {
        self.tasks.retain(|_, task| !task.is_finished());
    }
}

impl TimerDriver for TokioTimers {
    fn start_interval(&mut self, period: Duration) -> TimerId {
        self.forget_finished();
        let id = self.next_id();
        let tx = self.events.clone();

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(TimerEvent::Tick(id)).is_err() {
                    break;
                }
            }
        });

        self.tasks.insert(id, task);
        id
    }

    fn start_delay(&mut self, delay: Duration) -> TimerId {
        self.forget_finished();
        let id = self.next_id();
        let tx = self.events.clone();

        let task = tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send(TimerEvent::Delay(id));
        });

        self.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_interval_ticks_until_cancelled() {
        let (mut timers, mut rx) = TokioTimers::new();
        let id = timers.start_interval(Duration::from_secs(1));

        assert_eq!(rx.recv().await, Some(TimerEvent::Tick(id)));
        assert_eq!(rx.recv().await, Some(TimerEvent::Tick(id)));

        timers.cancel(id);
        time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_fires_once() {
        let (mut timers, mut rx) = TokioTimers::new();
        let id = timers.start_delay(Duration::from_secs(5));

        let started = Instant::now();
        assert_eq!(rx.recv().await, Some(TimerEvent::Delay(id)));
        assert!(started.elapsed() >= Duration::from_secs(5));

        time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_delay_never_fires() {
        let (mut timers, mut rx) = TokioTimers::new();
        let id = timers.start_delay(Duration::from_secs(5));
        timers.cancel(id);

        time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }
}
