//! Cancellable repeating task driving the engines' automatic ticks.
//!
//! The host asks how many intervals elapsed since the last poll and runs the
//! engine tick that many times. Stopping the task is the only cancellation;
//! there is nothing to roll back because each tick is applied whole.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct RepeatingTask
{
    interval: Duration,
    next_due: Option<Instant>,
}

impl RepeatingTask
{
    /// Creates a stopped task. Zero intervals are bumped to 1 ms.
    pub fn new(interval: Duration) -> Self
    {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration
    {
        self.interval
    }

    pub fn is_running(&self) -> bool
    {
        self.next_due.is_some()
    }

    /// First tick becomes due one interval after `now`.
    pub fn start(&mut self, now: Instant)
    {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self)
    {
        self.next_due = None;
    }

    /// Returns whether the task is running afterwards.
    pub fn toggle(&mut self, now: Instant) -> bool
    {
        if self.is_running() {
            self.stop();
        } else {
            self.start(now);
        }
        self.is_running()
    }

    /// Number of ticks that became due up to `now`.
    pub fn due_ticks(&mut self, now: Instant) -> u32
    {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        let mut ticks = 0u32;
        while due <= now {
            ticks = ticks.saturating_add(1);
            due += self.interval;
        }
        self.next_due = Some(due);
        ticks
    }
}
