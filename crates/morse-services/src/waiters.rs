//! Blocking waiters for keying on the calling thread

use std::thread;
use std::time::{Duration, Instant};

use morse_core::Waiter;

/// Sleeps for each interval in turn.
///
/// Scheduling jitter accumulates over a long message; use
/// [`DeadlineWaiter`] when the total length matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepWaiter;

impl<E> Waiter<E> for SleepWaiter {
    fn wait(&mut self, duration: Duration) -> Result<(), E> {
        thread::sleep(duration);
        Ok(())
    }
}

/// Sleeps until a running deadline, so oversleeping one interval shortens
/// the next instead of delaying the rest of the message
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlineWaiter {
    deadline: Option<Instant>,
}

impl DeadlineWaiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing from now, forgetting any earlier deadline
    pub fn reset(&mut self) {
        self.deadline = None;
    }

    /// When the most recent interval ends
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl<E> Waiter<E> for DeadlineWaiter {
    fn wait(&mut self, duration: Duration) -> Result<(), E> {
        let now = Instant::now();
        let start = match self.deadline {
            Some(previous) if previous + duration > now => previous,
            // Idle for longer than this interval: start over
            _ => now,
        };
        let deadline = start + duration;
        self.deadline = Some(deadline);
        if let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            thread::sleep(remaining);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_waiter_blocks() {
        let start = Instant::now();
        Waiter::<()>::wait(&mut SleepWaiter, Duration::from_millis(5)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_deadline_waiter_tracks_total() {
        let mut waiter = DeadlineWaiter::new();
        let start = Instant::now();
        for _ in 0..4 {
            Waiter::<()>::wait(&mut waiter, Duration::from_millis(3)).unwrap();
        }
        assert!(start.elapsed() >= Duration::from_millis(12));
        let deadline = waiter.deadline().unwrap();
        assert!(deadline >= start + Duration::from_millis(12));

        waiter.reset();
        assert!(waiter.deadline().is_none());
    }
}
