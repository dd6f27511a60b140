//! The play contract shared by every playable unit.
//!
//! Playing walks intervals in document order. For each one the state-setter
//! is told whether the signal is on, then the waiter is handed the duration
//! from the timing model. The first error from either collaborator aborts
//! the walk and is returned unchanged.
//!
//! A waiter may block the calling thread for the whole duration, or it may
//! hand the interval to another thread and return at once; the core does
//! not care which.

use std::time::Duration;

use crate::interval::Interval;
use crate::timing::MorseTiming;

/// Switches the keyed signal on or off
pub trait StateSetter<E> {
    fn set_active(&mut self, active: bool) -> Result<(), E>;
}

/// Spends (or schedules) the time an interval lasts
pub trait Waiter<E> {
    fn wait(&mut self, duration: Duration) -> Result<(), E>;
}

impl<E, F> StateSetter<E> for F
where
    F: FnMut(bool) -> Result<(), E>,
{
    fn set_active(&mut self, active: bool) -> Result<(), E> {
        self(active)
    }
}

impl<E, F> Waiter<E> for F
where
    F: FnMut(Duration) -> Result<(), E>,
{
    fn wait(&mut self, duration: Duration) -> Result<(), E> {
        self(duration)
    }
}

/// Anything that can be played against a timing model
pub trait Playable {
    fn play<E, S, W, T>(&self, setter: &mut S, waiter: &mut W, timing: &T) -> Result<(), E>
    where
        S: StateSetter<E> + ?Sized,
        W: Waiter<E> + ?Sized,
        T: MorseTiming + ?Sized;
}

impl Playable for Interval {
    fn play<E, S, W, T>(&self, setter: &mut S, waiter: &mut W, timing: &T) -> Result<(), E>
    where
        S: StateSetter<E> + ?Sized,
        W: Waiter<E> + ?Sized,
        T: MorseTiming + ?Sized,
    {
        setter.set_active(self.is_active())?;
        waiter.wait(timing.duration_of(self.kind()))
    }
}

/// Composite: children play in order, never interleaved
impl<P: Playable> Playable for [P] {
    fn play<E, S, W, T>(&self, setter: &mut S, waiter: &mut W, timing: &T) -> Result<(), E>
    where
        S: StateSetter<E> + ?Sized,
        W: Waiter<E> + ?Sized,
        T: MorseTiming + ?Sized,
    {
        for child in self {
            child.play(setter, waiter, timing)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::IntervalKind;
    use crate::timing::StandardTiming;

    #[test]
    fn test_setter_runs_before_waiter() {
        let timing = StandardTiming::new(20.0).unwrap();
        let log = std::cell::RefCell::new(Vec::new());
        let mut setter = |on: bool| -> Result<(), ()> {
            log.borrow_mut().push(format!("set {on}"));
            Ok(())
        };
        let mut waiter = |d: Duration| -> Result<(), ()> {
            log.borrow_mut().push(format!("wait {}", d.as_millis()));
            Ok(())
        };

        let units = [Interval::new(IntervalKind::Dash), Interval::new(IntervalKind::LetterGap)];
        units[..].play(&mut setter, &mut waiter, &timing).unwrap();

        assert_eq!(
            log.into_inner(),
            vec!["set true", "wait 180", "set false", "wait 180"]
        );
    }

    #[test]
    fn test_collaborator_error_aborts_remaining_intervals() {
        let timing = StandardTiming::default();
        let mut calls = 0;
        let mut setter = |_on: bool| -> Result<(), &'static str> { Ok(()) };
        let mut waiter = |_d: Duration| {
            calls += 1;
            if calls == 2 {
                Err("device gone")
            } else {
                Ok(())
            }
        };

        let units = [Interval::new(IntervalKind::Dot); 5];
        let result = units[..].play(&mut setter, &mut waiter, &timing);

        assert_eq!(result, Err("device gone"));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_setter_error_skips_the_wait() {
        let timing = StandardTiming::default();
        let mut waited = false;
        let mut setter = |_on: bool| Err::<(), _>(7);
        let mut waiter = |_d: Duration| {
            waited = true;
            Ok(())
        };

        let result = Interval::new(IntervalKind::Dot).play(&mut setter, &mut waiter, &timing);

        assert_eq!(result, Err(7));
        assert!(!waited);
    }
}
