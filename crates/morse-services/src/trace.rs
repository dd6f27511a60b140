//! Records what a play would key without waiting for it

use std::sync::{Arc, Mutex};
use std::time::Duration;

use morse_core::{StateSetter, Waiter};

/// One keyed interval: the state that was set and how long it lasted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    pub active: bool,
    pub duration: Duration,
}

#[derive(Debug, Default)]
struct TraceState {
    active: bool,
    events: Vec<TraceEvent>,
}

/// Shared recording. [`TraceRecorder::setter`] and
/// [`TraceRecorder::waiter`] hand out the two collaborator halves; both
/// write into the same event list.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    state: Arc<Mutex<TraceState>>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn setter(&self) -> TraceSetter {
        TraceSetter {
            state: self.state.clone(),
        }
    }

    pub fn waiter(&self) -> TraceWaiter {
        TraceWaiter {
            state: self.state.clone(),
        }
    }

    pub fn events(&self) -> Vec<TraceEvent> {
        self.state
            .lock()
            .map(|s| s.events.clone())
            .unwrap_or_default()
    }

    /// Sum of every recorded duration
    pub fn total(&self) -> Duration {
        self.events().iter().map(|e| e.duration).sum()
    }

    /// Keyed time only
    pub fn on_time(&self) -> Duration {
        self.events()
            .iter()
            .filter(|e| e.active)
            .map(|e| e.duration)
            .sum()
    }

    pub fn clear(&self) {
        if let Ok(mut state) = self.state.lock() {
            *state = TraceState::default();
        }
    }
}

#[derive(Debug, Clone)]
pub struct TraceSetter {
    state: Arc<Mutex<TraceState>>,
}

impl<E> StateSetter<E> for TraceSetter {
    fn set_active(&mut self, active: bool) -> Result<(), E> {
        if let Ok(mut state) = self.state.lock() {
            state.active = active;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct TraceWaiter {
    state: Arc<Mutex<TraceState>>,
}

impl<E> Waiter<E> for TraceWaiter {
    fn wait(&mut self, duration: Duration) -> Result<(), E> {
        if let Ok(mut state) = self.state.lock() {
            let active = state.active;
            state.events.push(TraceEvent { active, duration });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morse_core::{MorsePlayer, Playable, RateConfig, StandardTiming};

    #[test]
    fn test_records_paris_at_20_wpm() {
        let recorder = TraceRecorder::new();
        let mut player = MorsePlayer::new(recorder.setter(), recorder.waiter());
        player
            .standard_mut()
            .timing_mut()
            .set_rate(RateConfig::Standard { wpm: 20.0 })
            .unwrap();
        player.play_text::<()>("PARIS").unwrap();

        // One PARIS per 3 seconds at 20 WPM
        assert_eq!(recorder.total(), Duration::from_secs(3));
        // 10 dots and 4 dashes
        assert_eq!(recorder.on_time(), Duration::from_millis(22 * 60));
        let events = recorder.events();
        assert_eq!(events.len(), 28);
        assert!(events[0].active);
        assert_eq!(
            events.last(),
            Some(&TraceEvent {
                active: false,
                duration: Duration::from_millis(420)
            })
        );
    }

    #[test]
    fn test_clear_forgets_events() {
        let recorder = TraceRecorder::new();
        let timing = StandardTiming::default();
        let sequence = morse_core::international().compile("E").unwrap();
        sequence
            .play::<(), _, _, _>(&mut recorder.setter(), &mut recorder.waiter(), &timing)
            .unwrap();
        assert_eq!(recorder.events().len(), 2);
        recorder.clear();
        assert!(recorder.events().is_empty());
    }
}
