//! Plays text and prosigns through a pair of collaborators

use crate::error::PlayError;
use crate::playback::{Playable, StateSetter, Waiter};
use crate::standard::{BuiltinStandard, Standard};

/// Owns a standard, a state-setter and a waiter.
///
/// Text is compiled in full before anything is keyed, so an unknown
/// character fails with [`PlayError::Morse`] and the collaborators are never
/// called.
#[derive(Debug)]
pub struct MorsePlayer<S, W> {
    standard: Standard,
    setter: S,
    waiter: W,
}

impl<S, W> MorsePlayer<S, W> {
    /// Player keyed with the ITU-R symbols at the default rate
    pub fn new(setter: S, waiter: W) -> Self {
        Self::with_standard(setter, waiter, BuiltinStandard::default().standard())
    }

    pub fn with_standard(setter: S, waiter: W, standard: Standard) -> Self {
        Self {
            standard,
            setter,
            waiter,
        }
    }

    pub fn standard(&self) -> &Standard {
        &self.standard
    }

    pub fn standard_mut(&mut self) -> &mut Standard {
        &mut self.standard
    }

    pub fn setter(&self) -> &S {
        &self.setter
    }

    pub fn waiter(&self) -> &W {
        &self.waiter
    }

    pub fn into_parts(self) -> (Standard, S, W) {
        (self.standard, self.setter, self.waiter)
    }

    pub fn play_text<E>(&mut self, text: &str) -> Result<(), PlayError<E>>
    where
        S: StateSetter<E>,
        W: Waiter<E>,
    {
        let sequence = self.standard.symbols().compile(text)?;
        self.play(&sequence)
    }

    pub fn play_prosign<E>(&mut self, name: &str) -> Result<(), PlayError<E>>
    where
        S: StateSetter<E>,
        W: Waiter<E>,
    {
        let sequence = self.standard.symbols().compile_prosign(name)?;
        self.play(&sequence)
    }

    /// Play an already compiled unit with this player's timing
    pub fn play<E, P>(&mut self, playable: &P) -> Result<(), PlayError<E>>
    where
        S: StateSetter<E>,
        W: Waiter<E>,
        P: Playable + ?Sized,
    {
        playable
            .play(&mut self.setter, &mut self.waiter, self.standard.timing())
            .map_err(PlayError::Collaborator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MorseError, UnknownSymbol};
    use crate::timing::RateConfig;
    use std::time::Duration;

    #[test]
    fn test_play_text_keys_every_interval() {
        let mut calls = Vec::new();
        let mut player = MorsePlayer::new(
            |on: bool| -> Result<(), ()> {
                calls.push(on);
                Ok(())
            },
            |_d: Duration| -> Result<(), ()> { Ok(()) },
        );
        player.play_text("SOS").unwrap();
        drop(player);
        // 9 elements, 6 intra gaps, 2 letter gaps, closing word gap
        assert_eq!(calls.len(), 18);
        assert_eq!(calls.iter().filter(|&&on| on).count(), 9);
        assert_eq!(calls.last(), Some(&false));
    }

    #[test]
    fn test_unknown_character_plays_nothing() {
        let mut called = false;
        let mut player = MorsePlayer::new(
            |_on: bool| -> Result<(), ()> {
                called = true;
                Ok(())
            },
            |_d: Duration| -> Result<(), ()> { Ok(()) },
        );
        let err = player.play_text("CQ~").unwrap_err();
        drop(player);
        assert!(matches!(
            err,
            PlayError::Morse(MorseError::UnknownSymbol(UnknownSymbol::Char('~')))
        ));
        assert!(!called);
    }

    #[test]
    fn test_collaborator_error_aborts_at_failing_call() {
        let mut changes = 0;
        let mut waits = 0;
        let mut player = MorsePlayer::new(
            |_on: bool| -> Result<(), &'static str> {
                changes += 1;
                if changes > 10 {
                    Err("relay stuck")
                } else {
                    Ok(())
                }
            },
            |_d: Duration| -> Result<(), &'static str> {
                waits += 1;
                Ok(())
            },
        );
        let err = player.play_text("THE QUICK BROWN FOX").unwrap_err();
        drop(player);
        assert!(matches!(err, PlayError::Collaborator("relay stuck")));
        // The failing state change is the last call; its wait never happens
        assert_eq!(changes, 11);
        assert_eq!(waits, 10);
    }

    #[test]
    fn test_play_prosign_uses_player_timing() {
        let mut total = Duration::ZERO;
        let mut player = MorsePlayer::new(
            |_on: bool| -> Result<(), ()> { Ok(()) },
            |d: Duration| -> Result<(), ()> {
                total += d;
                Ok(())
            },
        );
        player
            .standard_mut()
            .timing_mut()
            .set_rate(RateConfig::Standard { wpm: 20.0 })
            .unwrap();
        player.play_prosign("End").unwrap();
        assert!(player.play_prosign("over").is_err());
        drop(player);
        // ...-.- is 4 dots, 2 dashes, 5 intra gaps and a word gap: 4 + 6 + 5 + 7 units
        assert_eq!(total, Duration::from_millis(22 * 60));
    }
}
