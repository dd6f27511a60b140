//! Timing models: words-per-minute to exact interval durations.
//!
//! Rates are calibrated on the standard word PARIS, which is 50 dot-units
//! long including its trailing word gap. One minute divided by the WPM is
//! the time for one PARIS; a fiftieth of that is one unit. Durations are
//! whole nanoseconds, so the unit is truncated and then the longer
//! intervals are nudged by a few nanoseconds to win back the lost time.
//! A keyed PARIS always lands in the same 50 ns bucket as the requested
//! rate; when truncation leaves it short of that bucket the unit is rounded
//! up instead.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MorseError, RateError, Result};
use crate::interval::IntervalKind;

/// Dot-units in one PARIS
pub const PARIS_UNITS: u64 = 50;

/// Fastest rate whose unit is still at least one nanosecond
pub const MAX_WPM: f64 = 1.2e9;

pub const DEFAULT_STANDARD_WPM: f64 = 24.0;
pub const DEFAULT_FARNSWORTH_WPM: f64 = 8.0;
pub const DEFAULT_CHARACTER_WPM: f64 = 18.0;

const NANOS_PER_MINUTE: f64 = 60e9;
const NANOS_PER_UNIT_MINUTE: f64 = NANOS_PER_MINUTE / PARIS_UNITS as f64;

// Leaves headroom for the 50x sums below
const MAX_WORD_NANOS: u64 = u64::MAX / 64;

// Correction limits, in nanoseconds
const MAX_DASH_CORRECTION: u32 = 2;
const MAX_WORD_GAP_CORRECTION: u32 = 6;

/// Duration lookup for each interval kind
pub trait MorseTiming {
    fn duration_of(&self, kind: IntervalKind) -> Duration;
}

/// Rate settings for a timing model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateConfig {
    /// One rate for characters and spacing
    Standard { wpm: f64 },
    /// Characters keyed at `char_wpm`, spacing stretched to reach `overall_wpm`
    Farnsworth { overall_wpm: f64, char_wpm: f64 },
}

impl Default for RateConfig {
    fn default() -> Self {
        Self::Standard {
            wpm: DEFAULT_STANDARD_WPM,
        }
    }
}

impl RateConfig {
    /// Farnsworth rate with the usual 18 WPM character rhythm for slow
    /// overall rates, or matching rates from 18 WPM upwards
    pub fn farnsworth(overall_wpm: f64) -> Self {
        Self::Farnsworth {
            overall_wpm,
            char_wpm: overall_wpm.max(DEFAULT_CHARACTER_WPM),
        }
    }

    pub fn validate(&self) -> std::result::Result<(), RateError> {
        match *self {
            Self::Standard { wpm } => check_wpm(wpm),
            Self::Farnsworth {
                overall_wpm,
                char_wpm,
            } => {
                check_positive(overall_wpm)?;
                check_positive(char_wpm)?;
                if overall_wpm > char_wpm {
                    return Err(RateError::Inverted {
                        overall: overall_wpm,
                        character: char_wpm,
                    });
                }
                check_wpm(overall_wpm)?;
                check_wpm(char_wpm)
            }
        }
    }
}

fn check_positive(wpm: f64) -> std::result::Result<(), RateError> {
    // NaN fails this comparison too
    if wpm > 0.0 {
        Ok(())
    } else {
        Err(RateError::NonPositive(wpm))
    }
}

fn check_wpm(wpm: f64) -> std::result::Result<(), RateError> {
    check_positive(wpm)?;
    if wpm > MAX_WPM {
        return Err(RateError::TooFast(wpm));
    }
    if NANOS_PER_MINUTE / wpm > MAX_WORD_NANOS as f64 {
        return Err(RateError::TooSlow(wpm));
    }
    Ok(())
}

/// Nanoseconds in one PARIS at `wpm`
fn word_nanos(wpm: f64) -> u64 {
    (NANOS_PER_MINUTE / wpm).round() as u64
}

/// The 50-nanosecond bucket a word at `wpm` should land in
fn unit_bucket(wpm: f64) -> u64 {
    (NANOS_PER_UNIT_MINUTE / wpm).round() as u64
}

fn bucket_of(word: u64) -> u64 {
    (word as f64 / PARIS_UNITS as f64).round() as u64
}

/// Greedily lengthen the 3-unit and 7-unit intervals by at most 6 ns in
/// total, two nanoseconds on the longer one for every one on the shorter,
/// while `fits` still holds.
fn distribute_remainder(three: &mut u64, seven: &mut u64, fits: impl Fn(u64, u64) -> bool) {
    let mut plus3 = 0;
    let mut plus7 = 0;
    while fits(*three, *seven) && plus7 < MAX_WORD_GAP_CORRECTION {
        if plus7 < 2 * plus3 + 2 {
            plus7 += 1;
            *seven += 1;
        } else {
            plus3 += 1;
            *three += 1;
        }
    }
}

// ============================================================================
// Standard timing
// ============================================================================

/// Single-rate timing: element gap, dot, letter gap, dash and word gap
/// hold the ratio 1:1:3:3:7
#[derive(Debug, Clone, PartialEq)]
pub struct StandardTiming {
    wpm: f64,
    unit: u64,
    three_units: u64,
    seven_units: u64,
}

impl Default for StandardTiming {
    fn default() -> Self {
        let (unit, three_units, seven_units) = standard_units(DEFAULT_STANDARD_WPM);
        Self {
            wpm: DEFAULT_STANDARD_WPM,
            unit,
            three_units,
            seven_units,
        }
    }
}

impl StandardTiming {
    pub fn new(wpm: f64) -> Result<Self> {
        let mut timing = Self::default();
        timing.set_wpm(wpm)?;
        Ok(timing)
    }

    pub fn wpm(&self) -> f64 {
        self.wpm
    }

    /// Recompute every duration for `wpm`. On error nothing changes.
    pub fn set_wpm(&mut self, wpm: f64) -> Result<()> {
        check_wpm(wpm)?;
        let (unit, three_units, seven_units) = standard_units(wpm);
        *self = Self {
            wpm,
            unit,
            three_units,
            seven_units,
        };
        debug!(wpm, unit, three_units, seven_units, "Standard timing recomputed");
        Ok(())
    }

    /// Length of one PARIS as actually keyed
    pub fn word_duration(&self) -> Duration {
        Duration::from_nanos(19 * self.unit + 8 * self.three_units + self.seven_units)
    }
}

/// Returns the 1-, 3- and 7-unit durations for a validated `wpm`
fn standard_units(wpm: f64) -> (u64, u64, u64) {
    let word = word_nanos(wpm);
    let mut unit = word / PARIS_UNITS;
    let mut three = 3 * unit;
    let mut seven = 7 * unit;

    // PARIS: 19 one-unit intervals, 8 three-unit intervals, one word gap
    distribute_remainder(&mut three, &mut seven, |three, seven| {
        word > 19 * unit + 8 * three + seven
    });

    if unit_bucket(wpm) > bucket_of(19 * unit + 8 * three + seven) {
        unit += 1;
        three = 3 * unit;
        seven = 7 * unit;
    }

    (unit, three, seven)
}

impl MorseTiming for StandardTiming {
    fn duration_of(&self, kind: IntervalKind) -> Duration {
        let nanos = match kind {
            IntervalKind::Dot | IntervalKind::IntraSymbolGap => self.unit,
            IntervalKind::Dash | IntervalKind::LetterGap => self.three_units,
            IntervalKind::WordGap => self.seven_units,
        };
        Duration::from_nanos(nanos)
    }
}

// ============================================================================
// Farnsworth timing
// ============================================================================

/// Dual-rate timing. Characters keep the rhythm of `char_wpm` (element gap,
/// dot and dash at 1:1:3) while letter and word gaps (3:7) are stretched
/// so the overall rate comes out at `overall_wpm`.
#[derive(Debug, Clone, PartialEq)]
pub struct FarnsworthTiming {
    overall_wpm: f64,
    char_wpm: f64,
    unit: u64,
    three_units: u64,
    letter_gap: u64,
    word_gap: u64,
}

impl Default for FarnsworthTiming {
    fn default() -> Self {
        let units = farnsworth_units(DEFAULT_FARNSWORTH_WPM, DEFAULT_CHARACTER_WPM);
        Self::from_units(DEFAULT_FARNSWORTH_WPM, DEFAULT_CHARACTER_WPM, units)
    }
}

impl FarnsworthTiming {
    pub fn new(overall_wpm: f64, char_wpm: f64) -> Result<Self> {
        let mut timing = Self::default();
        timing.set_wpm(overall_wpm, char_wpm)?;
        Ok(timing)
    }

    /// See [`RateConfig::farnsworth`] for the implied character rate
    pub fn with_overall(wpm: f64) -> Result<Self> {
        let mut timing = Self::default();
        timing.set_overall_wpm(wpm)?;
        Ok(timing)
    }

    pub fn overall_wpm(&self) -> f64 {
        self.overall_wpm
    }

    pub fn char_wpm(&self) -> f64 {
        self.char_wpm
    }

    pub fn set_overall_wpm(&mut self, wpm: f64) -> Result<()> {
        self.set_wpm(wpm, wpm.max(DEFAULT_CHARACTER_WPM))
    }

    /// Recompute every duration. On error nothing changes.
    pub fn set_wpm(&mut self, overall_wpm: f64, char_wpm: f64) -> Result<()> {
        RateConfig::Farnsworth {
            overall_wpm,
            char_wpm,
        }
        .validate()?;
        let units = farnsworth_units(overall_wpm, char_wpm);
        *self = Self::from_units(overall_wpm, char_wpm, units);
        debug!(
            overall_wpm,
            char_wpm,
            unit = self.unit,
            letter_gap = self.letter_gap,
            word_gap = self.word_gap,
            "Farnsworth timing recomputed"
        );
        Ok(())
    }

    /// Length of one PARIS as actually keyed
    pub fn word_duration(&self) -> Duration {
        Duration::from_nanos(
            19 * self.unit + 4 * self.three_units + 4 * self.letter_gap + self.word_gap,
        )
    }

    fn from_units(overall_wpm: f64, char_wpm: f64, units: FarnsworthUnits) -> Self {
        Self {
            overall_wpm,
            char_wpm,
            unit: units.unit,
            three_units: units.three_units,
            letter_gap: units.letter_gap,
            word_gap: units.word_gap,
        }
    }
}

struct FarnsworthUnits {
    unit: u64,
    three_units: u64,
    letter_gap: u64,
    word_gap: u64,
}

fn farnsworth_units(overall_wpm: f64, char_wpm: f64) -> FarnsworthUnits {
    // Character rhythm: PARIS at char_wpm is 38 one-unit and 4 dash intervals
    let char_word = word_nanos(char_wpm);
    let mut unit = char_word / PARIS_UNITS;
    let mut three_units = 3 * unit;
    let mut plus3 = 0;
    while char_word > 38 * unit + 4 * three_units && plus3 < MAX_DASH_CORRECTION {
        plus3 += 1;
        three_units += 1;
    }
    if unit_bucket(char_wpm) > bucket_of(38 * unit + 4 * three_units) {
        unit += 1;
        three_units = 3 * unit;
    }

    // Whatever the symbols of PARIS leave of one overall word goes to the
    // four letter gaps and the word gap, 19 gap-units in all
    let symbols = 19 * unit + 4 * three_units;
    let gap_time = word_nanos(overall_wpm).saturating_sub(symbols);
    let gap_unit = gap_time / 19;
    let mut letter_gap = 3 * gap_unit;
    let mut word_gap = 7 * gap_unit;
    distribute_remainder(&mut letter_gap, &mut word_gap, |letter, word| {
        gap_time > 4 * letter + word
    });
    if unit_bucket(overall_wpm) > bucket_of(symbols + 4 * letter_gap + word_gap) {
        letter_gap = 3 * (gap_unit + 1);
        word_gap = 7 * (gap_unit + 1);
    }

    FarnsworthUnits {
        unit,
        three_units,
        letter_gap,
        word_gap,
    }
}

impl MorseTiming for FarnsworthTiming {
    fn duration_of(&self, kind: IntervalKind) -> Duration {
        let nanos = match kind {
            IntervalKind::Dot | IntervalKind::IntraSymbolGap => self.unit,
            IntervalKind::Dash => self.three_units,
            IntervalKind::LetterGap => self.letter_gap,
            IntervalKind::WordGap => self.word_gap,
        };
        Duration::from_nanos(nanos)
    }
}

// ============================================================================
// Timing model
// ============================================================================

/// Either timing, selected and reconfigured through a [`RateConfig`]
#[derive(Debug, Clone, PartialEq)]
pub enum TimingModel {
    Standard(StandardTiming),
    Farnsworth(FarnsworthTiming),
}

impl Default for TimingModel {
    fn default() -> Self {
        Self::Standard(StandardTiming::default())
    }
}

impl TimingModel {
    pub fn new(rate: RateConfig) -> Result<Self> {
        match rate {
            RateConfig::Standard { wpm } => StandardTiming::new(wpm).map(Self::Standard),
            RateConfig::Farnsworth {
                overall_wpm,
                char_wpm,
            } => FarnsworthTiming::new(overall_wpm, char_wpm).map(Self::Farnsworth),
        }
    }

    pub fn rate(&self) -> RateConfig {
        match self {
            Self::Standard(t) => RateConfig::Standard { wpm: t.wpm() },
            Self::Farnsworth(t) => RateConfig::Farnsworth {
                overall_wpm: t.overall_wpm(),
                char_wpm: t.char_wpm(),
            },
        }
    }

    /// Replace the rate, switching timing kind if needed. The new durations
    /// are computed in full before anything is replaced, so a rejected rate
    /// leaves the model as it was.
    pub fn set_rate(&mut self, rate: RateConfig) -> Result<()> {
        *self = Self::new(rate)?;
        Ok(())
    }

    pub fn word_duration(&self) -> Duration {
        match self {
            Self::Standard(t) => t.word_duration(),
            Self::Farnsworth(t) => t.word_duration(),
        }
    }
}

impl MorseTiming for TimingModel {
    fn duration_of(&self, kind: IntervalKind) -> Duration {
        match self {
            Self::Standard(t) => t.duration_of(kind),
            Self::Farnsworth(t) => t.duration_of(kind),
        }
    }
}

impl TryFrom<RateConfig> for TimingModel {
    type Error = MorseError;

    fn try_from(rate: RateConfig) -> Result<Self> {
        Self::new(rate)
    }
}
