//! A Morse standard: one timing model paired with one symbol table

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{MorseError, Result};
use crate::symbols::{self, SymbolTable};
use crate::timing::{RateConfig, TimingModel};

/// How fast and with which symbols text is keyed.
///
/// The symbol table is shared and never changes; only the timing model is
/// reconfigurable, through [`Standard::timing_mut`].
#[derive(Debug, Clone)]
pub struct Standard {
    timing: TimingModel,
    symbols: Arc<SymbolTable>,
}

impl Standard {
    pub fn new(timing: TimingModel, symbols: Arc<SymbolTable>) -> Self {
        Self { timing, symbols }
    }

    pub fn with_rate(rate: RateConfig, symbols: Arc<SymbolTable>) -> Result<Self> {
        Ok(Self::new(TimingModel::new(rate)?, symbols))
    }

    pub fn timing(&self) -> &TimingModel {
        &self.timing
    }

    pub fn timing_mut(&mut self) -> &mut TimingModel {
        &mut self.timing
    }

    pub fn symbols(&self) -> &Arc<SymbolTable> {
        &self.symbols
    }
}

/// The symbol sets shipped with the crate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinStandard {
    /// ITU-R M.1677-1 (2009)
    #[default]
    ItuRM1677,
    /// ITU-R plus common non-standard extensions
    ExtendedInternational,
}

impl BuiltinStandard {
    pub const ALL: [BuiltinStandard; 2] = [Self::ItuRM1677, Self::ExtendedInternational];

    /// Name used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            Self::ItuRM1677 => "itu-r-m1677",
            Self::ExtendedInternational => "extended-international",
        }
    }

    pub fn symbols(self) -> Arc<SymbolTable> {
        match self {
            Self::ItuRM1677 => symbols::international(),
            Self::ExtendedInternational => symbols::extended_international(),
        }
    }

    /// A fresh standard at the default single-rate timing
    pub fn standard(self) -> Standard {
        Standard::new(TimingModel::default(), self.symbols())
    }
}

impl fmt::Display for BuiltinStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinStandard {
    type Err = MorseError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MorseError::UnknownStandard(s.to_string()))
    }
}

impl From<BuiltinStandard> for Standard {
    fn from(builtin: BuiltinStandard) -> Self {
        builtin.standard()
    }
}
