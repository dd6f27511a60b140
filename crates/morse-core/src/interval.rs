//! Interval kinds: the five on/off building blocks of Morse

use serde::{Deserialize, Serialize};

/// Kind of a single Morse interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalKind {
    /// Minimum-length "on" interval
    Dot,
    /// Medium-length "on" interval
    Dash,
    /// Minimum-length "off" interval between elements of one symbol
    IntraSymbolGap,
    /// Medium-length "off" interval between symbols of one word
    LetterGap,
    /// Maximum-length "off" interval ending a word or prosign
    WordGap,
}

impl IntervalKind {
    pub const ALL: [IntervalKind; 5] = [
        Self::Dot,
        Self::Dash,
        Self::IntraSymbolGap,
        Self::LetterGap,
        Self::WordGap,
    ];

    /// True if the signal is on while this interval plays
    pub fn is_active(self) -> bool {
        matches!(self, Self::Dot | Self::Dash)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Dash => "dash",
            Self::IntraSymbolGap => "intra-symbol gap",
            Self::LetterGap => "letter gap",
            Self::WordGap => "word gap",
        }
    }
}

/// One interval of a compiled sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    kind: IntervalKind,
}

impl Interval {
    pub const fn new(kind: IntervalKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> IntervalKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.kind.is_active()
    }
}

impl From<IntervalKind> for Interval {
    fn from(kind: IntervalKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_dots_and_dashes_are_active() {
        let active: Vec<_> = IntervalKind::ALL.iter().filter(|k| k.is_active()).collect();
        assert_eq!(active, vec![&IntervalKind::Dot, &IntervalKind::Dash]);
        assert!(!Interval::new(IntervalKind::WordGap).is_active());
    }
}
