//! morse-core: Morse timing models, symbol tables and the play contract

mod error;
mod interval;
pub mod playback;
mod player;
mod sequence;
mod standard;
pub mod symbols;
pub mod timing;

pub use error::{MorseError, PlayError, RateError, Result, UnknownSymbol};
pub use interval::{Interval, IntervalKind};
pub use playback::{Playable, StateSetter, Waiter};
pub use player::MorsePlayer;
pub use sequence::Sequence;
pub use standard::{BuiltinStandard, Standard};
pub use symbols::{
    extended_international, international, SymbolEntry, SymbolKey, SymbolSpec, SymbolTable,
};
pub use timing::{FarnsworthTiming, MorseTiming, RateConfig, StandardTiming, TimingModel};
