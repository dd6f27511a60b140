//! morse-services: Collaborators that key compiled Morse on a host, and
//! keyer configuration

pub mod config;
pub mod keying;
pub mod trace;
pub mod waiters;

pub use config::{
    config_path, load_config, load_config_from, save_config, save_config_to, ConfigError,
    KeyerConfig,
};
pub use keying::{KeyOutput, KeyingError, KeyingHandle, KeyingThread};
pub use trace::{TraceEvent, TraceRecorder, TraceSetter, TraceWaiter};
pub use waiters::{DeadlineWaiter, SleepWaiter};
