//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{TextCommand, parse_command, run_simple};
pub use simulate::{RoundOutcome, SimulationResult, play_round, run_simulation};
