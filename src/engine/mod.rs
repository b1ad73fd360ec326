//! Puzzle engine
//!
//! Board state, selection and judging, progress tracking, focus navigation
//! and the timed feedback that ties them together. The engine accepts
//! discrete intents and exposes state; rendering is left to the caller.

mod board;
mod game;
mod judge;
mod navigator;
mod phase;
mod round;
mod selection;
mod summary;
mod timers;

pub use board::Board;
pub use game::{Game, Intent};
pub use judge::{Verdict, judge};
pub use navigator::{NavAction, NavInput, resolve};
pub use phase::{LossReason, Phase};
pub use round::{Round, SolveRecord};
pub use selection::Selection;
pub use summary::endgame_group_order;
pub use timers::{Fired, TimerKind, TimerQueue};
