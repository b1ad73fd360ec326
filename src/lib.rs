//! Connections
//!
//! A "find the four groups of four" word puzzle: the engine that runs a round
//! plus terminal front ends for playing it.
//!
//! # Quick Start
//!
//! ```rust
//! use connections::config::GameConfig;
//! use connections::engine::{Game, Intent};
//! use std::time::Duration;
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7));
//!
//! // Pick the four tiles of the first group and submit them
//! let picks: Vec<usize> = game
//!     .round()
//!     .tiles()
//!     .iter()
//!     .enumerate()
//!     .filter(|(_, t)| t.group().index() == 0)
//!     .map(|(i, _)| i)
//!     .collect();
//! for i in picks {
//!     game.dispatch(Intent::Select(i));
//! }
//! game.dispatch(Intent::Submit);
//!
//! // The group lands once the collapse animation finishes
//! game.advance(Duration::from_millis(700));
//! assert_eq!(game.round().solved().len(), 1);
//! ```

// Core domain types
pub mod core;

// Puzzle content per mode
pub mod content;

// Game rules, timers and session
pub mod engine;

// Runtime settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
