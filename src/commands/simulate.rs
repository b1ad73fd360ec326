//! Simulate command
//!
//! Plays many rounds with a player that picks four random open tiles each
//! turn, and collects outcome statistics. Rounds run in parallel, one game per
//! task.

use crate::config::GameConfig;
use crate::engine::{Game, Phase, Verdict};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Mixed into each game seed so the player and the shuffle draw different streams
const PLAYER_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Outcome of one simulated round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub phase: Phase,
    pub mistakes: u32,
    pub groups_solved: usize,
    pub submissions: u32,
    pub near_misses: u32,
}

/// Aggregate of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
    pub near_misses: usize,
    /// Rounds by number of groups solved (0-4)
    pub solved_distribution: FxHashMap<usize, usize>,
    pub average_submissions: f64,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play a single round to its end with the random player
#[must_use]
pub fn play_round(config: &GameConfig, seed: u64) -> RoundOutcome {
    let mut game = Game::new(config.clone().with_seed(seed));
    let mut player = StdRng::seed_from_u64(seed ^ PLAYER_SALT);
    let settle = config.timings.collapse.max(config.timings.shake);

    let mut submissions = 0;
    let mut near_misses = 0;

    while game.round().phase().is_playing() {
        let mut open = game.round().board().unsolved_indices();
        open.shuffle(&mut player);
        for &i in open.iter().take(4) {
            game.select(i);
        }

        let Some(verdict) = game.submit() else {
            break;
        };
        submissions += 1;
        if verdict == (Verdict::Incorrect { near_miss: true }) {
            near_misses += 1;
        }
        game.advance(settle);
    }

    let round = game.round();
    RoundOutcome {
        phase: round.phase(),
        mistakes: round.mistakes(),
        groups_solved: round.solved().len(),
        submissions,
        near_misses,
    }
}

/// Run `rounds` simulated rounds, seeds `base_seed..base_seed + rounds`
#[must_use]
pub fn run_simulation(config: &GameConfig, rounds: usize, base_seed: u64) -> SimulationResult {
    println!("🎲 Simulating {rounds} rounds ({} mode)...", config.mode);

    let pb = ProgressBar::new(rounds as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let outcomes: Vec<RoundOutcome> = (0..rounds as u64)
        .into_par_iter()
        .map(|i| {
            let result = play_round(config, base_seed.wrapping_add(i));
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    summarize(&outcomes, duration)
}

fn summarize(outcomes: &[RoundOutcome], duration: Duration) -> SimulationResult {
    let rounds = outcomes.len();
    let won = outcomes.iter().filter(|o| o.phase.is_won()).count();
    let lost = outcomes.iter().filter(|o| o.phase.is_lost()).count();
    let near_misses = outcomes.iter().map(|o| o.near_misses as usize).sum();

    let mut solved_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for outcome in outcomes {
        *solved_distribution.entry(outcome.groups_solved).or_insert(0) += 1;
    }

    let total_submissions: u32 = outcomes.iter().map(|o| o.submissions).sum();
    let average_submissions = if rounds > 0 {
        f64::from(total_submissions) / rounds as f64
    } else {
        0.0
    };

    SimulationResult {
        rounds,
        won,
        lost,
        near_misses,
        solved_distribution,
        average_submissions,
        duration,
        rounds_per_second: rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Mode;

    #[test]
    fn every_round_ends() {
        let config = GameConfig::default();
        for seed in 0..50 {
            let outcome = play_round(&config, seed);
            assert!(outcome.phase.is_over(), "seed {seed} still playing");
            assert_eq!(outcome.phase.is_won(), outcome.groups_solved == 4);
            assert!(outcome.mistakes <= config.max_mistakes);
            assert_eq!(
                outcome.submissions as usize,
                outcome.groups_solved + outcome.mistakes as usize
            );
        }
    }

    #[test]
    fn rounds_are_reproducible() {
        let config = GameConfig::new(Mode::Hard);
        assert_eq!(play_round(&config, 17), play_round(&config, 17));
    }

    #[test]
    fn summary_counts_add_up() {
        let config = GameConfig::default();
        let result = run_simulation(&config, 40, 100);
        assert_eq!(result.rounds, 40);
        assert_eq!(result.won + result.lost, 40);
        assert_eq!(result.solved_distribution.values().sum::<usize>(), 40);
        assert!(result.average_submissions >= 4.0);
    }

    #[test]
    fn summarize_empty() {
        let result = summarize(&[], Duration::from_millis(1));
        assert_eq!(result.rounds, 0);
        assert!(result.average_submissions.abs() < f64::EPSILON);
    }
}
