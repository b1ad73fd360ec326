//! Game session: routes player intents to the round and runs its timers
//!
//! The session owns the random source, the timer queue and a generation
//! counter. Each reset builds a new round and bumps the generation, so timers
//! left over from the old round are discarded when they come due.

use super::navigator::NavInput;
use super::timers::{Fired, TimerKind, TimerQueue};
use super::{Round, Verdict};
use crate::config::GameConfig;
use crate::content::{Mode, Puzzle};
use crate::core::{Direction, Group, GroupId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info, trace};

/// Something the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Select(usize),
    Submit,
    Shuffle,
    Move(Direction),
    /// Toggle the tile under the cursor
    Confirm,
    GiveUp,
    SetMode(Mode),
    Replay,
}

/// A puzzle session
pub struct Game<R = StdRng> {
    config: GameConfig,
    rng: R,
    puzzle: Puzzle,
    round: Round,
    timers: TimerQueue,
    generation: u64,
}

impl Game<StdRng> {
    /// Create a session, seeding the shuffle from the config or the OS
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Game<R> {
    /// Create a session with a caller-supplied random source
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let puzzle = Puzzle::for_mode(config.mode);
        Self::with_puzzle(config, puzzle, rng)
    }

    /// Create a session that plays `puzzle` instead of the mode's built-in set
    ///
    /// Replays keep the puzzle; switching mode loads the built-in set.
    pub fn with_puzzle(config: GameConfig, puzzle: Puzzle, mut rng: R) -> Self {
        let round = Round::new(&puzzle, config.mode, config.max_mistakes, &mut rng);
        info!(mode = %config.mode, "round started");
        Self {
            config,
            rng,
            puzzle,
            round,
            timers: TimerQueue::new(),
            generation: 0,
        }
    }

    /// Apply an intent; returns whether it changed anything
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        debug!(?intent, "intent");
        match intent {
            Intent::Select(index) => self.select(index),
            Intent::Submit => self.submit().is_some(),
            Intent::Shuffle => self.shuffle(),
            Intent::Move(direction) => self.navigate(NavInput::Move(direction)),
            Intent::Confirm => self.navigate(NavInput::Confirm),
            Intent::GiveUp => self.give_up(),
            Intent::SetMode(mode) => {
                self.set_mode(mode);
                true
            }
            Intent::Replay => {
                self.replay();
                true
            }
        }
    }

    pub fn select(&mut self, index: usize) -> bool {
        self.round.toggle_select(index)
    }

    /// Submit the four picks and schedule the feedback timers
    ///
    /// Returns the verdict, or `None` if submitting is not allowed right now.
    pub fn submit(&mut self) -> Option<Verdict> {
        let verdict = self.round.submit()?;
        let timings = self.config.timings;

        match verdict {
            Verdict::Correct(group) => {
                debug!(%group, "correct group");
                self.schedule(TimerKind::Collapse, timings.collapse);
            }
            Verdict::Incorrect { near_miss } => {
                debug!(
                    near_miss,
                    mistakes = self.round.mistakes(),
                    "incorrect group"
                );
                self.schedule(TimerKind::Shake, timings.shake);
                if near_miss {
                    self.schedule(TimerKind::NearMiss, timings.near_miss);
                } else {
                    self.timers.cancel(TimerKind::NearMiss, self.generation);
                }
                if self.round.phase().is_lost() {
                    info!(mistakes = self.round.mistakes(), "round lost");
                }
            }
        }
        Some(verdict)
    }

    pub fn shuffle(&mut self) -> bool {
        self.round.shuffle(&mut self.rng)
    }

    pub fn navigate(&mut self, input: NavInput) -> bool {
        self.round.navigate(input)
    }

    /// Give up the round; pending timers keep running
    pub fn give_up(&mut self) -> bool {
        let changed = self.round.give_up();
        if changed {
            info!("player gave up");
        }
        changed
    }

    /// Switch content set; always starts a new round
    pub fn set_mode(&mut self, mode: Mode) {
        self.reset(mode);
    }

    /// Start over on the same puzzle
    pub fn replay(&mut self) {
        self.restart();
    }

    /// Throw the round away and build a fresh one for `mode`'s built-in set
    pub fn reset(&mut self, mode: Mode) {
        self.config.mode = mode;
        self.puzzle = Puzzle::for_mode(mode);
        self.restart();
    }

    fn restart(&mut self) {
        self.generation += 1;
        let mode = self.config.mode;
        self.round = Round::new(
            &self.puzzle,
            mode,
            self.config.max_mistakes,
            &mut self.rng,
        );
        info!(%mode, generation = self.generation, "round reset");
    }

    /// Move the clock forward and apply every timer that came due
    ///
    /// Returns how many timers touched the current round.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let fired = self.timers.advance(elapsed);
        fired.into_iter().filter(|f| self.fire(*f)).count()
    }

    fn fire(&mut self, fired: Fired) -> bool {
        if fired.generation != self.generation {
            trace!(kind = ?fired.kind, generation = fired.generation, "dropping stale timer");
            return false;
        }
        debug!(kind = ?fired.kind, due_ms = fired.due.as_millis(), "timer fired");

        match fired.kind {
            TimerKind::Collapse => {
                if let Some(group) = self.round.finish_collapse() {
                    debug!(%group, solved = self.round.solved().len(), "group solved");
                    if self.round.phase().is_won() {
                        info!(mistakes = self.round.mistakes(), "round won");
                    }
                }
            }
            TimerKind::Shake => self.round.clear_shake(),
            TimerKind::NearMiss => self.round.clear_near_miss(),
        }
        true
    }

    fn schedule(&mut self, kind: TimerKind, delay: Duration) {
        self.timers.schedule(kind, self.generation, delay);
    }

    // --- observable state ---

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        self.puzzle.groups()
    }

    #[inline]
    #[must_use]
    pub fn group(&self, id: GroupId) -> &Group {
        self.puzzle.group(id)
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.round.mode()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Virtual time since the session started
    #[inline]
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.timers.now()
    }

    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether any timer for the current round is still waiting
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        [TimerKind::Collapse, TimerKind::Shake, TimerKind::NearMiss]
            .into_iter()
            .any(|kind| self.timers.is_pending(kind, self.generation))
    }

    /// Time until the next timer of any round comes due
    #[must_use]
    pub fn next_timer_in(&self) -> Option<Duration> {
        self.timers.next_due_in()
    }
}
