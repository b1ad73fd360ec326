//! Delayed effects on a virtual clock
//!
//! The host advances the clock explicitly, so the same code runs against wall
//! time in the terminal UI and against exact durations in tests. Every timer
//! remembers the round generation it was scheduled for; the game drops timers
//! whose generation no longer matches instead of applying them to a newer
//! round.

use std::time::Duration;

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Correct group finishes collapsing into a solved row
    Collapse,
    /// Wrong-guess shake ends and the selection clears
    Shake,
    /// "One away" hint disappears
    NearMiss,
}

/// A timer that came due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub kind: TimerKind,
    pub generation: u64,
    pub due: Duration,
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: Duration,
    seq: u64,
    generation: u64,
    kind: TimerKind,
}

/// Pending timers ordered by due time
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    pending: Vec<Scheduled>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    #[inline]
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `kind` to fire `delay` from now
    ///
    /// A pending timer of the same kind and generation is replaced, so each
    /// kind has at most one live timer per round.
    pub fn schedule(&mut self, kind: TimerKind, generation: u64, delay: Duration) {
        self.cancel(kind, generation);
        self.pending.push(Scheduled {
            due: self.now + delay,
            seq: self.next_seq,
            generation,
            kind,
        });
        self.next_seq += 1;
    }

    /// Drop a pending timer; returns whether one existed
    pub fn cancel(&mut self, kind: TimerKind, generation: u64) -> bool {
        let before = self.pending.len();
        self.pending
            .retain(|t| !(t.kind == kind && t.generation == generation));
        self.pending.len() != before
    }

    #[must_use]
    pub fn is_pending(&self, kind: TimerKind, generation: u64) -> bool {
        self.pending
            .iter()
            .any(|t| t.kind == kind && t.generation == generation)
    }

    /// Number of timers waiting, of any generation
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Time until the earliest pending timer, if any
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|t| t.due.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward and take every timer that came due
    ///
    /// Returned timers are in firing order: earliest due first, ties in the
    /// order they were scheduled.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Fired> {
        self.now += elapsed;
        let now = self.now;

        let (mut due, waiting): (Vec<Scheduled>, Vec<Scheduled>) =
            self.pending.drain(..).partition(|t| t.due <= now);
        self.pending = waiting;

        due.sort_by_key(|t| (t.due, t.seq));
        due.into_iter()
            .map(|t| Fired {
                kind: t.kind,
                generation: t.generation,
                due: t.due,
            })
            .collect()
    }
}
