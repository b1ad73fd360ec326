//! One round of play
//!
//! Synchronous state machine over the board: selection, judging, mistakes,
//! solves and the win/loss transitions. It knows nothing about time. Delayed
//! effects are split into a start (in [`Round::submit`]) and a finish
//! (`finish_collapse`, `clear_shake`, `clear_near_miss`) that the game calls
//! when the matching timer fires.

use super::navigator::{self, NavAction, NavInput};
use super::{Board, LossReason, Phase, Selection, Verdict, endgame_group_order, judge};
use crate::content::{Mode, Puzzle};
use crate::core::{Direction, GROUP_COUNT, GROUP_SIZE, GroupId, Tile};
use rand::Rng;

/// A correctly guessed group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveRecord {
    group: GroupId,
    tiles: [usize; GROUP_SIZE],
    order: u32,
}

impl SolveRecord {
    #[must_use]
    pub const fn new(group: GroupId, tiles: [usize; GROUP_SIZE], order: u32) -> Self {
        Self {
            group,
            tiles,
            order,
        }
    }

    #[inline]
    #[must_use]
    pub const fn group(&self) -> GroupId {
        self.group
    }

    /// Board positions of the group's tiles, in pick order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> [usize; GROUP_SIZE] {
        self.tiles
    }

    /// Zero-based position of this solve within the round
    #[inline]
    #[must_use]
    pub const fn order(&self) -> u32 {
        self.order
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingCollapse {
    group: GroupId,
    tiles: [usize; GROUP_SIZE],
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct Round {
    mode: Mode,
    board: Board,
    selection: Selection,
    mistakes: u32,
    max_mistakes: u32,
    phase: Phase,
    solved: Vec<SolveRecord>,
    focus: usize,
    pending_collapse: Option<PendingCollapse>,
    near_miss: bool,
    shake: bool,
    next_order: u32,
}

impl Round {
    /// Start a round on a freshly shuffled board
    pub fn new<R: Rng + ?Sized>(
        puzzle: &Puzzle,
        mode: Mode,
        max_mistakes: u32,
        rng: &mut R,
    ) -> Self {
        Self::with_board(Board::shuffled(puzzle, rng), mode, max_mistakes)
    }

    /// Start a round on a given board layout
    ///
    /// A mistake budget of zero is raised to one.
    #[must_use]
    pub fn with_board(mut board: Board, mode: Mode, max_mistakes: u32) -> Self {
        board.focus_only(0);
        Self {
            mode,
            board,
            selection: Selection::new(),
            mistakes: 0,
            max_mistakes: max_mistakes.max(1),
            phase: Phase::Playing,
            solved: Vec::with_capacity(GROUP_COUNT),
            focus: 0,
            pending_collapse: None,
            near_miss: false,
            shake: false,
            next_order: 0,
        }
    }

    // --- observable state ---

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        self.board.tiles()
    }

    #[inline]
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.board.tile(index)
    }

    /// Picked tile indices in pick order
    #[inline]
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        self.selection.as_slice()
    }

    #[inline]
    #[must_use]
    pub const fn mistakes(&self) -> u32 {
        self.mistakes
    }

    #[inline]
    #[must_use]
    pub const fn max_mistakes(&self) -> u32 {
        self.max_mistakes
    }

    /// Wrong guesses still allowed
    #[inline]
    #[must_use]
    pub const fn mistakes_left(&self) -> u32 {
        self.max_mistakes.saturating_sub(self.mistakes)
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Solved groups in solve order
    #[inline]
    #[must_use]
    pub fn solved(&self) -> &[SolveRecord] {
        &self.solved
    }

    #[inline]
    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// Tiles currently collapsing into a solved group
    #[must_use]
    pub fn pending_collapse(&self) -> &[usize] {
        self.pending_collapse
            .as_ref()
            .map_or(&[], |pending| pending.tiles.as_slice())
    }

    #[inline]
    #[must_use]
    pub const fn is_collapsing(&self) -> bool {
        self.pending_collapse.is_some()
    }

    /// "One away" hint is showing
    #[inline]
    #[must_use]
    pub const fn near_miss(&self) -> bool {
        self.near_miss
    }

    /// Wrong-guess shake is showing
    #[inline]
    #[must_use]
    pub const fn shake(&self) -> bool {
        self.shake
    }

    /// Accessible label for a tile
    #[must_use]
    pub fn label(&self, index: usize) -> Option<String> {
        self.board.tile(index).map(Tile::label)
    }

    /// Group ids for the end-of-round reveal
    #[must_use]
    pub fn endgame_group_order(&self) -> Vec<GroupId> {
        endgame_group_order(&self.solved)
    }

    #[must_use]
    pub fn is_group_solved(&self, group: GroupId) -> bool {
        self.solved.iter().any(|r| r.group == group)
    }

    // --- selection & judging ---

    /// Pick or unpick a tile
    ///
    /// Ignored outside `Playing`, for solved or collapsing tiles, for indices
    /// off the board, and for a fifth pick.
    pub fn toggle_select(&mut self, index: usize) -> bool {
        if !self.phase.is_playing() {
            return false;
        }
        let Some(tile) = self.board.tile_mut(index) else {
            return false;
        };
        if !tile.is_selectable() {
            return false;
        }

        if self.selection.remove(index) {
            tile.set_selected(false);
            true
        } else if self.selection.insert(index) {
            tile.set_selected(true);
            true
        } else {
            false
        }
    }

    /// Whether [`Round::submit`] would be accepted
    ///
    /// Needs four picks, a round in play, no collapse running and no shake
    /// showing.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.selection.is_full()
            && self.phase.is_playing()
            && self.pending_collapse.is_none()
            && !self.shake
    }

    /// Judge the current four picks
    ///
    /// Returns `None` when the submission is not allowed. On a correct guess
    /// the tiles start collapsing and stay picked until
    /// [`Round::finish_collapse`]. On a wrong guess the mistake is counted at
    /// once and the shake starts; running out of mistakes loses the round and
    /// clears the picks immediately.
    pub fn submit(&mut self) -> Option<Verdict> {
        if !self.can_submit() {
            return None;
        }
        let picked = self.selection.as_group()?;

        let groups = picked.map(|i| self.board.tiles()[i].group());
        let solved: Vec<GroupId> = self.solved.iter().map(|r| r.group).collect();
        let verdict = judge(groups, &solved);

        match verdict {
            Verdict::Correct(group) => {
                for &i in &picked {
                    if let Some(tile) = self.board.tile_mut(i) {
                        tile.begin_collapse();
                    }
                }
                self.pending_collapse = Some(PendingCollapse {
                    group,
                    tiles: picked,
                });
            }
            Verdict::Incorrect { near_miss } => {
                self.shake = true;
                self.near_miss = near_miss;
                self.mistakes += 1;
                if self.mistakes >= self.max_mistakes {
                    self.phase = Phase::Lost(LossReason::OutOfMistakes);
                    self.clear_selection();
                }
            }
        }

        Some(verdict)
    }

    /// Land a pending collapse
    ///
    /// While playing, the tiles become solved, a [`SolveRecord`] is added and
    /// the fourth solve wins the round. If the round already ended (the player
    /// gave up mid-animation) the tiles just stop animating and nothing is
    /// recorded. Returns the solved group, if any.
    pub fn finish_collapse(&mut self) -> Option<GroupId> {
        let pending = self.pending_collapse.take()?;
        self.clear_selection();

        if !self.phase.is_playing() {
            for &i in &pending.tiles {
                if let Some(tile) = self.board.tile_mut(i) {
                    tile.cancel_collapse();
                }
            }
            return None;
        }

        for &i in &pending.tiles {
            if let Some(tile) = self.board.tile_mut(i) {
                tile.finish_collapse();
            }
        }
        self.solved
            .push(SolveRecord::new(pending.group, pending.tiles, self.next_order));
        self.next_order += 1;

        if self.solved.len() == GROUP_COUNT {
            self.phase = Phase::Won;
        }
        Some(pending.group)
    }

    /// End the shake and drop the picks
    pub fn clear_shake(&mut self) {
        self.shake = false;
        self.clear_selection();
    }

    /// Hide the "one away" hint
    pub const fn clear_near_miss(&mut self) {
        self.near_miss = false;
    }

    /// Give up: the round is lost and the picks are dropped
    pub fn give_up(&mut self) -> bool {
        if !self.phase.is_playing() {
            return false;
        }
        self.phase = Phase::Lost(LossReason::GaveUp);
        self.clear_selection();
        true
    }

    /// Shuffle the unsolved tiles
    ///
    /// Ignored outside `Playing` or while a collapse runs. Drops the picks;
    /// the cursor keeps its index.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.phase.is_playing() || self.pending_collapse.is_some() {
            return false;
        }
        self.board.shuffle_unsolved(rng);
        self.clear_selection();
        self.board.focus_only(self.focus);
        true
    }

    // --- focus ---

    /// Apply a cursor input while playing
    pub fn navigate(&mut self, input: NavInput) -> bool {
        if !self.phase.is_playing() {
            return false;
        }
        match navigator::resolve(&self.board, self.focus, input) {
            NavAction::Focus(target) => {
                self.focus = target;
                self.board.focus_only(target);
                true
            }
            NavAction::Toggle(index) => self.toggle_select(index),
            NavAction::Stay => false,
        }
    }

    pub fn move_focus(&mut self, direction: Direction) -> bool {
        self.navigate(NavInput::Move(direction))
    }

    /// Toggle the tile under the cursor
    pub fn confirm(&mut self) -> bool {
        self.navigate(NavInput::Confirm)
    }

    fn clear_selection(&mut self) {
        self.selection.take();
        self.board.clear_selected();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TILE_COUNT;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Easy content in definition order: group g owns tiles 4g..4g+4
    fn ordered_round() -> Round {
        let puzzle = Puzzle::for_mode(Mode::Easy);
        Round::with_board(Board::ordered(&puzzle), Mode::Easy, 4)
    }

    fn pick(round: &mut Round, indices: &[usize]) {
        for &i in indices {
            assert!(round.toggle_select(i), "pick {i} refused");
        }
    }

    fn solve(round: &mut Round, group: usize) {
        let base = group * 4;
        pick(round, &[base, base + 1, base + 2, base + 3]);
        assert!(round.submit().is_some_and(Verdict::is_correct));
        assert!(round.finish_collapse().is_some());
    }

    fn miss(round: &mut Round) -> Verdict {
        pick(round, &[0, 4, 8, 12]);
        let verdict = round.submit().unwrap();
        round.clear_shake();
        verdict
    }

    #[test]
    fn new_round_starts_clean() {
        let round = Round::new(
            &Puzzle::for_mode(Mode::Hard),
            Mode::Hard,
            4,
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(round.tiles().len(), TILE_COUNT);
        assert_eq!(round.phase(), Phase::Playing);
        assert_eq!(round.mistakes(), 0);
        assert_eq!(round.focus(), 0);
        assert!(round.tiles()[0].is_focused());
        assert!(round.solved().is_empty());
        assert!(round.selection().is_empty());
        assert_eq!(round.board().group_sizes(), [4, 4, 4, 4]);
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut round = ordered_round();
        assert!(round.toggle_select(3));
        assert!(round.tiles()[3].is_selected());
        assert!(round.toggle_select(3));
        assert!(!round.tiles()[3].is_selected());
        assert!(round.selection().is_empty());
    }

    #[test]
    fn fifth_pick_is_ignored() {
        let mut round = ordered_round();
        pick(&mut round, &[0, 1, 2, 3]);
        assert!(!round.toggle_select(4));
        assert!(!round.tiles()[4].is_selected());
        assert_eq!(round.selection(), &[0, 1, 2, 3]);
    }

    #[test]
    fn out_of_range_pick_is_ignored() {
        let mut round = ordered_round();
        assert!(!round.toggle_select(TILE_COUNT));
    }

    #[test]
    fn submit_requires_four() {
        let mut round = ordered_round();
        pick(&mut round, &[0, 1, 2]);
        assert!(!round.can_submit());
        assert_eq!(round.submit(), None);
        assert_eq!(round.mistakes(), 0);
    }

    #[test]
    fn correct_guess_collapses_then_solves() {
        let mut round = ordered_round();
        pick(&mut round, &[0, 1, 2, 3]);
        assert_eq!(round.submit(), Some(Verdict::Correct(GroupId::new(0))));

        assert_eq!(round.pending_collapse(), &[0, 1, 2, 3]);
        assert!(round.tiles()[0].is_animating());
        assert!(!round.tiles()[0].is_selected());
        assert!(!round.can_submit());
        assert!(!round.toggle_select(1));

        assert_eq!(round.finish_collapse(), Some(GroupId::new(0)));
        assert!(round.pending_collapse().is_empty());
        assert!(round.selection().is_empty());
        assert!((0..4).all(|i| round.tiles()[i].is_solved()));
        assert!((0..4).all(|i| !round.tiles()[i].is_animating()));
        assert_eq!(
            round.solved(),
            &[SolveRecord::new(GroupId::new(0), [0, 1, 2, 3], 0)]
        );
    }

    #[test]
    fn wrong_guess_counts_mistake_immediately() {
        let mut round = ordered_round();
        pick(&mut round, &[0, 1, 2, 4]);
        assert_eq!(round.submit(), Some(Verdict::Incorrect { near_miss: true }));
        assert_eq!(round.mistakes(), 1);
        assert!(round.shake());
        assert!(round.near_miss());
        assert_eq!(round.selection().len(), 4);

        round.clear_shake();
        assert!(!round.shake());
        assert!(round.selection().is_empty());
        assert!(round.tiles().iter().all(|t| !t.is_selected()));
        assert!(round.near_miss());

        round.clear_near_miss();
        assert!(!round.near_miss());
    }

    #[test]
    fn plain_miss_has_no_hint() {
        let mut round = ordered_round();
        assert_eq!(miss(&mut round), Verdict::Incorrect { near_miss: false });
        assert!(!round.near_miss());
    }

    #[test]
    fn submit_blocked_while_shaking() {
        let mut round = ordered_round();
        pick(&mut round, &[0, 4, 8, 12]);
        round.submit();
        assert!(!round.can_submit());
        assert_eq!(round.submit(), None);
        assert_eq!(round.mistakes(), 1);
    }

    #[test]
    fn running_out_of_mistakes_loses() {
        let mut round = ordered_round();
        for _ in 0..3 {
            miss(&mut round);
        }
        assert!(round.phase().is_playing());

        pick(&mut round, &[0, 4, 8, 12]);
        round.submit();
        assert_eq!(round.phase(), Phase::Lost(LossReason::OutOfMistakes));
        assert_eq!(round.mistakes(), 4);
        assert!(round.selection().is_empty());
        assert!(round.tiles().iter().all(|t| !t.is_selected()));

        // still shaking, clearing afterwards is harmless
        assert!(round.shake());
        round.clear_shake();
        assert_eq!(round.mistakes(), 4);
    }

    #[test]
    fn lost_round_refuses_everything() {
        let mut round = ordered_round();
        assert!(round.give_up());
        assert!(!round.give_up());
        assert!(!round.toggle_select(0));
        assert!(!round.move_focus(Direction::Right));
        assert!(!round.confirm());
        assert!(!round.shuffle(&mut StdRng::seed_from_u64(0)));
        assert_eq!(round.phase(), Phase::Lost(LossReason::GaveUp));
    }

    #[test]
    fn give_up_clears_picks() {
        let mut round = ordered_round();
        pick(&mut round, &[1, 2]);
        round.give_up();
        assert!(round.selection().is_empty());
        assert!(!round.tiles()[1].is_selected());
    }

    #[test]
    fn four_solves_win() {
        let mut round = ordered_round();
        for group in [2, 0, 3] {
            solve(&mut round, group);
            assert!(round.phase().is_playing());
        }
        solve(&mut round, 1);
        assert_eq!(round.phase(), Phase::Won);
        assert_eq!(round.solved().len(), 4);
        let orders: Vec<u32> = round.solved().iter().map(SolveRecord::order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);
    }

    #[test]
    fn endgame_order_follows_solves() {
        let mut round = ordered_round();
        for group in [2, 0, 3] {
            solve(&mut round, group);
        }
        round.give_up();
        let order: Vec<usize> = round
            .endgame_group_order()
            .into_iter()
            .map(GroupId::index)
            .collect();
        assert_eq!(order, vec![2, 0, 3, 1]);
    }

    #[test]
    fn collapse_after_give_up_records_nothing() {
        let mut round = ordered_round();
        pick(&mut round, &[4, 5, 6, 7]);
        round.submit();
        round.give_up();

        assert_eq!(round.finish_collapse(), None);
        assert!(round.solved().is_empty());
        assert!((4..8).all(|i| !round.tiles()[i].is_solved()));
        assert!((4..8).all(|i| !round.tiles()[i].is_animating()));
        assert_eq!(round.phase(), Phase::Lost(LossReason::GaveUp));
    }

    #[test]
    fn mistakes_never_exceed_max() {
        let mut round = ordered_round();
        for _ in 0..10 {
            if round.phase().is_over() {
                break;
            }
            miss(&mut round);
        }
        assert_eq!(round.mistakes(), round.max_mistakes());
        assert_eq!(round.mistakes_left(), 0);
    }

    #[test]
    fn navigation_moves_focus_flag() {
        let mut round = ordered_round();
        assert!(round.move_focus(Direction::Left));
        assert_eq!(round.focus(), 3);
        assert!(round.tiles()[3].is_focused());
        assert!(!round.tiles()[0].is_focused());
    }

    #[test]
    fn navigation_refuses_solved_target() {
        let mut round = ordered_round();
        solve(&mut round, 1);
        // focus 0 -> down is 4, solved
        assert!(!round.move_focus(Direction::Down));
        assert_eq!(round.focus(), 0);
    }

    #[test]
    fn confirm_toggles_focused_tile() {
        let mut round = ordered_round();
        round.move_focus(Direction::Down);
        assert!(round.confirm());
        assert_eq!(round.selection(), &[4]);
        assert_eq!(round.focus(), 4);
        assert!(round.confirm());
        assert!(round.selection().is_empty());
    }

    #[test]
    fn shuffle_keeps_solved_and_clears_picks() {
        let mut round = ordered_round();
        solve(&mut round, 0);
        pick(&mut round, &[8, 9]);
        round.move_focus(Direction::Down);

        let before: Vec<Tile> = round.tiles().to_vec();
        assert!(round.shuffle(&mut StdRng::seed_from_u64(11)));

        assert_eq!(&round.tiles()[..4], &before[..4]);
        assert!(round.selection().is_empty());
        assert!(round.tiles().iter().all(|t| !t.is_selected()));
        assert_eq!(round.focus(), 4);
        let focused: Vec<usize> = (0..TILE_COUNT)
            .filter(|&i| round.tiles()[i].is_focused())
            .collect();
        assert_eq!(focused, vec![4]);
    }

    #[test]
    fn shuffle_blocked_during_collapse() {
        let mut round = ordered_round();
        pick(&mut round, &[0, 1, 2, 3]);
        round.submit();
        assert!(!round.shuffle(&mut StdRng::seed_from_u64(0)));
    }

    #[test]
    fn labels() {
        let mut round = ordered_round();
        solve(&mut round, 0);
        round.toggle_select(5);
        assert_eq!(round.label(0).as_deref(), Some("Red, solved"));
        assert_eq!(round.label(5).as_deref(), Some("Banana, selected"));
        assert_eq!(round.label(6).as_deref(), Some("Lime"));
        assert_eq!(round.label(99), None);
    }

    #[test]
    fn plain_miss_clears_near_miss_hint() {
        let mut round = ordered_round();
        pick(&mut round, &[0, 1, 2, 4]);
        round.submit();
        round.clear_shake();
        assert!(round.near_miss());

        assert_eq!(miss(&mut round), Verdict::Incorrect { near_miss: false });
        assert!(!round.near_miss());
    }

    #[test]
    fn zero_budget_allows_one_mistake() {
        let puzzle = Puzzle::for_mode(Mode::Easy);
        let mut round = Round::with_board(Board::ordered(&puzzle), Mode::Easy, 0);
        assert_eq!(round.max_mistakes(), 1);
        miss(&mut round);
        assert_eq!(round.mistakes(), 1);
        assert_eq!(round.phase(), Phase::Lost(LossReason::OutOfMistakes));
    }
}
