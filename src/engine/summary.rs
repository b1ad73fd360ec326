//! End-of-round group ordering

use super::SolveRecord;
use crate::core::GroupId;

/// Groups in the order they should be revealed at the end of a round
///
/// Solved groups first, in the order they were solved, then the remaining
/// groups in ascending id order.
///
/// # Examples
/// ```
/// use connections::core::GroupId;
/// use connections::engine::{SolveRecord, endgame_group_order};
///
/// let solved = [
///     SolveRecord::new(GroupId::new(2), [0, 1, 2, 3], 0),
///     SolveRecord::new(GroupId::new(0), [4, 5, 6, 7], 1),
/// ];
/// let order: Vec<usize> = endgame_group_order(&solved)
///     .into_iter()
///     .map(GroupId::index)
///     .collect();
/// assert_eq!(order, vec![2, 0, 1, 3]);
/// ```
#[must_use]
pub fn endgame_group_order(solved: &[SolveRecord]) -> Vec<GroupId> {
    let mut records: Vec<&SolveRecord> = solved.iter().collect();
    records.sort_by_key(|r| r.order());

    let mut order: Vec<GroupId> = records.iter().map(|r| r.group()).collect();
    let remaining: Vec<GroupId> = GroupId::all().filter(|g| !order.contains(g)).collect();
    order.extend(remaining);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(group: u8, order: u32) -> SolveRecord {
        SolveRecord::new(GroupId::new(group), [0; 4], order)
    }

    fn ids(order: &[GroupId]) -> Vec<usize> {
        order.iter().map(|g| g.index()).collect()
    }

    #[test]
    fn nothing_solved_is_natural_order() {
        assert_eq!(ids(&endgame_group_order(&[])), vec![0, 1, 2, 3]);
    }

    #[test]
    fn solved_in_order_then_remaining() {
        let solved = [record(2, 0), record(0, 1), record(3, 2)];
        assert_eq!(ids(&endgame_group_order(&solved)), vec![2, 0, 3, 1]);
    }

    #[test]
    fn solve_order_wins_over_ledger_position() {
        let solved = [record(1, 5), record(3, 2)];
        assert_eq!(ids(&endgame_group_order(&solved)), vec![3, 1, 0, 2]);
    }

    #[test]
    fn all_solved() {
        let solved = [record(3, 0), record(2, 1), record(1, 2), record(0, 3)];
        assert_eq!(ids(&endgame_group_order(&solved)), vec![3, 2, 1, 0]);
    }
}
