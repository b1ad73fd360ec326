//! Submission judging
//!
//! Classifies four picked tiles as a correct group or a miss, and flags the
//! "one away" case where three of the four share a group.

use crate::core::{GROUP_SIZE, GroupId};
use rustc_hash::FxHashMap;

/// Outcome of judging a full selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// All four tiles belong to this not-yet-solved group
    Correct(GroupId),
    /// Not a group; `near_miss` when exactly three share a group
    Incorrect { near_miss: bool },
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct(_))
    }
}

/// Judge the groups of four picked tiles against the groups already solved
///
/// The candidate group is the group of the first pick.
///
/// # Examples
/// ```
/// use connections::core::GroupId;
/// use connections::engine::{Verdict, judge};
///
/// let g = GroupId::new;
/// assert_eq!(judge([g(1), g(1), g(1), g(1)], &[]), Verdict::Correct(g(1)));
/// assert_eq!(
///     judge([g(1), g(1), g(2), g(1)], &[]),
///     Verdict::Incorrect { near_miss: true }
/// );
/// ```
#[must_use]
pub fn judge(picked: [GroupId; GROUP_SIZE], solved: &[GroupId]) -> Verdict {
    let candidate = picked[0];
    if picked.iter().all(|&g| g == candidate) && !solved.contains(&candidate) {
        return Verdict::Correct(candidate);
    }

    Verdict::Incorrect {
        near_miss: is_near_miss(&picked),
    }
}

/// True when some group occurs exactly three times among the picks
fn is_near_miss(picked: &[GroupId]) -> bool {
    let mut counts: FxHashMap<GroupId, u8> = FxHashMap::default();
    for &group in picked {
        *counts.entry(group).or_insert(0) += 1;
    }
    counts.values().any(|&count| count == 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(id: u8) -> GroupId {
        GroupId::new(id)
    }

    #[test]
    fn four_of_a_group_is_correct() {
        assert_eq!(judge([g(0); 4], &[]), Verdict::Correct(g(0)));
        assert_eq!(judge([g(3); 4], &[g(0), g(1)]), Verdict::Correct(g(3)));
    }

    #[test]
    fn already_solved_group_is_incorrect() {
        assert_eq!(
            judge([g(2); 4], &[g(2)]),
            Verdict::Incorrect { near_miss: false }
        );
    }

    #[test]
    fn three_and_one_is_near_miss() {
        for picked in [
            [g(0), g(0), g(0), g(1)],
            [g(1), g(0), g(0), g(0)],
            [g(2), g(3), g(2), g(2)],
        ] {
            assert_eq!(
                judge(picked, &[]),
                Verdict::Incorrect { near_miss: true },
                "{picked:?}"
            );
        }
    }

    #[test]
    fn two_and_two_is_plain_miss() {
        assert_eq!(
            judge([g(0), g(0), g(1), g(1)], &[]),
            Verdict::Incorrect { near_miss: false }
        );
    }

    #[test]
    fn all_different_is_plain_miss() {
        assert_eq!(
            judge([g(0), g(1), g(2), g(3)], &[]),
            Verdict::Incorrect { near_miss: false }
        );
    }

    #[test]
    fn two_one_one_is_plain_miss() {
        assert!(!judge([g(0), g(0), g(1), g(2)], &[]).is_correct());
        assert_eq!(
            judge([g(0), g(0), g(1), g(2)], &[]),
            Verdict::Incorrect { near_miss: false }
        );
    }
}
