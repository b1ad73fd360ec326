//! Built-in content sets
//!
//! One fixed puzzle per mode, compiled into the binary.

use super::{ContentSet, GroupSpec};
use crate::core::GroupColor;

/// Everyday categories with no overlap between groups
pub const EASY: ContentSet = ContentSet {
    groups: [
        GroupSpec {
            name: "Colors",
            color: GroupColor::Lime,
            difficulty: 0,
            words: ["Red", "Blue", "Green", "Yellow"],
        },
        GroupSpec {
            name: "Fruits",
            color: GroupColor::Sand,
            difficulty: 1,
            words: ["Apple", "Banana", "Lime", "Grape"],
        },
        GroupSpec {
            name: "Animals",
            color: GroupColor::Rose,
            difficulty: 2,
            words: ["Dog", "Cat", "Horse", "Mouse"],
        },
        GroupSpec {
            name: "Cities",
            color: GroupColor::Sky,
            difficulty: 3,
            words: ["Paris", "London", "Tokyo", "Rome"],
        },
    ],
};

/// Categories with red herrings that fit more than one group
pub const HARD: ContentSet = ContentSet {
    groups: [
        GroupSpec {
            name: "Chess pieces",
            color: GroupColor::Lime,
            difficulty: 0,
            words: ["Pawn", "Rook", "Bishop", "Knight"],
        },
        GroupSpec {
            name: "Card games",
            color: GroupColor::Sand,
            difficulty: 1,
            words: ["Poker", "Bridge", "Snap", "Rummy"],
        },
        GroupSpec {
            name: "___fish",
            color: GroupColor::Rose,
            difficulty: 2,
            words: ["Sword", "Star", "Cat", "Gold"],
        },
        GroupSpec {
            name: "British bands",
            color: GroupColor::Sky,
            difficulty: 3,
            words: ["Queen", "Oasis", "Blur", "Pulp"],
        },
    ],
};
