//! Game state types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::combat::EquippedDefense;
use crate::room::Room;

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Waiting for the player's next action.
    Ongoing,
    /// The dungeon was cleared.
    Won,
    /// The player died.
    Lost,
}

impl GameStatus {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// How the next monster is fought.
///
/// Under sword-and-shield rules these are the quick attack and the shield
/// attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackMode {
    /// Fight without the weapon or shield, taking the monster's value as
    /// damage (less the sword bonus).
    Bare,
    /// Fight with the equipped weapon or shield.
    Weapon,
}

/// Everything a presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Current health.
    pub health: i32,
    /// Health cap.
    pub max_health: i32,
    /// The room.
    pub room: Room,
    /// Equipped weapon or shield.
    pub defense: Option<EquippedDefense>,
    /// Monster most recently absorbed by the weapon or shield.
    pub absorbed: Option<Card>,
    /// Equipped sword.
    pub sword: Option<Card>,
    /// Discard pile, oldest first.
    pub discard: Vec<Card>,
    /// Cards left in the deck.
    pub deck_count: usize,
    /// Selected attack mode.
    pub attack_mode: Option<AttackMode>,
    /// Whether fleeing is currently allowed.
    pub flee_allowed: bool,
    /// Potion value drunk at full health.
    pub potion_overflow: u32,
    /// Game status.
    pub status: GameStatus,
    /// Current score.
    pub score: u32,
    /// Stored high score.
    pub high_score: u32,
}
