//! Action events and end-of-game results.

use crate::card::Card;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The deck ran out with no monsters left in the room.
    Won,
    /// Health dropped to zero or below.
    Lost,
}

/// Final tally of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameResult {
    /// How the game ended.
    pub outcome: Outcome,
    /// Final score: remaining health (at least 0) plus potion overflow.
    pub score: u32,
    /// Health when the game ended (may be negative).
    pub health: i32,
    /// Potion value drunk at full health.
    pub potion_overflow: u32,
    /// High score after this game was recorded.
    pub high_score: u32,
    /// Whether this game set a new high score.
    pub new_high_score: bool,
}

/// What a successful action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The chosen slot was empty; nothing happened.
    Ignored,
    /// A monster was fought without the weapon or shield.
    Fought {
        /// The monster.
        monster: Card,
        /// Damage taken.
        damage: u8,
    },
    /// The weapon or shield beat the monster and took on its strength.
    Absorbed {
        /// The monster.
        monster: Card,
    },
    /// The weapon or shield was overpowered once and took on the monster's strength.
    Trained {
        /// The monster.
        monster: Card,
        /// Damage taken.
        damage: u8,
    },
    /// The weapon or shield blocked the monster and broke.
    Consumed {
        /// The monster.
        monster: Card,
    },
    /// A weapon or shield was equipped.
    Equipped {
        /// The new weapon or shield.
        card: Card,
        /// The weapon or shield it replaced.
        replaced: Option<Card>,
    },
    /// A sword was equipped.
    SwordEquipped {
        /// The new sword.
        card: Card,
        /// Whether it is the ace, the legendary sword.
        legendary: bool,
    },
    /// A potion was drunk.
    Healed {
        /// The potion.
        potion: Card,
        /// Health actually restored.
        restored: i32,
        /// Value added to the potion overflow bonus.
        overflow: u32,
    },
    /// The room was abandoned.
    Fled {
        /// Cards drawn into the new room.
        drawn: usize,
    },
}
