//! Error types for game operations.

use thiserror::Error;

/// Rule violations reported by player actions.
///
/// Every action that returns one of these leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A weapon or shield is needed for this action.
    #[error("no weapon equipped")]
    NoWeaponEquipped,
    /// The equipped weapon or shield cannot beat the monster.
    #[error("weapon too weak")]
    WeaponTooWeak,
    /// There is no monster to attack.
    #[error("no monster in the room")]
    NoMonsterInRoom,
    /// A monster was played before choosing how to fight it.
    #[error("select an attack mode first")]
    NoAttackModeSelected,
    /// The previous action was already a flee.
    #[error("cannot flee consecutively")]
    CannotFleeConsecutively,
    /// Fleeing needs a full room.
    #[error("can only flee from a full room")]
    RoomNotFull,
    /// The game has ended; reset to play again.
    #[error("the game is over")]
    GameOver,
}
