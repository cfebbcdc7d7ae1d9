//! Fight resolution.
//!
//! The engine validates and applies; a [`CombatResolver`] only decides what a
//! weapon or shield fight does, so it never touches game state.

use crate::card::Card;
use crate::error::ActionError;
use crate::options::CombatModel;

/// The weapon or shield the player currently holds.
///
/// Beating a monster makes the defense adopt that monster's rank and value as
/// its new threshold. The card that was originally equipped is kept as-is so
/// it can be discarded when replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedDefense {
    card: Card,
    rank: u8,
    value: u8,
    trained: bool,
}

impl EquippedDefense {
    /// Equips a fresh, untrained defense.
    #[must_use]
    pub const fn new(card: Card) -> Self {
        Self {
            card,
            rank: card.rank,
            value: card.value(),
            trained: false,
        }
    }

    /// Returns the card that was equipped.
    #[must_use]
    pub const fn card(&self) -> Card {
        self.card
    }

    /// Returns the current rank.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the current strength.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns whether the defense already survived an overpowering monster.
    #[must_use]
    pub const fn is_trained(&self) -> bool {
        self.trained
    }

    /// Takes on the monster's strength.
    pub const fn absorb(&mut self, monster: &Card) {
        self.rank = monster.rank;
        self.value = monster.value();
    }

    /// Takes on the monster's strength and spends the one-time forgiveness.
    pub const fn train(&mut self, monster: &Card) {
        self.absorb(monster);
        self.trained = true;
    }
}

/// What a weapon or shield fight does to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The defense was strong enough and adopts the monster's strength.
    Absorbed,
    /// The defense was too weak but untrained: the player takes `damage`, the
    /// defense adopts the monster's strength and becomes trained.
    Trained {
        /// Damage taken.
        damage: u8,
    },
    /// The defense blocked the monster and broke.
    Consumed,
}

/// Decides the outcome of a weapon or shield fight.
pub trait CombatResolver {
    /// Resolves `monster` against `defense` plus an attack `bonus`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::WeaponTooWeak`] if the fight cannot be taken.
    fn resolve(
        &self,
        defense: &EquippedDefense,
        bonus: u8,
        monster: &Card,
    ) -> Result<Resolution, ActionError>;
}

/// Absorb what it beats, forgive one overpowering hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsorbAndTrain;

impl CombatResolver for AbsorbAndTrain {
    fn resolve(
        &self,
        defense: &EquippedDefense,
        bonus: u8,
        monster: &Card,
    ) -> Result<Resolution, ActionError> {
        let effective = defense.value().saturating_add(bonus);
        if effective >= monster.value() {
            Ok(Resolution::Absorbed)
        } else if !defense.is_trained() {
            Ok(Resolution::Trained {
                damage: monster.value() - effective,
            })
        } else {
            Err(ActionError::WeaponTooWeak)
        }
    }
}

/// Block once, then break.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsumeOnSuccess;

impl CombatResolver for ConsumeOnSuccess {
    fn resolve(
        &self,
        defense: &EquippedDefense,
        bonus: u8,
        monster: &Card,
    ) -> Result<Resolution, ActionError> {
        if defense.value().saturating_add(bonus) >= monster.value() {
            Ok(Resolution::Consumed)
        } else {
            Err(ActionError::WeaponTooWeak)
        }
    }
}

impl CombatModel {
    /// Returns the resolver implementing this model.
    #[must_use]
    pub fn resolver(self) -> &'static dyn CombatResolver {
        match self {
            Self::AbsorbAndTrain => &AbsorbAndTrain,
            Self::ConsumeOnSuccess => &ConsumeOnSuccess,
        }
    }
}

/// Damage taken from a monster fought without the weapon or shield.
#[must_use]
pub const fn bare_damage(monster: &Card, bonus: u8) -> u8 {
    monster.value().saturating_sub(bonus)
}
