use crate::combat::{CombatResolver, ConsumeOnSuccess};
use crate::error::ActionError;
use crate::result::Event;
use crate::score::ScoreStore;

use super::{AttackMode, Game};

impl<S: ScoreStore> Game<S> {
    /// Chooses how the next monster is fought.
    ///
    /// Under single-weapon rules the choice is cleared after every fight.
    pub const fn select_attack_mode(&mut self, mode: AttackMode) {
        self.attack_mode = Some(mode);
    }

    /// Player action: strike the leftmost monster with the weapon or shield.
    ///
    /// The monster is discarded if the weapon or shield is at least as strong,
    /// and the weapon or shield breaks in the process. Unlike a weapon fight
    /// through [`play_card`](Self::play_card), nothing is absorbed and the
    /// sword adds nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, nothing is equipped, the room has
    /// no monster, or the weapon is too weak.
    pub fn attack(&mut self) -> Result<Event, ActionError> {
        self.ensure_playing()?;

        let defense = self.defense.ok_or(ActionError::NoWeaponEquipped)?;
        let (index, monster) = self
            .room
            .first_monster()
            .ok_or(ActionError::NoMonsterInRoom)?;
        ConsumeOnSuccess.resolve(&defense, 0, &monster)?;

        self.room.take(index);
        self.discard.push(monster);
        self.drop_defense();
        tracing::debug!(%monster, "struck down");

        self.finish_action();
        Ok(Event::Consumed { monster })
    }

    /// Player action: abandon a full room.
    ///
    /// The room goes to the bottom of the deck in slot order and a new room is
    /// drawn. The next action cannot be another flee.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the previous action was a flee,
    /// or the room is not full.
    pub fn flee(&mut self) -> Result<Event, ActionError> {
        self.ensure_playing()?;

        if self.flee_locked {
            return Err(ActionError::CannotFleeConsecutively);
        }
        if !self.room.is_full() {
            return Err(ActionError::RoomNotFull);
        }

        self.room.return_to(&mut self.deck);
        let drawn = self.fill_room();
        self.flee_locked = true;
        tracing::debug!(drawn, "fled");

        self.check_game_over();
        Ok(Event::Fled { drawn })
    }
}
