use crate::card::{ACE, Card, CardKind};
use crate::combat::{EquippedDefense, Resolution, bare_damage};
use crate::error::ActionError;
use crate::result::Event;
use crate::score::ScoreStore;

use super::{AttackMode, Game};

impl<S: ScoreStore> Game<S> {
    /// Plays the card in a room slot.
    ///
    /// Monsters are fought with the selected [`AttackMode`]; weapons, shields
    /// and swords are equipped; potions are drunk. An empty or out-of-range
    /// slot is ignored and returns [`Event::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, no attack mode is selected for a
    /// monster, the weapon attack has no weapon, or the weapon is too weak.
    pub fn play_card(&mut self, index: usize) -> Result<Event, ActionError> {
        self.ensure_playing()?;

        let Some(card) = self.room.get(index).copied() else {
            return Ok(Event::Ignored);
        };

        let event = match card.kind() {
            CardKind::Monster => self.fight(index, card)?,
            CardKind::Weapon | CardKind::Shield => self.equip_defense(index, card),
            CardKind::Sword => self.equip_sword(index, card),
            CardKind::Potion => self.drink(index, card),
        };

        self.finish_action();
        Ok(event)
    }

    fn fight(&mut self, index: usize, monster: Card) -> Result<Event, ActionError> {
        let mode = self.attack_mode.ok_or(ActionError::NoAttackModeSelected)?;
        let bonus = self.sword_bonus();

        let event = match mode {
            AttackMode::Bare => {
                let damage = bare_damage(&monster, bonus);
                self.room.take(index);
                self.health -= i32::from(damage);
                self.discard.push(monster);
                tracing::debug!(%monster, damage, health = self.health, "fought bare-handed");
                Event::Fought { monster, damage }
            }
            AttackMode::Weapon => {
                let defense = self.defense.ok_or(ActionError::NoWeaponEquipped)?;
                let resolution = self
                    .options
                    .combat
                    .resolver()
                    .resolve(&defense, bonus, &monster)?;
                self.room.take(index);
                self.apply_resolution(monster, resolution)
            }
        };

        if self.options.resets_attack_mode() {
            self.attack_mode = None;
        }
        Ok(event)
    }

    fn apply_resolution(&mut self, monster: Card, resolution: Resolution) -> Event {
        match resolution {
            Resolution::Absorbed => {
                self.absorb(monster, false);
                tracing::debug!(%monster, "absorbed");
                Event::Absorbed { monster }
            }
            Resolution::Trained { damage } => {
                self.health -= i32::from(damage);
                self.absorb(monster, true);
                tracing::debug!(%monster, damage, health = self.health, "overpowered, defense trained");
                Event::Trained { monster, damage }
            }
            Resolution::Consumed => {
                self.discard.push(monster);
                self.drop_defense();
                tracing::debug!(%monster, "defense consumed");
                Event::Consumed { monster }
            }
        }
    }

    fn absorb(&mut self, monster: Card, train: bool) {
        if let Some(defense) = self.defense.as_mut() {
            if train {
                defense.train(&monster);
            } else {
                defense.absorb(&monster);
            }
        }
        if let Some(previous) = self.absorbed.replace(monster) {
            self.discard.push(previous);
        }
    }

    fn equip_defense(&mut self, index: usize, card: Card) -> Event {
        self.room.take(index);
        let replaced = self.drop_defense();
        self.defense = Some(EquippedDefense::new(card));
        if self.options.uses_sword() {
            self.attack_mode = Some(AttackMode::Weapon);
        }
        tracing::debug!(%card, "equipped");
        Event::Equipped { card, replaced }
    }

    fn equip_sword(&mut self, index: usize, card: Card) -> Event {
        self.room.take(index);
        self.sword = Some(card);
        let legendary = card.rank == ACE;
        if legendary {
            tracing::info!(%card, "found the legendary sword");
        } else {
            tracing::debug!(%card, "equipped sword");
        }
        Event::SwordEquipped { card, legendary }
    }

    fn drink(&mut self, index: usize, potion: Card) -> Event {
        self.room.take(index);
        let max_health = self.options.max_health;
        let before = self.health;
        let value = potion.value();

        self.health = (before + i32::from(value)).min(max_health);
        let overflow = if before == max_health {
            u32::from(value)
        } else {
            0
        };
        self.potion_overflow += overflow;
        self.discard.push(potion);

        let restored = self.health - before;
        tracing::debug!(%potion, restored, overflow, health = self.health, "drank potion");
        Event::Healed {
            potion,
            restored,
            overflow,
        }
    }
}
