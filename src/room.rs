//! The room: the hand of cards the player must clear or flee from.

use crate::card::Card;
use crate::deck::Deck;

/// Number of slots in a room.
pub const ROOM_SIZE: usize = 4;

/// A fixed set of card slots.
///
/// Slots empty out as cards are played and are refilled left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    slots: [Option<Card>; ROOM_SIZE],
}

impl Room {
    /// Creates an empty room.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; ROOM_SIZE],
        }
    }

    /// Returns the slots in display order.
    #[must_use]
    pub const fn slots(&self) -> &[Option<Card>; ROOM_SIZE] {
        &self.slots
    }

    /// Returns the card in a slot, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Iterates over occupied slots as `(index, card)`.
    pub fn cards(&self) -> impl Iterator<Item = (usize, &Card)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|card| (index, card)))
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn occupancy(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns whether every slot holds a card.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupancy() == ROOM_SIZE
    }

    /// Returns whether no slot holds a card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupancy() == 0
    }

    /// Returns the number of monsters in the room.
    #[must_use]
    pub fn monster_count(&self) -> usize {
        self.cards().filter(|(_, card)| card.is_monster()).count()
    }

    /// Returns the leftmost monster and its slot index.
    #[must_use]
    pub fn first_monster(&self) -> Option<(usize, Card)> {
        self.cards()
            .find(|(_, card)| card.is_monster())
            .map(|(index, card)| (index, *card))
    }

    /// Empties a slot and returns its card.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Draws from the deck into empty slots, leftmost first, until the room is
    /// full or the deck runs out.
    ///
    /// Returns the number of cards drawn.
    pub fn fill_from(&mut self, deck: &mut Deck) -> usize {
        let mut drawn = 0;
        for slot in self.slots.iter_mut().filter(|slot| slot.is_none()) {
            let Some(card) = deck.draw() else {
                break;
            };
            *slot = Some(card);
            drawn += 1;
        }
        drawn
    }

    /// Moves every card to the bottom of the deck, keeping slot order from the
    /// bottom up, and leaves the room empty.
    pub fn return_to(&mut self, deck: &mut Deck) {
        for slot in self.slots.iter_mut().rev() {
            if let Some(card) = slot.take() {
                deck.return_to_bottom(card);
            }
        }
    }
}
