//! The dungeon deck.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, Suit, top_rank};
use crate::options::RuleSet;

/// An ordered stack of cards.
///
/// Cards are drawn from the top and fleeing returns them to the bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Bottom of the deck at the front, top at the back.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds an unshuffled deck for the given rule set.
    ///
    /// Suits are laid out spades, hearts, diamonds, clubs with ranks ascending,
    /// so the last card pushed (the king of clubs) sits on top.
    #[must_use]
    pub fn build(rules: RuleSet) -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in ACE..=top_rank(suit) {
                cards.push_back(Card::new(suit, rank, rules));
            }
        }
        Self { cards }
    }

    /// Creates a deck that yields `draws` in order: `draws[0]` is drawn first.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        Self {
            cards: draws.iter().rev().copied().collect(),
        }
    }

    /// Shuffles the deck in place.
    ///
    /// This is a Fisher–Yates shuffle, so every permutation is equally likely
    /// given a uniform source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Puts a card underneath every other card.
    pub fn return_to_bottom(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates from the bottom card to the top card.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator {
        self.cards.iter()
    }

    /// Returns the cards in draw order (next draw first).
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().rev().copied().collect()
    }
}
