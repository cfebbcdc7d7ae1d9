//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::combat::EquippedDefense;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::options::{GameOptions, RuleSet};
use crate::result::{GameResult, Outcome};
use crate::room::Room;
use crate::score::{MemoryScoreStore, ScoreStore};

mod actions;
mod ending;
mod play;
pub mod state;

pub use state::{AttackMode, GameStatus, Snapshot};

/// A dungeon game engine that owns the deck, the room and the player.
///
/// Every action either applies completely or returns an [`ActionError`] and
/// leaves the game untouched. Use [`GameOptions`] to pick the rule set and
/// combat model, and a [`ScoreStore`] to keep the high score between games.
#[derive(Debug, Clone)]
pub struct Game<S = MemoryScoreStore> {
    /// Cards still to be drawn.
    pub deck: Deck,
    /// The current room.
    pub room: Room,
    /// Game options, fixed for the lifetime of the game.
    options: GameOptions,
    /// Current health. Can drop below zero before the game is scored.
    pub health: i32,
    /// Equipped weapon or shield.
    defense: Option<EquippedDefense>,
    /// Last monster absorbed by the weapon or shield.
    absorbed: Option<Card>,
    /// Equipped sword (sword-and-shield rules).
    sword: Option<Card>,
    /// Played and replaced cards, oldest first.
    discard: Vec<Card>,
    /// Whether the previous action was a flee.
    flee_locked: bool,
    /// How the next monster is fought.
    attack_mode: Option<AttackMode>,
    /// Potion value drunk at full health.
    potion_overflow: u32,
    /// Set once the game has been won or lost.
    result: Option<GameResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
    /// High-score storage.
    store: S,
}

impl Game {
    /// Creates a new game with the given seed and an in-memory score store.
    ///
    /// # Example
    ///
    /// ```
    /// use dungeon_deck::{DECK_SIZE, Game, GameOptions, ROOM_SIZE};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.room.occupancy(), ROOM_SIZE);
    /// assert_eq!(game.deck_count(), DECK_SIZE - ROOM_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_store(options, seed, MemoryScoreStore::new())
    }
}

impl<S: ScoreStore> Game<S> {
    /// Creates a new game with the given seed and score store.
    #[must_use]
    pub fn with_store(options: GameOptions, seed: u64, store: S) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = Self {
            deck: Deck::default(),
            room: Room::new(),
            options,
            health: options.max_health,
            defense: None,
            absorbed: None,
            sword: None,
            discard: Vec::new(),
            flee_locked: false,
            attack_mode: None,
            potion_overflow: 0,
            result: None,
            rng,
            store,
        };
        game.reset();
        game
    }

    /// Starts a new game with a freshly shuffled deck.
    ///
    /// The score store and the random stream carry over.
    pub fn reset(&mut self) {
        let mut deck = Deck::build(self.options.rules);
        deck.shuffle(&mut self.rng);
        self.restart_with_deck(deck);
    }

    /// Starts a new game drawing from `deck` as given, without shuffling.
    ///
    /// Useful for replaying a known deal.
    pub fn restart_with_deck(&mut self, deck: Deck) {
        let sword_rules = self.options.uses_sword();

        self.deck = deck;
        self.room = Room::new();
        self.health = self.options.max_health;
        self.defense = None;
        self.absorbed = None;
        self.sword = (sword_rules && self.options.starting_sword).then(Card::starting_sword);
        self.discard.clear();
        self.flee_locked = false;
        self.attack_mode = sword_rules.then_some(AttackMode::Bare);
        self.potion_overflow = 0;
        self.result = None;

        tracing::debug!(rules = ?self.options.rules, deck = self.deck.len(), "new game");
        self.fill_room();
        self.check_game_over();
    }

    /// Draws into empty room slots, leftmost first, while the deck lasts.
    ///
    /// Returns the number of cards drawn.
    fn fill_room(&mut self) -> usize {
        let drawn = self.room.fill_from(&mut self.deck);
        if drawn > 0 {
            tracing::debug!(drawn, remaining = self.deck.len(), "filled room");
        }
        drawn
    }

    fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.result.is_some() {
            return Err(ActionError::GameOver);
        }
        Ok(())
    }

    /// Bookkeeping shared by every action except fleeing.
    fn finish_action(&mut self) {
        self.flee_locked = false;
        if self.room.occupancy() == 1 {
            self.fill_room();
        }
        self.check_game_over();
    }

    /// Sword value added to attacks, or 0 when the rules have no sword.
    fn sword_bonus(&self) -> u8 {
        if self.options.uses_sword() {
            self.sword.map_or(0, |sword| sword.value())
        } else {
            0
        }
    }

    /// Discards the weapon or shield together with the monster it absorbed.
    fn drop_defense(&mut self) -> Option<Card> {
        let replaced = self.defense.take().map(|defense| defense.card());
        if let Some(card) = replaced {
            self.discard.push(card);
        }
        if let Some(monster) = self.absorbed.take() {
            self.discard.push(monster);
        }
        replaced
    }

    /// Returns the options the game was created with.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the rule set in play.
    pub const fn rules(&self) -> RuleSet {
        self.options.rules
    }

    /// Returns the current health.
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Returns the number of cards left in the deck.
    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    /// Returns the room.
    pub const fn room(&self) -> &Room {
        &self.room
    }

    /// Returns the equipped weapon or shield.
    pub const fn defense(&self) -> Option<&EquippedDefense> {
        self.defense.as_ref()
    }

    /// Returns the monster most recently absorbed by the weapon or shield.
    pub const fn absorbed(&self) -> Option<&Card> {
        self.absorbed.as_ref()
    }

    /// Returns the equipped sword.
    pub const fn sword(&self) -> Option<&Card> {
        self.sword.as_ref()
    }

    /// Returns the discard pile, oldest first.
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the selected attack mode.
    pub const fn attack_mode(&self) -> Option<AttackMode> {
        self.attack_mode
    }

    /// Returns whether the previous action was a flee.
    pub const fn is_flee_locked(&self) -> bool {
        self.flee_locked
    }

    /// Returns whether [`flee`](Self::flee) would currently succeed.
    pub fn flee_allowed(&self) -> bool {
        self.result.is_none() && !self.flee_locked && self.room.is_full()
    }

    /// Returns the potion value drunk at full health.
    pub const fn potion_overflow(&self) -> u32 {
        self.potion_overflow
    }

    /// Returns the final tally once the game has ended.
    pub const fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Returns the current game status.
    pub const fn status(&self) -> GameStatus {
        match self.result {
            None => GameStatus::Ongoing,
            Some(GameResult {
                outcome: Outcome::Won,
                ..
            }) => GameStatus::Won,
            Some(GameResult {
                outcome: Outcome::Lost,
                ..
            }) => GameStatus::Lost,
        }
    }

    /// Returns the score store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the stored high score.
    pub fn high_score(&self) -> u32 {
        self.store.load_high_score()
    }

    /// Captures everything needed to render the table.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            health: self.health,
            max_health: self.options.max_health,
            room: self.room,
            defense: self.defense,
            absorbed: self.absorbed,
            sword: self.sword,
            discard: self.discard.clone(),
            deck_count: self.deck.len(),
            attack_mode: self.attack_mode,
            flee_allowed: self.flee_allowed(),
            potion_overflow: self.potion_overflow,
            status: self.status(),
            score: self.score(),
            high_score: self.high_score(),
        }
    }
}
