//! A rules engine for solo dungeon-crawl card games with optional `no_std` support.
//!
//! A deck is consumed room by room: spades and clubs are monsters, diamonds
//! are weapons, shields or swords, and hearts are potions. The crate provides
//! a [`Game`] type that owns the deck, the four-card room and the player, and
//! applies every rule: fights, equipment, potions, fleeing, and scoring when
//! the player dies or clears the dungeon.
//!
//! Two rule sets share one engine, picked through [`GameOptions`]:
//! [`RuleSet::Scoundrel`] with a single weapon, and
//! [`RuleSet::EndlessDungeons`] with a sword and a shield.
//!
//! # Example
//!
//! ```
//! use dungeon_deck::{AttackMode, Game, GameOptions, GameStatus};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.select_attack_mode(AttackMode::Bare);
//! match game.play_card(0) {
//!     Ok(event) => println!("{event:?}"),
//!     Err(err) => println!("{err}"),
//! }
//! assert_eq!(game.status(), GameStatus::Ongoing);
//! println!("health {}, score {}", game.health(), game.score());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod combat;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod room;
pub mod score;

// Re-export main types
pub use card::{Card, CardKind, DECK_SIZE, Suit};
pub use combat::{AbsorbAndTrain, CombatResolver, ConsumeOnSuccess, EquippedDefense, Resolution};
pub use deck::Deck;
pub use error::ActionError;
pub use game::{AttackMode, Game, GameStatus, Snapshot};
pub use options::{CombatModel, GameOptions, RuleSet};
pub use result::{Event, GameResult, Outcome};
pub use room::{ROOM_SIZE, Room};
pub use score::{HIGH_SCORE_KEY, MemoryScoreStore, ScoreStore};
