use crate::result::{GameResult, Outcome};
use crate::score::ScoreStore;

use super::Game;

impl<S: ScoreStore> Game<S> {
    /// Returns the current score: remaining health (at least 0) plus the
    /// potion overflow bonus.
    pub const fn score(&self) -> u32 {
        let health = if self.health > 0 { self.health } else { 0 };
        health.unsigned_abs() + self.potion_overflow
    }

    /// Ends the game if the player died or cleared the dungeon.
    ///
    /// On the first call that finds the game over, the score is recorded with
    /// the score store.
    pub(super) fn check_game_over(&mut self) {
        if self.result.is_some() {
            return;
        }

        let outcome = if self.health <= 0 {
            Outcome::Lost
        } else if self.deck.is_empty() && self.room.monster_count() == 0 {
            Outcome::Won
        } else {
            return;
        };

        let score = self.score();
        let previous = self.store.load_high_score();
        let new_high_score = score > previous;
        if new_high_score {
            self.store.save_high_score(score);
        }

        tracing::info!(?outcome, score, health = self.health, new_high_score, "game over");

        self.result = Some(GameResult {
            outcome,
            score,
            health: self.health,
            potion_overflow: self.potion_overflow,
            high_score: previous.max(score),
            new_high_score,
        });
    }
}
