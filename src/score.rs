//! High-score persistence.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Key the high score is stored under.
pub const HIGH_SCORE_KEY: &str = "endlessDungeonsHighScore";

/// Storage for scores that outlive a single game.
///
/// The engine only touches the store when a game ends.
pub trait ScoreStore {
    /// Returns the score stored under `key`, if any.
    fn load(&self, key: &str) -> Option<u32>;

    /// Stores `score` under `key`.
    fn save(&mut self, key: &str, score: u32);

    /// Returns the stored high score, or 0 if none was ever saved.
    fn load_high_score(&self) -> u32 {
        self.load(HIGH_SCORE_KEY).unwrap_or(0)
    }

    /// Stores a new high score.
    fn save_high_score(&mut self, score: u32) {
        self.save(HIGH_SCORE_KEY, score);
    }
}

/// A [`ScoreStore`] that lives as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    scores: BTreeMap<String, u32>,
}

impl MemoryScoreStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scores: BTreeMap::new(),
        }
    }

    /// Creates a store that already holds a high score.
    #[must_use]
    pub fn with_high_score(score: u32) -> Self {
        let mut store = Self::new();
        store.save_high_score(score);
        store
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self, key: &str) -> Option<u32> {
        self.scores.get(key).copied()
    }

    fn save(&mut self, key: &str, score: u32) {
        self.scores.insert(key.to_string(), score);
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn load(&self, key: &str) -> Option<u32> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, score: u32) {
        (**self).save(key, score);
    }
}
