//! Game configuration options.

/// Which card game the engine plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleSet {
    /// Single equipped weapon. Aces are worth 1 in every suit and the attack
    /// mode must be chosen again before every fight.
    Scoundrel,
    /// Sword and shield. Black aces are worth 14, red aces and the rank-0
    /// starting card are swords, and the attack mode persists between fights.
    #[default]
    EndlessDungeons,
}

/// How a fight with the weapon or shield is resolved in [`Game::play_card`].
///
/// [`Game::play_card`]: crate::Game::play_card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum CombatModel {
    /// The defense takes on the strength of every monster it beats and may
    /// survive one overpowering hit.
    #[default]
    AbsorbAndTrain,
    /// The defense breaks after one successful block.
    ConsumeOnSuccess,
}

/// Configuration options for a dungeon game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use dungeon_deck::{CombatModel, GameOptions, RuleSet};
///
/// let options = GameOptions::default()
///     .with_rules(RuleSet::Scoundrel)
///     .with_combat(CombatModel::ConsumeOnSuccess)
///     .with_max_health(25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Rule set.
    pub rules: RuleSet,
    /// Resolution model for weapon or shield fights.
    pub combat: CombatModel,
    /// Starting and maximum health.
    pub max_health: i32,
    /// Whether sword-and-shield games start with the rank-0 sword equipped.
    pub starting_sword: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::endless_dungeons()
    }
}

impl GameOptions {
    /// Default health cap.
    pub const MAX_HEALTH: i32 = 20;

    /// Single-weapon rules.
    ///
    /// # Example
    ///
    /// ```
    /// use dungeon_deck::{GameOptions, RuleSet};
    ///
    /// let options = GameOptions::scoundrel();
    /// assert_eq!(options.rules, RuleSet::Scoundrel);
    /// assert!(!options.starting_sword);
    /// ```
    #[must_use]
    pub const fn scoundrel() -> Self {
        Self {
            rules: RuleSet::Scoundrel,
            combat: CombatModel::AbsorbAndTrain,
            max_health: Self::MAX_HEALTH,
            starting_sword: false,
        }
    }

    /// Sword-and-shield rules.
    ///
    /// # Example
    ///
    /// ```
    /// use dungeon_deck::{GameOptions, RuleSet};
    ///
    /// let options = GameOptions::endless_dungeons();
    /// assert_eq!(options.rules, RuleSet::EndlessDungeons);
    /// assert_eq!(options.max_health, 20);
    /// ```
    #[must_use]
    pub const fn endless_dungeons() -> Self {
        Self {
            rules: RuleSet::EndlessDungeons,
            combat: CombatModel::AbsorbAndTrain,
            max_health: Self::MAX_HEALTH,
            starting_sword: true,
        }
    }

    /// Sets the rule set.
    ///
    /// The starting sword only applies to sword-and-shield rules and is
    /// ignored otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use dungeon_deck::{GameOptions, RuleSet};
    ///
    /// let options = GameOptions::default().with_rules(RuleSet::Scoundrel);
    /// assert_eq!(options.rules, RuleSet::Scoundrel);
    /// ```
    #[must_use]
    pub const fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the weapon or shield combat model.
    ///
    /// # Example
    ///
    /// ```
    /// use dungeon_deck::{CombatModel, GameOptions};
    ///
    /// let options = GameOptions::default().with_combat(CombatModel::ConsumeOnSuccess);
    /// assert_eq!(options.combat, CombatModel::ConsumeOnSuccess);
    /// ```
    #[must_use]
    pub const fn with_combat(mut self, combat: CombatModel) -> Self {
        self.combat = combat;
        self
    }

    /// Sets the starting and maximum health.
    ///
    /// # Example
    ///
    /// ```
    /// use dungeon_deck::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_health(30);
    /// assert_eq!(options.max_health, 30);
    /// ```
    #[must_use]
    pub const fn with_max_health(mut self, max_health: i32) -> Self {
        self.max_health = max_health;
        self
    }

    /// Sets whether sword-and-shield games start with the rank-0 sword.
    ///
    /// # Example
    ///
    /// ```
    /// use dungeon_deck::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_sword(false);
    /// assert!(!options.starting_sword);
    /// ```
    #[must_use]
    pub const fn with_starting_sword(mut self, starting_sword: bool) -> Self {
        self.starting_sword = starting_sword;
        self
    }

    /// Returns whether a sword adds to attacks under these rules.
    #[must_use]
    pub const fn uses_sword(&self) -> bool {
        matches!(self.rules, RuleSet::EndlessDungeons)
    }

    /// Returns whether the attack mode is cleared after every fight.
    #[must_use]
    pub const fn resets_attack_mode(&self) -> bool {
        matches!(self.rules, RuleSet::Scoundrel)
    }
}
