//! Card types and per-rule-set card semantics.

use core::fmt;

use crate::options::RuleSet;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    /// Returns whether this suit carries monsters.
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Spades | Self::Clubs)
    }
}

/// What a card does when played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardKind {
    /// Deals damage unless defeated.
    Monster,
    /// Single-weapon rules: equippable defense.
    Weapon,
    /// Sword-and-shield rules: equippable defense.
    Shield,
    /// Sword-and-shield rules: adds its value to every attack.
    Sword,
    /// Restores health.
    Potion,
}

impl CardKind {
    /// Returns whether this card is equipped as the weapon or shield.
    #[must_use]
    pub const fn is_defense(self) -> bool {
        matches!(self, Self::Weapon | Self::Shield)
    }
}

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;
/// Sentinel rank of the sword every sword-and-shield game starts with.
pub const STARTING_SWORD_RANK: u8 = 0;

/// A playing card.
///
/// The value and kind are derived from the suit, rank and rule set once, at
/// construction, and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (0 = starting sword, 1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    value: u8,
    kind: CardKind,
}

impl Card {
    /// Creates a new card under the given rule set.
    ///
    /// Note: This function does not validate the rank. Values outside 0..=13
    /// are accepted and valued literally.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8, rules: RuleSet) -> Self {
        Self {
            suit,
            rank,
            value: card_value(suit, rank, rules),
            kind: card_kind(suit, rank, rules),
        }
    }

    /// Creates the rank-0 diamond every sword-and-shield game starts with.
    #[must_use]
    pub const fn starting_sword() -> Self {
        Self::new(Suit::Diamonds, STARTING_SWORD_RANK, RuleSet::EndlessDungeons)
    }

    /// Returns the numeric strength of the card.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns what the card does when played.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.kind
    }

    /// Returns whether the card is a monster.
    #[must_use]
    pub const fn is_monster(&self) -> bool {
        matches!(self.kind, CardKind::Monster)
    }

    /// Returns the rank label (`"A"`, `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`).
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        rank_label(self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

const fn card_value(suit: Suit, rank: u8, rules: RuleSet) -> u8 {
    match rank {
        ACE if suit.is_black() && matches!(rules, RuleSet::EndlessDungeons) => 14,
        _ => rank,
    }
}

const fn card_kind(suit: Suit, rank: u8, rules: RuleSet) -> CardKind {
    match suit {
        Suit::Spades | Suit::Clubs => CardKind::Monster,
        Suit::Hearts => CardKind::Potion,
        Suit::Diamonds => match rules {
            RuleSet::Scoundrel => CardKind::Weapon,
            RuleSet::EndlessDungeons => {
                if rank == ACE || rank == STARTING_SWORD_RANK {
                    CardKind::Sword
                } else {
                    CardKind::Shield
                }
            }
        },
    }
}

/// Returns the display label for a rank.
#[must_use]
pub const fn rank_label(rank: u8) -> &'static str {
    match rank {
        0 => "0",
        ACE => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        JACK => "J",
        QUEEN => "Q",
        KING => "K",
        _ => "?",
    }
}

/// Number of cards in a freshly built deck: A–K in spades and clubs, A–10 in hearts and diamonds.
pub const DECK_SIZE: usize = 13 + 10 + 10 + 13;

/// Highest rank a suit carries in a fresh deck.
#[must_use]
pub const fn top_rank(suit: Suit) -> u8 {
    if suit.is_black() { KING } else { 10 }
}
