//! Property tests for deck handling and action atomicity.

use dungeon_deck::{
    AttackMode, Card, DECK_SIZE, Deck, Game, GameOptions, GameStatus, ROOM_SIZE, RuleSet,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn same_cards(a: &[Card], b: &[Card]) -> bool {
    let mut remaining = b.to_vec();
    a.len() == b.len()
        && a.iter().all(|card| {
            remaining
                .iter()
                .position(|other| other == card)
                .map(|index| remaining.swap_remove(index))
                .is_some()
        })
}

/// Every card a single-weapon game knows about. Sword-and-shield games drop
/// replaced swords, so this only balances under single-weapon rules.
fn accounted_cards(game: &Game) -> Vec<Card> {
    let mut cards = game.deck.cards();
    cards.extend(game.room.cards().map(|(_, card)| *card));
    cards.extend_from_slice(game.discard());
    cards.extend(game.defense().map(|defense| defense.card()));
    cards.extend(game.absorbed().copied());
    cards
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let fresh = Deck::build(RuleSet::EndlessDungeons);
        let mut shuffled = fresh.clone();
        shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        prop_assert_eq!(shuffled.len(), DECK_SIZE);
        prop_assert!(same_cards(&fresh.cards(), &shuffled.cards()));
    }

    #[test]
    fn flee_keeps_deck_length(seed in any::<u64>()) {
        let mut game = Game::new(GameOptions::default(), seed);
        let deck_before = game.deck_count();
        let mut cards_before = accounted_cards(&game);
        cards_before.extend(game.sword().copied());

        game.flee().unwrap();

        prop_assert!(game.is_flee_locked());
        prop_assert_eq!(game.deck_count(), deck_before);
        prop_assert_eq!(game.room.occupancy(), ROOM_SIZE);
        let mut cards_after = accounted_cards(&game);
        cards_after.extend(game.sword().copied());
        prop_assert!(same_cards(&cards_before, &cards_after));
    }

    #[test]
    fn actions_apply_fully_or_not_at_all(
        seed in any::<u64>(),
        actions in proptest::collection::vec(0u8..8, 1..120),
    ) {
        let mut game = Game::new(GameOptions::scoundrel(), seed);
        let all_cards = accounted_cards(&game);
        prop_assert_eq!(all_cards.len(), DECK_SIZE);

        for action in actions {
            let before = game.snapshot();
            let deck_before = game.deck.cards();

            let outcome = match action {
                0..=3 => game.play_card(usize::from(action)),
                4 => {
                    game.select_attack_mode(AttackMode::Bare);
                    continue;
                }
                5 => {
                    game.select_attack_mode(AttackMode::Weapon);
                    continue;
                }
                6 => game.attack(),
                _ => game.flee(),
            };

            if outcome.is_err() {
                prop_assert_eq!(game.snapshot(), before);
                prop_assert_eq!(game.deck.cards(), deck_before);
            }

            prop_assert!(game.room.occupancy() <= ROOM_SIZE);
            prop_assert!(game.health() <= game.options().max_health);
            prop_assert!(same_cards(&all_cards, &accounted_cards(&game)));
            if game.room.occupancy() < ROOM_SIZE && game.status() == GameStatus::Ongoing {
                prop_assert!(game.room.occupancy() > 1 || game.deck_count() == 0);
            }
        }
    }
}
