//! CLI dungeon example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use dungeon_deck::{
    AttackMode, Card, CardKind, Event, Game, GameOptions, GameStatus, Outcome, RuleSet, Suit,
};

fn main() {
    println!("Dungeon CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let options = match std::env::args().nth(1).as_deref() {
        Some("scoundrel") => GameOptions::scoundrel(),
        _ => GameOptions::endless_dungeons(),
    };
    let mut game = Game::new(options, seed);

    loop {
        print_table(&game);

        if let Some(result) = game.result().copied() {
            match result.outcome {
                Outcome::Won => println!("You win!"),
                Outcome::Lost => println!("Game over! You died."),
            }
            println!("Score: {} (high score {})", result.score, result.high_score);
            if result.new_high_score {
                println!("New high score!");
            }
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.reset();
                    continue;
                }
                _ => break,
            }
        }

        println!("{}", format_actions(&game));
        let action = prompt_line("Action: ");

        let result = match action.as_str() {
            "b" | "bare" => {
                game.select_attack_mode(AttackMode::Bare);
                continue;
            }
            "w" | "weapon" => {
                game.select_attack_mode(AttackMode::Weapon);
                continue;
            }
            "a" | "attack" => game.attack(),
            "f" | "flee" => game.flee(),
            "r" | "reset" => {
                game.reset();
                continue;
            }
            "q" | "quit" => return,
            other => match other.parse::<usize>() {
                Ok(slot) if (1..=4).contains(&slot) => game.play_card(slot - 1),
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            },
        };

        match result {
            Ok(event) => println!("{}", describe(&event)),
            Err(err) => println!("{}", colorize(&err.to_string(), "33")),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let snapshot = game.snapshot();
    println!(
        "\nHealth: {}/{} | Deck: {} cards | Score: {} | High score: {}",
        snapshot.health,
        snapshot.max_health,
        snapshot.deck_count,
        snapshot.score,
        snapshot.high_score
    );

    let room = snapshot
        .room
        .slots()
        .iter()
        .enumerate()
        .map(|(index, slot)| match slot {
            Some(card) => format!("{}:{}", index + 1, format_card(card)),
            None => format!("{}:--", index + 1),
        })
        .collect::<Vec<_>>()
        .join("  ");
    println!("Room: {room}");

    let defense_label = match game.rules() {
        RuleSet::Scoundrel => "Weapon",
        RuleSet::EndlessDungeons => "Shield",
    };
    match snapshot.defense {
        Some(defense) => {
            let trained = if defense.is_trained() { " (trained)" } else { "" };
            let absorbed = snapshot
                .absorbed
                .map(|monster| format!(" holding {}", format_card(&monster)))
                .unwrap_or_default();
            println!(
                "{defense_label}: {} at {}{trained}{absorbed}",
                format_card(&defense.card()),
                defense.value()
            );
        }
        None => println!("{defense_label}: (none)"),
    }
    if let Some(sword) = snapshot.sword {
        println!("Sword: {} (+{})", format_card(&sword), sword.value());
    }
    println!("Discard: {} cards", snapshot.discard.len());
    if snapshot.status != GameStatus::Ongoing {
        println!("{:?}", snapshot.status);
    }
}

fn format_actions(game: &Game) -> String {
    let (bare, weapon) = match game.rules() {
        RuleSet::Scoundrel => ("bare", "weapon"),
        RuleSet::EndlessDungeons => ("quick", "shield"),
    };
    let mode = game.attack_mode();
    let parts = [
        format_action(&format!("{bare} (b)"), mode == Some(AttackMode::Bare)),
        format_action(&format!("{weapon} (w)"), mode == Some(AttackMode::Weapon)),
        format_action("attack (a)", game.defense().is_some()),
        format_action("flee (f)", game.flee_allowed()),
        "play [1-4]".to_string(),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, highlighted: bool) -> String {
    if highlighted {
        colorize(label, "32")
    } else {
        colorize(label, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn describe(event: &Event) -> String {
    match event {
        Event::Ignored => "That slot is empty.".to_string(),
        Event::Fought { monster, damage } => {
            format!("Fought {} and took {damage} damage.", format_card(monster))
        }
        Event::Absorbed { monster } => format!("Absorbed {}.", format_card(monster)),
        Event::Trained { monster, damage } => format!(
            "{} broke through for {damage} damage; your defense learned from it.",
            format_card(monster)
        ),
        Event::Consumed { monster } => {
            format!("Defeated {}; your defense shattered.", format_card(monster))
        }
        Event::Equipped { card, .. } => format!("Equipped {}.", format_card(card)),
        Event::SwordEquipped { card, legendary } => {
            if *legendary {
                "You found the legendary sword!".to_string()
            } else {
                format!("Equipped sword {}.", format_card(card))
            }
        }
        Event::Healed {
            potion,
            restored,
            overflow,
        } => {
            if *overflow > 0 {
                format!(
                    "Drank {} at full health: +{overflow} bonus.",
                    format_card(potion)
                )
            } else {
                format!("Drank {} and healed {restored}.", format_card(potion))
            }
        }
        Event::Fled { drawn } => format!("Fled. {drawn} new cards drawn."),
    }
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    let text = card.to_string();
    match card.kind() {
        CardKind::Monster => colorize(&format!("{text}({})", card.value()), color_code),
        _ => colorize(&text, color_code),
    }
}
