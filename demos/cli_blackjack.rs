//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcore::{Card, Game, GameOptions, GameState, Hand, Suit};
use clap::Parser;

/// Play blackjack against the dealer in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for shuffling; defaults to the current time.
    #[arg(long, env = "BJ_SEED")]
    seed: Option<u64>,

    /// Name shown for the player.
    #[arg(long, default_value = "Player")]
    player_name: String,

    /// Stop after this many rounds.
    #[arg(long)]
    rounds: Option<u32>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("shuffling with seed {seed}");

    let options = GameOptions::default().with_player_name(args.player_name);
    let mut game = Game::new(options, seed);

    println!("Blackjack CLI example (type 'q' to quit)");

    let mut played = 0;
    loop {
        if args.rounds.is_some_and(|limit| played >= limit) {
            break;
        }
        played += 1;

        if let Err(err) = game.start_round() {
            println!("Deal error: {err}");
            break;
        }

        while game.state() == GameState::PlayerTurn {
            print_table(&game, false);

            let result = match prompt_line("Action ([h]it / [s]tand / [q]uit): ").as_str() {
                "h" | "hit" => game.hit().map(|busted| {
                    if busted {
                        println!("Bust!");
                    }
                }),
                "s" | "stand" => game.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        // The player has stood; reveal the dealer's draws one at a time.
        while game.state().is_in_progress() {
            match game.dealer_draw_one() {
                Ok(true) => break,
                Ok(false) => {
                    if let Some(card) = game.dealer_hand().cards().last() {
                        println!("Dealer draws {}.", format_card(card));
                    }
                }
                Err(err) => {
                    println!("Dealer error: {err}");
                    break;
                }
            }
        }

        print_table(&game, true);
        match game.determine_winner() {
            Ok(outcome) => println!("{outcome}"),
            Err(err) => println!("Round error: {err}"),
        }

        if prompt_line("Play again? (y/n): ").starts_with('n') {
            println!("Goodbye.");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game, reveal_dealer: bool) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());

    let dealer = game.dealer_hand();
    if reveal_dealer {
        println!(
            "{}: {} (value {})",
            game.dealer().name(),
            format_hand(dealer),
            dealer.score()
        );
    } else {
        let up = dealer
            .cards()
            .first()
            .map_or_else(|| "(no cards)".to_string(), format_card);
        println!("{}: {up} ??", game.dealer().name());
    }

    let player = game.player_hand();
    println!(
        "{}: {} (value {}{})",
        game.player().name(),
        format_hand(player),
        player.score(),
        if player.is_soft() { ", soft" } else { "" }
    );
    println!();
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
