//! CLI rummy example.

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use rummyrs::{ActionError, DrawSource, GameOptions, GroupVerdict, Round, RoundStatus, Side};
use tracing_subscriber::EnvFilter;

const STARTING_CHIPS: i64 = 90;
const STAKE: i64 = 90;
const ACTIONS: &str = "Action (s=stock, d=discard pile, r N=remove, c N..=check, w N N=swap, o=show, q=quit): ";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Rummy CLI example (type 'q' to quit)");

    let mut chips = STARTING_CHIPS;
    loop {
        println!("\nChips owned: {chips}");
        match prompt_line("Start a round? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => break,
        }

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let mut round = match Round::new(GameOptions::default(), seed) {
            Ok(round) => round,
            Err(err) => {
                println!("Deal error: {err}");
                break;
            }
        };

        match play_round(&mut round) {
            Some(RoundStatus::Won(Side::Player)) => {
                println!("You win!!");
                chips += STAKE;
            }
            Some(RoundStatus::Won(Side::Opponent)) => {
                println!("You lose.");
                chips -= STAKE;
            }
            Some(_) => println!("No cards left to draw. Nobody wins this round."),
            None => break,
        }
    }
}

/// Returns the final status, or `None` if the player quit.
fn play_round(round: &mut Round) -> Option<RoundStatus> {
    loop {
        match round.status() {
            status @ (RoundStatus::Won(_) | RoundStatus::Exhausted) => return Some(status),
            RoundStatus::StockExhausted => {
                match round.reshuffle() {
                    Ok(()) => println!("Discard pile reshuffled into the stock."),
                    Err(err) => println!("Cannot reshuffle: {err}"),
                }
                continue;
            }
            RoundStatus::AwaitingOpponent => {
                println!("Opponent is making a move...");
                match round.opponent_turn() {
                    Ok(turn) => {
                        thread::sleep(turn.think_time);
                        if let Some(card) = turn.discarded {
                            println!("Opponent discarded {card}.");
                        }
                    }
                    Err(err) => println!("Opponent error: {err}"),
                }
                continue;
            }
            RoundStatus::AwaitingPlayerDraw | RoundStatus::AwaitingPlayerDiscard => {}
        }

        print_table(round);
        let input = prompt_line(ACTIONS);
        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or_default();
        let selection: Vec<usize> = words.filter_map(|word| word.parse().ok()).collect();

        let result: Result<(), ActionError> = match command {
            "s" | "stock" => round
                .draw(DrawSource::Stock)
                .map(|card| println!("Drew {card}.")),
            "d" | "discard" => round
                .draw(DrawSource::Discard)
                .map(|card| println!("Took {card}.")),
            "r" | "remove" => round
                .discard(&selection)
                .map(|card| println!("Discarded {card}.")),
            "c" | "check" => round.check_group(&selection).map(|verdict| match verdict {
                GroupVerdict::Accepted(check) => println!("Valid group formed: {check:?}."),
                GroupVerdict::Rejected => println!("Invalid group formed."),
            }),
            "w" | "swap" => round.swap(&selection),
            "o" | "show" => round.show().map(|_| ()),
            "q" | "quit" => return None,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("{err}");
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

fn print_table(round: &Round) {
    println!(
        "\nWildcard: {} | Stock: {} cards | Discard: {}",
        round.wildcard_card(),
        round.cards_remaining(),
        round
            .top_of_discard()
            .map_or_else(|| "empty".to_string(), ToString::to_string)
    );

    let hand = round.player_hand();
    let flags = hand.flags();
    println!(
        "Pure life: {} | Second life: {} | Declared groups: {}",
        flags.pure_life(),
        flags.second_life(),
        hand.declared().len()
    );
    for (index, card) in hand.cards().iter().enumerate() {
        print!("{index}:{card} ");
    }
    println!();
}
