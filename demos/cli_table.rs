//! CLI blackjack table.
//!
//! Set `RUST_LOG=debug` to see the engine's round log.

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{CardFace, Table, TableCommand, TableOptions, TablePhase, TableView};

fn main() {
    env_logger::init();

    println!("Blackjack CLI table (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let delay = options.dealer_step_delay;
    let mut table = Table::new(options, seed);

    loop {
        print_view(&table.view());

        if table.phase() == TablePhase::DealerTurn {
            // One dealer step per tick so each draw can be seen.
            thread::sleep(delay);
            if let Err(err) = table.dealer_step() {
                println!("Dealer error: {err}");
            }
            continue;
        }

        if table.phase() == TablePhase::RoundOver {
            thread::sleep(delay * 4);
            if let Err(err) = table.clear_round() {
                println!("Clear error: {err}");
            }
            continue;
        }

        let prompt = match (table.phase(), table.can_double()) {
            (TablePhase::PlayerTurn, true) => "[z]hit [x]stand [c]double: ",
            (TablePhase::PlayerTurn, false) => "[z]hit [x]stand: ",
            _ => "[z]deal [b]et [x]leave: ",
        };

        let command = match prompt_line(prompt).as_str() {
            "z" | "" if table.phase() == TablePhase::AwaitingDeal => TableCommand::Deal,
            "z" | "h" | "hit" => TableCommand::Hit,
            "x" | "s" | "stand" if table.phase() == TablePhase::PlayerTurn => TableCommand::Stand,
            "c" | "d" | "double" => TableCommand::DoubleDown,
            "b" | "bet" => {
                match prompt_line("Bet amount: ").parse::<usize>() {
                    Ok(amount) => {
                        if let Err(err) = table.set_bet(amount) {
                            println!("Bet error: {err}");
                        }
                    }
                    Err(_) => println!("Please enter a number."),
                }
                continue;
            }
            "x" | "leave" => {
                if let Err(err) = table.leave_table() {
                    println!("{err}");
                    continue;
                }
                println!("Left the table with {} chips.", table.chips());
                break;
            }
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = table.execute(command) {
            println!("Action error: {err}");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_view(view: &TableView) {
    let dealer_total = view
        .dealer_total
        .map_or_else(|| "?".to_string(), |total| total.to_string());

    println!();
    println!("Dealer: {} ({dealer_total})", format_dealer(&view.dealer_cards));
    println!(
        "You:    {} ({})",
        view.player_cards
            .iter()
            .map(|card| format_face(CardFace::Up(*card)))
            .collect::<Vec<_>>()
            .join(" "),
        view.player_total
    );
    println!("BET: {}   CHIPS: {}", view.bet, view.chips);

    if let Some(message) = view.outcome_message() {
        println!("{message}");
    }
}

fn format_dealer(cards: &[CardFace]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|face| format_face(*face))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_face(face: CardFace) -> String {
    match face {
        CardFace::Up(card) if card.is_red() => colorize(&card.to_string(), "31"),
        CardFace::Up(card) => card.to_string(),
        CardFace::Down => colorize("??", "90"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
