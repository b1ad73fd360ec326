//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Animations land as soon as a guess is
//! judged; the "one away" hint still expires on the wall clock.

use crate::config::GameConfig;
use crate::content::Mode;
use crate::core::{Direction, TILE_COUNT};
use crate::engine::{Game, Intent, Verdict};
use crate::output::{print_board, print_endgame};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand {
    /// Engine intents to apply in order
    Play(Vec<Intent>),
    Help,
    Quit,
}

/// Parse one input line
///
/// Tile numbers are 1-based, as printed on the board. Returns `None` for
/// anything unrecognised.
#[must_use]
pub fn parse_command(input: &str) -> Option<TextCommand> {
    let lowered = input.trim().to_lowercase();
    let mut words = lowered.split_whitespace();
    let head = words.next()?;
    let rest: Vec<&str> = words.collect();

    let intent = match (head, rest.as_slice()) {
        ("quit" | "q" | "exit", []) => return Some(TextCommand::Quit),
        ("help" | "h" | "?", []) => return Some(TextCommand::Help),
        ("submit" | "sub" | "go", []) => Intent::Submit,
        ("shuffle" | "mix", []) => Intent::Shuffle,
        ("giveup" | "give-up" | "skip", []) => Intent::GiveUp,
        ("new" | "n" | "replay", []) => Intent::Replay,
        ("confirm" | "c", []) => Intent::Confirm,
        ("mode", ["easy"]) => Intent::SetMode(Mode::Easy),
        ("mode", ["hard"]) => Intent::SetMode(Mode::Hard),
        ("move" | "m", [direction]) => Intent::Move(parse_direction(direction)?),
        _ => return parse_tiles(&lowered).map(TextCommand::Play),
    };
    Some(TextCommand::Play(vec![intent]))
}

fn parse_direction(word: &str) -> Option<Direction> {
    match word {
        "up" | "u" => Some(Direction::Up),
        "down" | "d" => Some(Direction::Down),
        "left" | "l" => Some(Direction::Left),
        "right" | "r" => Some(Direction::Right),
        _ => None,
    }
}

/// Tile numbers separated by spaces or commas, e.g. `1 5, 9 13`
fn parse_tiles(input: &str) -> Option<Vec<Intent>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .ok()
                .filter(|n| (1..=TILE_COUNT).contains(n))
                .map(|n| Intent::Select(n - 1))
        })
        .collect()
}

fn print_help() {
    println!("Commands:");
    println!("  1 5 9 13          toggle tiles by number");
    println!("  submit            submit four selected tiles");
    println!("  shuffle           shuffle the unsolved tiles");
    println!("  move up|down|left|right, confirm");
    println!("                    move the cursor / toggle the tile under it");
    println!("  giveup            reveal the groups");
    println!("  mode easy|hard    switch puzzle");
    println!("  new               start over");
    println!("  quit              leave\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub fn run_simple(config: GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║           Connections - find the four groups of four         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let settle = config.timings.collapse.max(config.timings.shake);
    let mut game = Game::new(config);
    let mut last_tick = Instant::now();

    print_board(&game);

    loop {
        let Some(line) = get_user_input("Your move")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let now = Instant::now();
        game.advance(now - last_tick);
        last_tick = now;

        let intents = match parse_command(&line) {
            Some(TextCommand::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Some(TextCommand::Help) => {
                print_help();
                continue;
            }
            Some(TextCommand::Play(intents)) => intents,
            None => {
                println!("❌ Unknown command. Type 'help' for the list.\n");
                continue;
            }
        };

        let was_over = game.round().phase().is_over();
        for intent in intents {
            if intent == Intent::Submit {
                report_submit(&mut game);
                game.advance(settle);
            } else if !game.dispatch(intent) {
                println!("{}", format!("Can't do that right now ({intent:?})").bright_black());
            }
        }

        print_board(&game);
        if game.round().phase().is_over() && !was_over {
            print_endgame(&game);
            println!("\nType 'new' to play again, 'mode easy|hard' to switch, or 'quit'.\n");
        }
    }
}

fn report_submit(game: &mut Game) {
    match game.submit() {
        None => println!("Select exactly four tiles first."),
        Some(Verdict::Correct(group)) => {
            let name = game.group(group).name().to_uppercase();
            println!("{}", format!("✅ {name}!").green().bold());
        }
        Some(Verdict::Incorrect { near_miss }) => {
            let left = game.round().mistakes_left();
            println!("{}", format!("❌ Not a group. {left} mistakes left.").red());
            if near_miss {
                println!("{}", "One away...".bright_magenta());
            }
        }
    }
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
