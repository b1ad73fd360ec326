//! Display functions for the text front end and command results

use super::formatters::{create_progress_bar, mistake_dots, tile_cell};
use crate::commands::SimulationResult;
use crate::core::{GRID_SIZE, GROUP_COUNT, Tile};
use crate::engine::{Game, LossReason, Phase};
use colored::Colorize;
use rand::Rng;

const CELL_WIDTH: usize = 10;

/// Print the board grid with tile numbers, mistakes and hints
pub fn print_board<R: Rng>(game: &Game<R>) {
    let round = game.round();

    println!("\n{}", "─".repeat(CELL_WIDTH * GRID_SIZE + 12).cyan());
    for (row, tiles) in round.tiles().chunks(GRID_SIZE).enumerate() {
        let numbers: String = (0..GRID_SIZE)
            .map(|col| tile_cell(&format!("{}", row * GRID_SIZE + col + 1), CELL_WIDTH + 2))
            .collect();
        println!("{}", numbers.bright_black());

        let cells: Vec<String> = tiles.iter().map(|tile| styled_tile(game, tile)).collect();
        println!("{}", cells.join(" "));
    }
    println!("{}", "─".repeat(CELL_WIDTH * GRID_SIZE + 12).cyan());

    println!(
        "Mistakes remaining: {}   Mode: {}",
        mistake_dots(round.mistakes(), round.max_mistakes()).bright_yellow(),
        round.mode()
    );
    if round.near_miss() {
        println!("{}", "One away...".bright_magenta().bold());
    }
}

fn styled_tile<R: Rng>(game: &Game<R>, tile: &Tile) -> String {
    let text = format!("[{}]", tile_cell(tile.text(), CELL_WIDTH));
    if tile.is_solved() || tile.is_animating() {
        let (r, g, b) = game.group(tile.group()).color().rgb();
        text.black().on_truecolor(r, g, b).to_string()
    } else if tile.is_selected() {
        text.black().on_white().bold().to_string()
    } else {
        text.normal().to_string()
    }
}

/// Print the end-of-round reveal: groups in solve order, then the rest
pub fn print_endgame<R: Rng>(game: &Game<R>) {
    let round = game.round();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match round.phase() {
        Phase::Won => println!(
            "{}",
            "    🎉 ✨  A L L   G R O U P S   F O U N D !  ✨ 🎉    "
                .bright_green()
                .bold()
        ),
        Phase::Lost(LossReason::OutOfMistakes) => {
            println!("{}", "    Out of mistakes. Better luck next time!".red().bold());
        }
        Phase::Lost(LossReason::GaveUp) => {
            println!("{}", "    You gave up. Here are the groups:".yellow().bold());
        }
        Phase::Playing => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());

    for id in round.endgame_group_order() {
        let group = game.group(id);
        let words: Vec<&str> = game
            .puzzle()
            .words()
            .iter()
            .filter(|(_, g)| *g == id)
            .map(|(w, _)| w.as_str())
            .collect();
        let (r, g, b) = group.color().rgb();
        let marker = if round.is_group_solved(id) { "✓" } else { "·" };
        println!(
            "  {} {} {}",
            marker,
            format!(" {} ", group.name().to_uppercase())
                .black()
                .on_truecolor(r, g, b)
                .bold(),
            words.join(", ")
        );
    }
    println!(
        "\n  Mistakes: {}/{}",
        round.mistakes().to_string().bright_yellow(),
        round.max_mistakes()
    );
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let pct = |n: usize| {
        if result.rounds > 0 {
            n as f64 / result.rounds as f64 * 100.0
        } else {
            0.0
        }
    };

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Won:              {} {}",
        result.won,
        format!("({:.1}%)", pct(result.won)).green()
    );
    println!(
        "   Lost:             {} {}",
        result.lost,
        format!("({:.1}%)", pct(result.lost)).red()
    );
    println!(
        "   Avg submissions:  {}",
        format!("{:.2}", result.average_submissions)
            .bright_yellow()
            .bold()
    );
    println!("   One-away hints:   {}", result.near_misses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Groups solved per round:".bright_cyan().bold());
    for solved in 0..=GROUP_COUNT {
        let count = result.solved_distribution.get(&solved).copied().unwrap_or(0);
        let share = pct(count);
        let bar = create_progress_bar(share, 100.0, 40);
        println!("   {solved}: {} {count:6} ({share:5.1}%)", bar.green());
    }
}
