//! Display functions for the panel and command results

use super::board::Board;
use super::formatters::{create_progress_bar, letters_line, row_to_string};
use crate::commands::{LayoutReport, RevealResult};
use crate::core::{Tile, TileKind, TileStatus};
use crate::reveal::ButtonMode;
use colored::{ColoredString, Colorize};

/// Colored cell for one tile
fn colored_tile(tile: &Tile) -> ColoredString {
    match (tile.kind, tile.status) {
        (TileKind::Space, _) => "   ".normal(),
        (_, TileStatus::Hidden) => "   ".on_white(),
        (_, TileStatus::Pending(_)) => "   ".on_bright_yellow(),
        (TileKind::Symbol, _) => format!(" {} ", tile.character).black().on_white(),
        (TileKind::Letter, TileStatus::Revealed) => {
            format!(" {} ", tile.character).black().bold().on_white()
        }
    }
}

/// Print the panel with colored tiles
pub fn print_panel(board: &Board) {
    println!();
    for row in board.rows() {
        let cells: Vec<String> = row.iter().map(|t| colored_tile(t).to_string()).collect();
        println!("  {}", cells.join(" "));
        println!();
    }

    let (revealed, total) = board.letter_progress();
    println!(
        "  [{}] {revealed}/{total} letters",
        create_progress_bar(revealed, total, 24).cyan()
    );
}

/// Print the guess button the way the panel would show it
pub fn print_button(mode: ButtonMode) {
    let label = format!(" {} ", mode.label()).white().bold();
    let label = match mode {
        ButtonMode::Guess => label.on_green(),
        ButtonMode::Confirm => label.on_blue(),
    };
    println!("  {label}   {}", " Resolver ".white().bold().on_red());
}

/// Print the tried letters, if any
pub fn print_tried_letters(letters: &[char]) {
    if !letters.is_empty() {
        println!("  Tried: {}", letters_line(letters).bright_black());
    }
}

/// Print the end-of-round banner
pub fn print_celebration(phrase: &str) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "        🎉  ¡ P A N E L   R E S U E L T O !  🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n  {}\n", phrase.bright_white().bold());
}

/// Print the result of laying out a phrase
pub fn print_layout_report(report: &LayoutReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Layout: {} ({} panel, {} columns)",
        report.phrase.bright_yellow().bold(),
        report.width,
        report.width.max_columns()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, row) in report.rows.iter().enumerate() {
        // Mark the invisible trailing space so row widths are visible
        let shown = row.replace(' ', "·");
        println!(
            "  {} |{}| {}",
            format!("{i:>2}").bright_black(),
            shown,
            format!("({} tiles)", row.chars().count()).bright_black()
        );
    }

    println!(
        "\n  {} letters, {} signs, {} spaces ({} tiles)",
        report.letters,
        report.symbols,
        report.spaces,
        report.tile_count()
    );
}

/// Print a scripted game
pub fn print_reveal_result(result: &RevealResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Panel: {}", result.phrase.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let outcome = if step.matched > 0 {
            format!("{} found", step.matched).green()
        } else {
            "not on the panel".red()
        };
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.letter.to_uppercase().to_string().bold(),
            outcome
        );

        if verbose {
            for line in &step.panel {
                println!("  {line}");
            }
            println!("  Hidden letters left: {}", step.hidden_after);
        }
    }

    println!();
    for line in &result.final_panel {
        println!("  {line}");
    }
    println!();

    if result.solved {
        println!("{}", "✅ Panel solved!".green().bold());
    } else {
        println!("{}", "❌ Panel not solved yet".red().bold());
    }
}

/// Plain-text panel, one line per row
#[must_use]
pub fn plain_panel(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| row_to_string(row))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelWidth;
    use crate::session::Session;

    #[test]
    fn plain_panel_joins_rows() {
        let mut session = Session::new(Board::new(), PanelWidth::Narrow);
        session.submit_phrase("hola mundo").unwrap();
        session.submit_guess_letter("h").unwrap();
        session.request_confirm_next().unwrap();

        assert_eq!(plain_panel(session.view()), "H _ _ _\n_ _ _ _ _");
    }

    #[test]
    fn colored_tile_hides_pending_character() {
        colored::control::set_override(false);
        let mut session = Session::new(Board::new(), PanelWidth::Wide);
        session.submit_phrase("sí").unwrap();
        session.submit_guess_letter("s").unwrap();

        let row = &session.view().rows()[0];
        assert_eq!(colored_tile(&row[0]).to_string(), "   ");
        session.request_confirm_next().unwrap();
        let row = &session.view().rows()[0];
        assert_eq!(colored_tile(&row[0]).to_string(), " S ");
    }
}
