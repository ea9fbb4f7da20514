//! Simple interactive CLI mode
//!
//! Text-based panel game without TUI

use crate::config::PanelWidth;
use crate::output::Board;
use crate::output::display::{print_button, print_celebration, print_panel, print_tried_letters};
use crate::phrases::PhrasePool;
use crate::reveal::ButtonMode;
use crate::session::{Dispatch, Session, SessionError};
use colored::Colorize;
use std::io::{self, Write};

/// What the player typed at the panel prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum PanelInput {
    Quit,
    NewPhrase,
    Solve,
    /// A letter, or an empty line to confirm
    Press(String),
}

fn parse_panel_input(input: &str) -> PanelInput {
    match input.trim().to_lowercase().as_str() {
        "quit" | "exit" | "salir" => PanelInput::Quit,
        "new" | "nueva" => PanelInput::NewPhrase,
        "solve" | "resolver" => PanelInput::Solve,
        _ => PanelInput::Press(input.trim().to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// With `random`, every round draws its phrase from `pool` instead of asking.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a random
/// round is requested from an empty pool.
pub fn run_simple(width: PanelWidth, pool: &PhrasePool, random: bool) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              La Ruleta del Reino - El Panel                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("One player enters a secret phrase, the other guesses letters.");
    println!("  - Type a letter and press Enter to guess ({})", ButtonMode::Guess);
    println!("  - Press Enter to reveal the next highlighted letter ({})", ButtonMode::Confirm);
    println!("  - Accents don't matter: 'e' finds 'É', but 'n' never finds 'Ñ'\n");
    println!("Commands: 'solve' to reveal the panel, 'new' for a new phrase, 'quit' to exit\n");

    let mut session = Session::new(Board::new(), width);
    let mut rng = rand::rng();

    loop {
        // Phrase intake
        if random {
            let phrase = pool
                .choose(&mut rng)
                .ok_or("The phrase pool is empty")?
                .clone();
            session.start_round(phrase);
            println!("🎲 Random phrase on the panel!");
        } else {
            let raw = get_user_input("Secret phrase (or 'quit')")?;
            if matches!(parse_panel_input(&raw), PanelInput::Quit) {
                println!("\n👋 ¡Hasta luego!\n");
                return Ok(());
            }
            if let Err(err) = session.submit_phrase(&raw) {
                println!("❌ {err}\n");
                continue;
            }
        }

        // Guessing; true once the panel is solved
        let solved = loop {
            print_panel(session.view());
            if let Some(round) = session.round() {
                print_tried_letters(&round.tried_letters());
            }

            if session.view().is_completed() {
                let phrase = session
                    .round()
                    .map(|round| round.phrase().to_string())
                    .unwrap_or_default();
                print_celebration(&phrase);
                break true;
            }

            print_button(session.button_mode());
            let prompt = match session.button_mode() {
                ButtonMode::Guess => "Letter",
                ButtonMode::Confirm => "Enter to reveal",
            };

            match parse_panel_input(&get_user_input(prompt)?) {
                PanelInput::Quit => {
                    println!("\n👋 ¡Hasta luego!\n");
                    return Ok(());
                }
                PanelInput::NewPhrase => break false,
                PanelInput::Solve => {
                    session.request_solve().map_err(|e| e.to_string())?;
                }
                PanelInput::Press(text) => {
                    report_press(session.guess_or_confirm(Some(text.as_str())));
                }
            }
        };

        if !solved {
            continue;
        }

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" | "si" | "sí" | "s" => println!("\n🔄 New round!\n"),
            _ => {
                println!("\n👋 ¡Hasta luego!\n");
                return Ok(());
            }
        }
    }
}

fn report_press(outcome: Result<Dispatch, SessionError>) {
    match outcome {
        Ok(Dispatch::Guessed(result)) if result.is_match() => {
            let count = result.count();
            let noun = if count == 1 { "letter" } else { "letters" };
            println!(
                "\n{}",
                format!("✨ {count} {noun} lit up! Press Enter to reveal them one by one.").green()
            );
        }
        Ok(Dispatch::Guessed(_)) => println!("\n{}", "✗ Not on the panel.".red()),
        Ok(Dispatch::Confirmed(_)) => {}
        Err(err) => println!("\n❌ {err}"),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("Input closed".to_string());
    }

    Ok(input.trim().to_string())
}
