//! El Panel - CLI
//!
//! Phrase panel game with TUI and console modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ruleta_panel::{
    commands::{RevealConfig, analyze_layout, run_reveal, run_simple},
    config::PanelWidth,
    output::{print_layout_report, print_reveal_result},
    phrases::{PhrasePool, loader::load_from_file},
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "ruleta",
    about = "The phrase panel: guess letters, light up tiles, reveal them one by one",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Panel width: auto (follow the terminal), narrow (8 columns) or wide (12 columns)
    #[arg(short, long, global = true, value_enum, default_value_t = WidthArg::Auto, env = "RULETA_PANEL_WIDTH")]
    width: WidthArg,

    /// File with one phrase per line for random rounds (default: embedded list)
    #[arg(short, long, global = true)]
    phrases: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG, default "warn")
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Start with a random phrase instead of typing one
        #[arg(short, long)]
        random: bool,
    },

    /// Simple console mode (no TUI)
    Simple {
        /// Draw every phrase from the pool instead of asking for it
        #[arg(short, long)]
        random: bool,
    },

    /// Show how a phrase is laid out on the panel
    Layout {
        /// The phrase to lay out
        phrase: String,
    },

    /// Play a fixed list of letters against a phrase
    Reveal {
        /// The secret phrase
        phrase: String,

        /// Letters to guess in order, e.g. "a e s" or "aes"
        letters: String,

        /// Show the panel after every guess
        #[arg(short, long)]
        verbose: bool,

        /// Reveal the rest of the panel at the end
        #[arg(short, long)]
        solve: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WidthArg {
    Auto,
    Narrow,
    Wide,
}

impl WidthArg {
    /// Fixed preset, `None` for auto
    const fn fixed(self) -> Option<PanelWidth> {
        match self {
            Self::Auto => None,
            Self::Narrow => Some(PanelWidth::Narrow),
            Self::Wide => Some(PanelWidth::Wide),
        }
    }

    /// Preset for console output; auto measures the terminal once
    fn resolve(self) -> PanelWidth {
        self.fixed().unwrap_or_else(|| {
            crossterm::terminal::size()
                .map(|(columns, _)| PanelWidth::for_viewport(columns))
                .unwrap_or_default()
        })
    }
}

/// Set up the tracing subscriber
///
/// Logs go to `log_file` when given. Otherwise console commands log to stderr
/// and the TUI, which owns the terminal, does not log at all.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else if !tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

/// Load the phrase pool from `path`, or the embedded list
fn load_pool(path: Option<&Path>) -> Result<PhrasePool> {
    let Some(path) = path else {
        return Ok(PhrasePool::embedded());
    };

    let phrases = load_from_file(path)
        .with_context(|| format!("Failed to read phrases from {}", path.display()))?;
    info!(count = phrases.len(), path = %path.display(), "loaded phrase pool");
    Ok(PhrasePool::new(phrases))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { random: false });

    init_logging(
        cli.log_file.as_deref(),
        matches!(command, Commands::Play { .. }),
    )?;

    match command {
        Commands::Play { random } => {
            let pool = load_pool(cli.phrases.as_deref())?;
            run_play_command(pool, cli.width.fixed(), random)
        }
        Commands::Simple { random } => {
            let pool = load_pool(cli.phrases.as_deref())?;
            run_simple(cli.width.resolve(), &pool, random).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Layout { phrase } => {
            let report = analyze_layout(&phrase, cli.width.resolve())?;
            print_layout_report(&report);
            Ok(())
        }
        Commands::Reveal {
            phrase,
            letters,
            verbose,
            solve,
        } => {
            let mut config = RevealConfig::new(phrase, letters);
            config.width = cli.width.resolve();
            config.solve = solve;

            let result = run_reveal(&config)?;
            print_reveal_result(&result, verbose);
            Ok(())
        }
    }
}

fn run_play_command(pool: PhrasePool, width: Option<PanelWidth>, random: bool) -> Result<()> {
    use ruleta_panel::interactive::{App, run_tui};

    let mut app = App::new(pool, width);
    if random {
        app.random_phrase();
    }
    run_tui(app)
}
