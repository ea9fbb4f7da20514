//! El Panel
//!
//! The phrase panel of a TV word game: one player enters a secret phrase, the
//! other guesses letters. Matching tiles light up and are revealed one by one.
//! Accents are ignored when matching, but Ñ is its own letter.
//!
//! # Quick Start
//!
//! ```rust
//! use ruleta_panel::config::PanelWidth;
//! use ruleta_panel::session::{PanelEvent, Session};
//!
//! let mut session = Session::new(Vec::<PanelEvent>::new(), PanelWidth::Wide);
//! session.submit_phrase("¿Qué tal, amigo?").unwrap();
//!
//! // 'e' finds the accented É and highlights it
//! let result = session.submit_guess_letter("e").unwrap();
//! assert_eq!(result.count(), 1);
//!
//! // The same button now reveals it
//! assert!(session.request_confirm_next().unwrap());
//! ```

// Core domain types
pub mod core;

// Panel width presets
pub mod config;

// Phrase layout
pub mod layout;

// Tile state and reveals
pub mod reveal;

// Round lifecycle and view interface
pub mod session;

// Phrase pools
pub mod phrases;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
