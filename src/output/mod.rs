//! Terminal output formatting
//!
//! The view-side board plus display utilities for the console commands.

pub mod board;
pub mod display;
pub mod formatters;

pub use board::Board;
pub use display::{plain_panel, print_layout_report, print_panel, print_reveal_result};
