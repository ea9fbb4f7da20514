//! Command implementations

pub mod layout;
pub mod reveal;
pub mod simple;

pub use layout::{LayoutReport, analyze_layout};
pub use reveal::{RevealConfig, RevealResult, RevealStep, run_reveal};
pub use simple::run_simple;
