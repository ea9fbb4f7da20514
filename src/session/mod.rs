//! Game session
//!
//! Phrase intake, round lifecycle and the guess/confirm dispatch, plus the
//! view interface the session renders through.

mod controller;
mod error;
mod view;

pub use controller::{Dispatch, Session};
pub use error::{Result, SessionError};
pub use view::{PanelEvent, PanelView};
