//! Chat controller: turns named user intents into view updates, network calls
//! and store writes.

pub mod commands;
pub mod controller;
pub mod input;


use crate::api::models::Venue;

pub use controller::{Controller, FALLBACK_MESSAGE};

/// Everything a user can ask the client to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Submit whatever is in the input buffer.
    Send,
    ToggleHistory,
    ShowSaved,
    ToggleTheme,
    SaveVenue(Venue),
}
