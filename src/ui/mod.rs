//! Display surface. The controller only talks to [`View`]; the terminal is one
//! implementation of it.

pub mod card;
pub mod terminal;
pub mod theme;

use crate::store::Turn;
use card::VenueCard;
use theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// Handle for a visible loading indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadingId(pub u64);

pub trait View {
    /// Appends a message to the log. Never removes earlier content.
    fn add_message(&mut self, text: &str, role: Role);

    fn show_loading(&mut self) -> LoadingId;
    fn remove_loading(&mut self, id: LoadingId);

    /// Appends a venue card. `position` is 1-based within the current render.
    fn add_venue_card(&mut self, card: &VenueCard, position: usize);

    /// Clears the log.
    fn reset(&mut self);

    /// Keeps the newest content in view.
    fn pin_to_bottom(&mut self);

    fn show_history_panel(&mut self, open: bool, turns: &[Turn]);
    fn apply_theme(&mut self, theme: Theme);
    fn notify(&mut self, message: &str);
}
