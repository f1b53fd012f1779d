use anyhow::Result;
use tracing::{error, info};

use crate::api::client::ChatBackend;
use crate::api::models::Venue;
use crate::app::input::InputBuffer;
use crate::app::Intent;
use crate::store::{Store, Turn};
use crate::ui::card::{CardOptions, VenueCard};
use crate::ui::theme::Theme;
use crate::ui::{Role, View};

pub const FALLBACK_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";
pub const NO_SAVED_VENUES: &str = "No saved venues yet.";
pub const SAVED_VENUES_HEADER: &str = "Here are your saved venues:";
pub const VENUE_SAVED: &str = "Venue saved!";

/// Owns the store, the chat backend and the view for one session.
///
/// Every handler takes `&mut self`, so a send runs to completion before the
/// next intent is dispatched.
pub struct Controller<V: View> {
    store: Store,
    backend: Box<dyn ChatBackend>,
    view: V,
    input: InputBuffer,
    cards: Vec<VenueCard>,
    card_options: CardOptions,
    history_open: bool,
    theme: Theme,
}

impl<V: View> Controller<V> {
    pub fn new(store: Store, backend: Box<dyn ChatBackend>, mut view: V, card_options: CardOptions) -> Self {
        let theme = store.theme();
        view.apply_theme(theme);
        Self {
            store,
            backend,
            view,
            input: InputBuffer::default(),
            cards: Vec::new(),
            card_options,
            history_open: false,
            theme,
        }
    }

    pub async fn dispatch(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::Send => self.handle_send().await,
            Intent::ToggleHistory => {
                self.toggle_history();
                Ok(())
            }
            Intent::ShowSaved => {
                self.show_saved();
                Ok(())
            }
            Intent::ToggleTheme => self.toggle_theme(),
            Intent::SaveVenue(venue) => self.save_venue(&venue),
        }
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    /// Cards from the most recent venue render.
    pub fn cards(&self) -> &[VenueCard] {
        &self.cards
    }

    /// Looks up a card by its 1-based position.
    pub fn card(&self, position: usize) -> Option<&VenueCard> {
        position.checked_sub(1).and_then(|i| self.cards.get(i))
    }

    async fn handle_send(&mut self) -> Result<()> {
        let Some(message) = self.input.take_submission() else {
            return Ok(());
        };

        self.view.add_message(&message, Role::User);
        let loading = self.view.show_loading();
        self.view.pin_to_bottom();

        let outcome = self.backend.send(&message).await;
        self.view.remove_loading(loading);

        let result = match outcome {
            Ok(reply) => {
                self.view.add_message(&reply.response, Role::Bot);
                if !reply.venues.is_empty() {
                    self.render_venues(&reply.venues);
                }
                self.store.append_history(Turn::new(message, reply.response))
            }
            Err(e) => {
                error!(error = %e, transport = e.is_transport(), "chat request failed");
                self.view.add_message(FALLBACK_MESSAGE, Role::Bot);
                Ok(())
            }
        };

        self.view.pin_to_bottom();
        result
    }

    fn render_venues(&mut self, venues: &[Venue]) {
        self.cards = venues
            .iter()
            .map(|v| VenueCard::build(v, &self.card_options))
            .collect();
        for (i, card) in self.cards.iter().enumerate() {
            self.view.add_venue_card(card, i + 1);
        }
    }

    fn show_saved(&mut self) {
        self.view.reset();
        self.cards.clear();
        if self.store.saved_venues().is_empty() {
            self.view.add_message(NO_SAVED_VENUES, Role::Bot);
        } else {
            self.view.add_message(SAVED_VENUES_HEADER, Role::Bot);
            let saved = self.store.saved_venues().to_vec();
            self.render_venues(&saved);
        }
        self.view.pin_to_bottom();
    }

    fn toggle_history(&mut self) {
        self.history_open = !self.history_open;
        self.view.show_history_panel(self.history_open, self.store.history());
    }

    fn toggle_theme(&mut self) -> Result<()> {
        self.theme = self.theme.toggled();
        self.view.apply_theme(self.theme);
        self.store.set_theme(self.theme)
    }

    fn save_venue(&mut self, venue: &Venue) -> Result<()> {
        if self.store.save_venue(venue)? {
            info!(venue = %venue.name, "venue saved");
            self.view.notify(VENUE_SAVED);
        }
        Ok(())
    }
}
