//! Durable client state: conversation history, saved venues and the theme flag.
//!
//! Everything lives under three string keys in a [`KeyValueStorage`]. Lists are
//! read once when the store is loaded and the whole list is rewritten after
//! every append.

pub mod history;
pub mod storage;

use anyhow::Result;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::models::{decode_each, Venue};
use crate::ui::theme::Theme;

pub use history::Turn;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

pub const HISTORY_KEY: &str = "chatHistory";
pub const SAVED_VENUES_KEY: &str = "savedVenues";
pub const THEME_KEY: &str = "darkTheme";

pub struct Store {
    storage: Box<dyn KeyValueStorage>,
    history: Vec<Turn>,
    saved_venues: Vec<Venue>,
}

impl Store {
    /// Loads both lists. Missing or unreadable entries become empty lists; this
    /// never fails.
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Self {
        let history = load_list(storage.as_ref(), HISTORY_KEY);
        let saved_venues = load_list(storage.as_ref(), SAVED_VENUES_KEY);
        debug!(turns = history.len(), saved = saved_venues.len(), "store loaded");
        Self {
            storage,
            history,
            saved_venues,
        }
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn saved_venues(&self) -> &[Venue] {
        &self.saved_venues
    }

    pub fn append_history(&mut self, turn: Turn) -> Result<()> {
        self.history.push(turn);
        self.persist(HISTORY_KEY, &serde_json::to_string(&self.history)?)
    }

    /// Saves `venue` unless one with the same name is already saved.
    /// Returns whether the list changed.
    pub fn save_venue(&mut self, venue: &Venue) -> Result<bool> {
        if self.saved_venues.iter().any(|v| v.name == venue.name) {
            return Ok(false);
        }
        self.append_saved_venue(venue.clone())?;
        Ok(true)
    }

    fn append_saved_venue(&mut self, venue: Venue) -> Result<()> {
        self.saved_venues.push(venue);
        self.persist(SAVED_VENUES_KEY, &serde_json::to_string(&self.saved_venues)?)
    }

    pub fn theme(&self) -> Theme {
        match self.storage.get(THEME_KEY) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                warn!(error = %e, "could not read theme, using default");
                Theme::default()
            }
        }
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.persist(THEME_KEY, theme.as_stored())
    }

    fn persist(&self, key: &str, value: &str) -> Result<()> {
        debug!(key, bytes = value.len(), "writing storage entry");
        self.storage.set(key, value)
    }
}

fn load_list<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Vec<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "could not read storage entry, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&raw) {
        Ok(items) => decode_each(items.unwrap_or_default(), key),
        Err(e) => {
            warn!(key, error = %e, "corrupt storage entry, starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(name: &str) -> Venue {
        Venue::new(name, "1 Main St")
    }

    #[test]
    fn empty_storage_loads_empty_lists() {
        let store = Store::load(Box::new(MemoryStorage::new()));
        assert!(store.history().is_empty());
        assert!(store.saved_venues().is_empty());
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn corrupt_entries_load_as_empty() {
        let storage = MemoryStorage::new();
        storage.set(HISTORY_KEY, "{not json").unwrap();
        storage.set(SAVED_VENUES_KEY, "null").unwrap();
        let store = Store::load(Box::new(storage));
        assert!(store.history().is_empty());
        assert!(store.saved_venues().is_empty());
    }

    #[test]
    fn non_array_entry_loads_as_empty() {
        let storage = MemoryStorage::new();
        storage.set(SAVED_VENUES_KEY, r#"{"name":"x"}"#).unwrap();
        let store = Store::load(Box::new(storage));
        assert!(store.saved_venues().is_empty());
    }

    #[test]
    fn null_bot_response_keeps_history() {
        let storage = MemoryStorage::new();
        storage
            .set(
                HISTORY_KEY,
                r#"[{"timestamp":"2024-05-01T10:00:00.000Z","userMessage":"hi","botResponse":null},
                    {"timestamp":"2024-05-01T10:01:00.000Z","userMessage":"again","botResponse":"ok"}]"#,
            )
            .unwrap();
        let mut store = Store::load(Box::new(storage.clone()));
        assert_eq!(store.history().len(), 2);
        assert_eq!(store.history()[0].bot_response, "");

        store.append_history(Turn::new("third", "yes")).unwrap();
        let raw = storage.get(HISTORY_KEY).unwrap().unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn one_bad_saved_venue_does_not_wipe_the_rest() {
        let storage = MemoryStorage::new();
        storage
            .set(
                SAVED_VENUES_KEY,
                r#"[{"name":"Old","address":"1 St","price":2,"rating":"4.5"},
                    {"address":"missing name"},
                    {"name":"Older","address":"3 St"}]"#,
            )
            .unwrap();
        let mut store = Store::load(Box::new(storage.clone()));
        let names: Vec<&str> = store.saved_venues().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Old", "Older"]);

        assert!(store.save_venue(&venue("New")).unwrap());
        let raw = storage.get(SAVED_VENUES_KEY).unwrap().unwrap();
        let on_disk: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk.len(), 3);
        assert_eq!(on_disk[0]["price"], 2);
        assert_eq!(on_disk[0]["rating"], "4.5");
        assert!(on_disk[2].get("rating").is_none());
    }

    #[test]
    fn duplicate_save_is_ignored() {
        let storage = MemoryStorage::new();
        let mut store = Store::load(Box::new(storage.clone()));
        assert!(store.save_venue(&venue("Hall A")).unwrap());
        let before = storage.get(SAVED_VENUES_KEY).unwrap();

        let mut other = venue("Hall A");
        other.address = "somewhere else".into();
        assert!(!store.save_venue(&other).unwrap());

        assert_eq!(store.saved_venues().len(), 1);
        assert_eq!(store.saved_venues()[0].address, "1 Main St");
        assert_eq!(storage.get(SAVED_VENUES_KEY).unwrap(), before);
    }

    #[test]
    fn append_rewrites_the_whole_list() {
        let storage = MemoryStorage::new();
        let mut store = Store::load(Box::new(storage.clone()));
        store.append_history(Turn::new("a", "1")).unwrap();
        store.append_history(Turn::new("b", "2")).unwrap();

        let raw = storage.get(HISTORY_KEY).unwrap().unwrap();
        let parsed: Vec<Turn> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].user_message, "a");
        assert_eq!(parsed[1].user_message, "b");
    }

    #[test]
    fn theme_is_written_as_string_boolean() {
        let storage = MemoryStorage::new();
        let mut store = Store::load(Box::new(storage.clone()));
        store.set_theme(Theme::Light).unwrap();
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("false"));
        assert_eq!(store.theme(), Theme::Light);
        store.set_theme(Theme::Dark).unwrap();
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("true"));
    }
}
