//! Venue cards: display fields derived from a [`Venue`] plus its save action.

use crate::api::models::{Scalar, Venue};
use crate::app::Intent;
use crate::config::settings::Settings;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "default-venue.jpg";
pub const DEFAULT_MAPS_URL: &str = "https://www.google.com/maps/dir/?api=1&destination=";

#[derive(Debug, Clone, PartialEq)]
pub struct CardOptions {
    pub placeholder_image: String,
    pub maps_url: String,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            maps_url: DEFAULT_MAPS_URL.to_string(),
        }
    }
}

impl From<&Settings> for CardOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            placeholder_image: settings.placeholder_image.clone(),
            maps_url: settings.maps_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VenueCard {
    pub image: String,
    pub name: String,
    pub kind: String,
    pub rating: String,
    /// `None` leaves the price line out entirely.
    pub price: Option<String>,
    pub capacity: Option<String>,
    pub address: String,
    pub directions_url: String,
    venue: Venue,
}

impl VenueCard {
    pub fn build(venue: &Venue, options: &CardOptions) -> Self {
        Self {
            image: venue
                .image
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| options.placeholder_image.clone()),
            name: venue.name.clone(),
            kind: venue.kind.clone().unwrap_or_default(),
            rating: venue
                .rating
                .as_ref()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "n/a".to_string()),
            price: present(venue.price.as_ref()),
            capacity: present(venue.capacity.as_ref()),
            address: venue.address.clone(),
            directions_url: directions_url(&options.maps_url, &venue.address),
            venue: venue.clone(),
        }
    }

    /// The intent fired by this card's save action.
    pub fn save_intent(&self) -> Intent {
        Intent::SaveVenue(self.venue.clone())
    }
}

fn present(field: Option<&Scalar>) -> Option<String> {
    field.filter(|s| s.is_present()).map(|s| s.to_string())
}

pub fn directions_url(maps_url: &str, address: &str) -> String {
    format!("{}{}", maps_url, urlencoding::encode(address))
}
