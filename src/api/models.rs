use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::warn;

/// Body of `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Raw response body as the service sends it.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
    /// Kept raw so one malformed record cannot sink the whole reply.
    #[serde(default)]
    pub venues: Option<Vec<Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A successful reply after the application-level error check.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub venues: Vec<Venue>,
}

/// A venue recommended by the service. `name` is the identity key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Venue {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            rating: None,
            price: None,
            capacity: None,
            image: None,
            address: address.into(),
            latitude: None,
            longitude: None,
        }
    }
}

/// A display field the service may send as a number or a string. Stored back
/// in whichever form it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
    Other(Value),
}

impl Scalar {
    /// Zero, the empty string and `false` count as absent.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
            Self::Text(s) => !s.is_empty(),
            Self::Other(v) => !matches!(v, Value::Bool(false) | Value::Null),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or_else(|| Self::Text(value.to_string()), Self::Number)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Decodes each element on its own, dropping (and logging) the ones that do
/// not fit `T`.
pub fn decode_each<T: serde::de::DeserializeOwned>(items: Vec<Value>, what: &str) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(what, index = i, error = %e, "skipping malformed record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venue_accepts_minimal_record() {
        let v: Venue =
            serde_json::from_str(r#"{"name":"Hall A","rating":4.5,"address":"123 Main St"}"#).unwrap();
        assert_eq!(v.name, "Hall A");
        assert_eq!(v.rating, Some(Scalar::from(4.5f64)));
        assert!(v.kind.is_none());
        assert!(v.price.is_none());
        assert!(v.capacity.is_none());
    }

    #[test]
    fn venue_type_field_maps_to_kind() {
        let v: Venue = serde_json::from_str(
            r#"{"name":"Arena","type":"Stadium","address":"1 Park Ave","capacity":500,"latitude":1.5}"#,
        )
        .unwrap();
        assert_eq!(v.kind.as_deref(), Some("Stadium"));
        assert_eq!(v.capacity, Some(Scalar::from(500u32)));

        let back = serde_json::to_value(&v).unwrap();
        assert_eq!(back["type"], "Stadium");
        assert_eq!(back["latitude"], 1.5);
        assert!(back.get("price").is_none());
    }

    #[test]
    fn numeric_and_text_fields_are_kept_as_received() {
        let raw = serde_json::json!({
            "name": "Loft", "address": "2 St", "price": 2, "rating": "4.8", "capacity": "about 40"
        });
        let v: Venue = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(v.price.as_ref().map(ToString::to_string).as_deref(), Some("2"));
        assert_eq!(v.rating.as_ref().map(ToString::to_string).as_deref(), Some("4.8"));
        assert_eq!(v.capacity.as_ref().map(ToString::to_string).as_deref(), Some("about 40"));
        assert_eq!(serde_json::to_value(&v).unwrap(), raw);
    }

    #[test]
    fn absent_rating_is_not_written_back() {
        let v = Venue::new("Hall A", "123 Main St");
        let back = serde_json::to_value(&v).unwrap();
        assert!(back.get("rating").is_none());
    }

    #[test]
    fn zero_and_empty_are_not_present() {
        assert!(!Scalar::from(0u32).is_present());
        assert!(!Scalar::from("").is_present());
        assert!(Scalar::from(2u32).is_present());
        assert!(Scalar::from("$$").is_present());
    }

    #[test]
    fn decode_each_skips_only_bad_elements() {
        let items = vec![
            serde_json::json!({"name": "A", "address": "1 St"}),
            serde_json::json!({"address": "no name"}),
            serde_json::json!({"name": "C", "address": "3 St", "price": 2}),
        ];
        let venues: Vec<Venue> = decode_each(items, "venue");
        let names: Vec<&str> = venues.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn response_tolerates_missing_fields() {
        let r: ChatResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert!(r.response.is_none());
        assert!(r.venues.is_none());
        assert_eq!(r.error.as_deref(), Some("boom"));
    }
}
