use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One completed exchange. Field names match the persisted JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub timestamp: String,
    pub user_message: String,
    // older entries may carry no response, or a null one
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bot_response: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

impl Turn {
    pub fn new(user_message: impl Into<String>, bot_response: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            user_message: user_message.into(),
            bot_response: bot_response.into(),
        }
    }

    /// Timestamp in local time, or the raw string if it does not parse.
    pub fn local_timestamp(&self) -> String {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| self.timestamp.clone())
    }
}
