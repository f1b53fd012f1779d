use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

use crate::api::error::ChatError;
use crate::api::models::{decode_each, ChatReply, ChatRequest, ChatResponse};

const CHAT_PATH: &str = "/api/chat";

/// Anything that can answer one user message.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, message: &str) -> Result<ChatReply, ChatError>;
}

/// Talks to the chat service over HTTP. One POST per message, no retries.
#[derive(Clone)]
pub struct HttpChatClient {
    client: Client,
    endpoint: String,
}

impl HttpChatClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().pool_max_idle_per_host(8).build()?;
        Ok(Self {
            client,
            endpoint: build_endpoint(base_url),
        })
    }
}

fn build_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CHAT_PATH)
}

/// Applies the service's error convention to a decoded body.
pub fn into_reply(body: ChatResponse) -> Result<ChatReply, ChatError> {
    if let Some(err) = body.error.filter(|e| !e.is_empty()) {
        return Err(ChatError::Application(err));
    }
    let response = body
        .response
        .ok_or_else(|| ChatError::Decode("missing `response` field".to_string()))?;
    Ok(ChatReply {
        response,
        venues: decode_each(body.venues.unwrap_or_default(), "venue"),
    })
}

#[async_trait]
impl ChatBackend for HttpChatClient {
    async fn send(&self, message: &str) -> Result<ChatReply, ChatError> {
        debug!(endpoint = %self.endpoint, "posting chat message");
        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&ChatRequest { message })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ChatError::Status { status, body });
        }

        let bytes = resp.bytes().await?;
        let body: ChatResponse =
            serde_json::from_slice(&bytes).map_err(|e| ChatError::Decode(e.to_string()))?;
        into_reply(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Venue;

    #[test]
    fn endpoint_strips_trailing_slash() {
        assert_eq!(build_endpoint("http://localhost:8000/"), "http://localhost:8000/api/chat");
        assert_eq!(build_endpoint("http://h"), "http://h/api/chat");
    }

    #[test]
    fn error_field_wins_over_response() {
        let body = ChatResponse {
            response: Some("hi".into()),
            venues: None,
            error: Some("quota".into()),
        };
        assert!(matches!(into_reply(body), Err(ChatError::Application(e)) if e == "quota"));
    }

    #[test]
    fn empty_error_is_not_an_error() {
        let body = ChatResponse {
            response: Some("ok".into()),
            venues: Some(vec![serde_json::to_value(Venue::new("A", "addr")).unwrap()]),
            error: Some(String::new()),
        };
        let reply = into_reply(body).unwrap();
        assert_eq!(reply.response, "ok");
        assert_eq!(reply.venues.len(), 1);
    }

    #[test]
    fn odd_venue_fields_keep_the_reply() {
        let body: ChatResponse = serde_json::from_str(
            r#"{"response":"Here you go","venues":[
                {"name":"Loft","address":"2 St","price":2,"rating":"4.8"},
                {"address":"nameless"}
            ]}"#,
        )
        .unwrap();
        let reply = into_reply(body).unwrap();
        assert_eq!(reply.response, "Here you go");
        assert_eq!(reply.venues.len(), 1);
        assert_eq!(reply.venues[0].name, "Loft");
    }

    #[test]
    fn missing_response_is_a_decode_error() {
        let body = ChatResponse { response: None, venues: None, error: None };
        assert!(matches!(into_reply(body), Err(ChatError::Decode(_))));
    }
}
