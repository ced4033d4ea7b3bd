//! HTTP Backend
//!
//! `DiaryBackend` over the browser's fetch, via gloo-net.

use gloo_net::http::{Request, Response};

use super::DiaryBackend;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{ApiError, Entry, EntryPayload};

#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

fn network(e: gloo_net::Error) -> ClientError {
    ClientError::Network(e.to_string())
}

/// Pass 2xx through; otherwise read `{error}` from the body if it is JSON
async fn check(response: Response) -> Result<Response, ClientError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response.text().await.ok().and_then(|body| error_message(&body));
    Err(ClientError::Server { status, message })
}

/// `error` field of a JSON error body; anything else carries no message
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .and_then(|reply| reply.error)
        .filter(|msg| !msg.is_empty())
}

async fn send_json(request: gloo_net::http::RequestBuilder, payload: &EntryPayload) -> Result<(), ClientError> {
    let response = request
        .json(payload)
        .map_err(|e| ClientError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    check(response).await.map(|_| ())
}

impl DiaryBackend for HttpBackend {
    async fn list_entries(&self) -> Result<Vec<Entry>, ClientError> {
        let response = Request::get(&self.config.entries_url())
            .send()
            .await
            .map_err(network)?;
        check(response)
            .await?
            .json::<Vec<Entry>>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn create_entry(&self, payload: &EntryPayload) -> Result<(), ClientError> {
        send_json(Request::post(&self.config.entries_url()), payload).await
    }

    async fn update_entry(&self, id: u32, payload: &EntryPayload) -> Result<(), ClientError> {
        send_json(Request::put(&self.config.entry_url(id)), payload).await
    }

    async fn delete_entry(&self, id: u32) -> Result<(), ClientError> {
        let response = Request::delete(&self.config.entry_url(id))
            .send()
            .await
            .map_err(network)?;
        check(response).await.map(|_| ())
    }

    async fn logout(&self) -> Result<(), ClientError> {
        let response = Request::post(&self.config.logout_url())
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(network)?;
        check(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_reads_error_field() {
        assert_eq!(error_message(r#"{"error":"x"}"#).as_deref(), Some("x"));
        assert_eq!(
            error_message(r#"{"error":"投稿が見つかりません"}"#).as_deref(),
            Some("投稿が見つかりません")
        );
    }

    #[test]
    fn test_error_message_without_error_field() {
        assert_eq!(error_message(r#"{"message":"m"}"#), None);
        assert_eq!(error_message(r#"{"error":""}"#), None);
        assert_eq!(error_message(r#"{"error":null}"#), None);
    }

    #[test]
    fn test_error_message_non_json_body() {
        assert_eq!(error_message("<html>"), None);
        assert_eq!(error_message(""), None);
    }
}
