//! Client Errors
//!
//! Failures of diary actions, split into validation (no request was made)
//! and request failures.

use thiserror::Error;

use crate::messages;

/// Presence checks on the entry form; `Display` is the alert text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", messages::TITLE_REQUIRED)]
    MissingTitle,
    #[error("{}", messages::CONTENT_REQUIRED)]
    MissingContent,
}

/// A request to the diary server that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// fetch rejected (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx reply; `message` is the body's `error` field when present
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String> },
    /// 2xx reply whose body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Request body could not be serialized
    #[error("could not encode request: {0}")]
    Encode(String),
}

pub const UNAUTHORIZED: u16 = 401;

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Server { status, .. } if *status == UNAUTHORIZED)
    }

    /// Text for the blocking alert: server message verbatim, else `fallback`.
    /// Transport and decode failures always get the generic message.
    pub fn alert_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Server { message: Some(msg), .. } if !msg.is_empty() => msg.clone(),
            ClientError::Server { .. } => fallback.to_string(),
            ClientError::Network(_) | ClientError::Decode(_) | ClientError::Encode(_) => {
                messages::GENERIC_ERROR.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_alert_text() {
        assert_eq!(ValidationError::MissingTitle.to_string(), "タイトルを入力してください");
        assert_eq!(ValidationError::MissingContent.to_string(), "内容を入力してください");
    }

    #[test]
    fn test_alert_message_prefers_server_text() {
        let err = ClientError::Server { status: 403, message: Some("編集権限がありません".into()) };
        assert_eq!(err.alert_message(messages::UPDATE_FAILED), "編集権限がありません");
        assert!(!err.is_unauthorized());

        let err = ClientError::Server { status: 500, message: None };
        assert_eq!(err.alert_message(messages::UPDATE_FAILED), messages::UPDATE_FAILED);
    }

    #[test]
    fn test_transport_failures_use_generic_text() {
        let err = ClientError::Network("offline".into());
        assert_eq!(err.alert_message(messages::POST_FAILED), messages::GENERIC_ERROR);
        assert!(!err.is_unauthorized());

        let err = ClientError::Encode("key must be a string".into());
        assert_eq!(err.alert_message(messages::UPDATE_FAILED), messages::GENERIC_ERROR);
        assert_eq!(err.to_string(), "could not encode request: key must be a string");
    }

    #[test]
    fn test_unauthorized() {
        let err = ClientError::Server { status: 401, message: None };
        assert!(err.is_unauthorized());
    }
}
