#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::PendingFile;

/// Returned by the service once a document has been accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadReceipt {
    pub session_id: String,
    pub filename: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatPrompt {
    pub message: String,
    pub session_id: String,
}

impl ChatPrompt {
    pub fn new(message: &str, session_id: &str) -> ChatPrompt {
        return ChatPrompt {
            message: message.to_string(),
            session_id: session_id.to_string(),
        };
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub is_related: Option<bool>,
    /// Range is defined by the service and is passed through untouched.
    pub confidence: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("document service responded with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("unable to reach the document service: {0}")]
    Transport(String),
    #[error("unable to decode the document service response: {0}")]
    Decode(String),
    #[error("unable to read {0}")]
    Read(String),
}

impl ServiceError {
    /// Human readable message supplied by the service itself, if it sent
    /// one.
    pub fn detail(&self) -> Option<&str> {
        if let ServiceError::Rejected {
            detail: Some(detail),
            ..
        } = self
        {
            if !detail.trim().is_empty() {
                return Some(detail);
            }
        }

        return None;
    }
}

#[async_trait]
pub trait Backend {
    /// Used at startup to tell the user early when the document service
    /// cannot be reached.
    async fn health_check(&self) -> Result<()>;

    /// Sends the raw bytes of a single file to the service, which replies
    /// with the session to use for follow up questions.
    async fn upload(&self, file: &PendingFile) -> Result<UploadReceipt, ServiceError>;

    /// Asks one question about the document bound to `prompt.session_id`.
    async fn chat(&self, prompt: &ChatPrompt) -> Result<ChatReply, ServiceError>;
}

pub type BackendHandle = Arc<dyn Backend + Send + Sync>;
