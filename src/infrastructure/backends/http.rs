#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use tokio::fs;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::ChatPrompt;
use crate::domain::models::ChatReply;
use crate::domain::models::PendingFile;
use crate::domain::models::ServiceError;
use crate::domain::models::UploadReceipt;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct UploadResponse {
    session_id: String,
    filename: String,
    message: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatRequest {
    message: String,
    session_id: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ChatResponse {
    response: String,
    is_related: Option<bool>,
    confidence: Option<f64>,
}

/// Error bodies are free form. FastAPI style services report `detail`,
/// others use `error`, and neither is guaranteed to be a string.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
struct ErrorResponse {
    detail: Option<serde_json::Value>,
    error: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn message(&self) -> Option<String> {
        return [&self.detail, &self.error]
            .into_iter()
            .flatten()
            .find_map(|e| return e.as_str().map(|s| return s.to_string()));
    }
}

fn convert_err(err: reqwest::Error) -> ServiceError {
    return ServiceError::Transport(err.to_string());
}

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ServiceError> {
    let status = res.status();
    let body = res.text().await.map_err(convert_err)?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| return e.message());

        tracing::error!(
            status = status.as_u16(),
            detail = ?detail,
            "Document service rejected the request"
        );
        return Err(ServiceError::Rejected {
            status: status.as_u16(),
            detail,
        });
    }

    return serde_json::from_str(&body).map_err(|err| return ServiceError::Decode(err.to_string()));
}

pub struct HttpBackend {
    url: String,
    timeout: String,
    health_check_timeout: String,
}

impl Default for HttpBackend {
    fn default() -> HttpBackend {
        return HttpBackend {
            url: Config::get(ConfigKey::ServiceURL),
            timeout: Config::get(ConfigKey::RequestTimeout),
            health_check_timeout: Config::get(ConfigKey::HealthCheckTimeout),
        };
    }
}

impl HttpBackend {
    fn endpoint(&self, path: &str) -> String {
        return format!("{url}/{path}", url = self.url.trim_end_matches('/'));
    }

    fn request_timeout(&self) -> Result<Duration, ServiceError> {
        let millis = self.timeout.parse::<u64>().map_err(|err| {
            return ServiceError::Transport(format!("invalid request timeout: {err}"));
        })?;

        return Ok(Duration::from_millis(millis));
    }
}

#[async_trait]
impl Backend for HttpBackend {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Document service URL is not defined");
        }

        let res = reqwest::Client::new()
            .get(self.endpoint("health"))
            .timeout(Duration::from_millis(
                self.health_check_timeout.parse::<u64>()?,
            ))
            .send()
            .await;

        let status = match res {
            Ok(res) => res.status(),
            Err(err) => {
                tracing::error!(error = ?err, "Document service is not running");
                bail!("Document service is not running at {}", self.url);
            }
        };
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Document service health check failed");
            bail!("Document service health check failed with status {}", status.as_u16());
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn upload(&self, file: &PendingFile) -> Result<UploadReceipt, ServiceError> {
        let bytes = fs::read(&file.path).await.map_err(|err| {
            tracing::error!(error = ?err, path = ?file.path, "Failed to read document");
            return ServiceError::Read(format!("{}: {err}", file.path.display()));
        })?;

        let part = multipart::Part::bytes(bytes)
            .file_name(file.name.to_string())
            .mime_str(&file.media_type)
            .map_err(convert_err)?;
        let form = multipart::Form::new().part("file", part);

        let res = reqwest::Client::new()
            .post(self.endpoint("upload"))
            .timeout(self.request_timeout()?)
            .multipart(form)
            .send()
            .await
            .map_err(convert_err)?;

        let body: UploadResponse = parse_response(res).await?;
        tracing::debug!(body = ?body, "Upload response");

        return Ok(UploadReceipt {
            session_id: body.session_id,
            filename: body.filename,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn chat(&self, prompt: &ChatPrompt) -> Result<ChatReply, ServiceError> {
        let req = ChatRequest {
            message: prompt.message.to_string(),
            session_id: prompt.session_id.to_string(),
        };

        let res = reqwest::Client::new()
            .post(self.endpoint("chat"))
            .timeout(self.request_timeout()?)
            .json(&req)
            .send()
            .await
            .map_err(convert_err)?;

        let body: ChatResponse = parse_response(res).await?;
        tracing::debug!(body = ?body, "Chat response");

        return Ok(ChatReply {
            response: body.response,
            is_related: body.is_related,
            confidence: body.confidence,
        });
    }
}
