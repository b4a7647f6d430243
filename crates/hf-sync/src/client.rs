use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::types::RemoteFile;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

const USER_AGENT: &str = concat!("hydrogen-forge/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

#[derive(Deserialize)]
struct ContentsResponse {
    sha: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Minimal GitHub contents API client: read a file, create or update a file.
pub struct GitHubClient {
    http: Client,
    config: SyncConfig,
}

impl GitHubClient {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub async fn get_file(&self, path: &str) -> Result<RemoteFile, SyncError> {
        tracing::debug!("GET contents {}", path);
        let request = self.http.get(self.config.contents_url(path));
        let response = self.send(request, path).await?;

        let body: ContentsResponse = response.json().await?;
        let Some(encoded) = body.content else {
            return Err(SyncError::NotFound(path.to_string()));
        };

        Ok(RemoteFile {
            path: path.to_string(),
            sha: body.sha,
            content: decode_content(path, &encoded)?,
        })
    }

    /// Create `path`, or update it when `sha` names the current blob.
    pub async fn put_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        sha: Option<&str>,
    ) -> Result<(), SyncError> {
        let mut body = json!({
            "message": message,
            "content": STANDARD.encode(content.as_bytes()),
        });
        if let Some(sha) = sha {
            body["sha"] = json!(sha);
        }

        tracing::debug!("PUT contents {} ({})", path, message);
        let request = self.http.put(self.config.contents_url(path)).json(&body);
        self.send(request, path).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Response, SyncError> {
        let response = request
            .bearer_auth(&self.config.token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SyncError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|b| b.message)
                .unwrap_or_default();
            tracing::warn!("GitHub responded with {} for {}", status, path);
            return Err(SyncError::Http {
                path: path.to_string(),
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

/// The contents API wraps base64 at 60 columns; strip whitespace first.
fn decode_content(path: &str, encoded: &str) -> Result<String, SyncError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact).map_err(|e| SyncError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| SyncError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}
