//! NSX Manager HTTP client
//!
//! Thin wrapper around reqwest for the NSX-T Policy API: basic auth,
//! JSON headers, and status/body capture on error responses.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors from NSX API calls
#[derive(Error, Debug)]
pub enum NsxError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl NsxError {
    /// Response body for HTTP status errors, if any.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            NsxError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Authenticated client for one NSX Manager.
#[derive(Clone)]
pub struct NsxClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl NsxClient {
    /// Create a client for the given base URL.
    ///
    /// With `verify_tls` disabled (the default for self-signed manager
    /// certificates) the server certificate is NOT validated; enable it
    /// whenever a trusted CA chain is available.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        verify_tls: bool,
        timeout_secs: u64,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        // NSX requires this to allow overwriting externally-owned objects.
        headers.insert("X-Allow-Overwrite", HeaderValue::from_static("true"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .danger_accept_invalid_certs(!verify_tls)
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
        })
    }

    /// GET a JSON document.
    pub async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, NsxError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|source| NsxError::Transport {
                url: url.clone(),
                source,
            })?;

        Self::read_json(url, response).await
    }

    /// PUT a JSON document and return the server's response body.
    pub async fn put_json(&self, path: &str, body: &Value) -> Result<Value, NsxError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await
            .map_err(|source| NsxError::Transport {
                url: url.clone(),
                source,
            })?;

        Self::read_json(url, response).await
    }

    async fn read_json(url: String, response: reqwest::Response) -> Result<Value, NsxError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| NsxError::Transport {
                url: url.clone(),
                source,
            })?;

        if !status.is_success() {
            return Err(NsxError::Status {
                url,
                status: status.as_u16(),
                body: text,
            });
        }

        debug!("Response {} from {} ({} bytes)", status.as_u16(), url, text.len());

        serde_json::from_str(&text).map_err(|source| NsxError::Decode { url, source })
    }
}
