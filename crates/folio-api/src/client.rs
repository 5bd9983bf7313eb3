// Content store HTTP client
//
// Wraps `reqwest::Client` with base-URL joining and FastAPI error-body
// decoding. Resource endpoints live in sibling modules as inherent methods
// so this file stays focused on transport mechanics.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::HealthResponse;
use crate::transport::TransportConfig;

/// FastAPI error body: `{"detail": "..."}` or, for request validation
/// failures, `{"detail": [{"loc": [...], "msg": "...", "type": "..."}]}`.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<Detail>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

#[derive(Deserialize)]
struct ValidationIssue {
    msg: String,
}

/// Raw HTTP client for the portfolio content store.
///
/// Every list endpoint returns a bare JSON array, every create endpoint
/// returns the created record, and deletes answer `204 No Content`.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ContentClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `base_url` is the store root (e.g. `http://localhost:8000`); a path
    /// prefix such as `https://example.com/api` is preserved.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The store base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthResponse, Error> {
        let url = self.url("health")?;
        self.get(url).await
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Join `path` onto the base URL: `{base}/{path}`.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        Self::parse_json(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::parse_json(resp).await
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {}", url);

        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::check_status(resp).await.map(drop)
    }

    /// Fail non-2xx responses with the store's `detail` message.
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }

    async fn parse_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let resp = Self::check_status(resp).await?;
        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| {
            let preview = preview(&body);
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }
}

/// Extract a human-readable message from an error response body.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);

    match detail {
        Some(Detail::Message(msg)) if !msg.is_empty() => msg,
        Some(Detail::Validation(mut issues)) if !issues.is_empty() => issues.swap_remove(0).msg,
        _ if body.trim().is_empty() => format!("HTTP {status}"),
        _ => format!("HTTP {status}: {}", preview(body)),
    }
}

fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn plain_detail_is_used_verbatim() {
        let msg = error_message(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"detail": "Category not found"}"#,
        );
        assert_eq!(msg, "Category not found");
    }

    #[test]
    fn first_validation_detail_is_used() {
        let body = r#"{"detail": [
            {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"},
            {"loc": ["body", "name"], "msg": "Field required", "type": "missing"}
        ]}"#;
        let msg = error_message(reqwest::StatusCode::UNPROCESSABLE_ENTITY, body);
        assert_eq!(msg, "value is not a valid email address");
    }

    #[test]
    fn non_json_body_falls_back_to_status() {
        let msg = error_message(reqwest::StatusCode::BAD_GATEWAY, "");
        assert_eq!(msg, "HTTP 502 Bad Gateway");

        let msg = error_message(reqwest::StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(msg, "HTTP 502 Bad Gateway: upstream down");
    }

    #[test]
    fn url_joins_preserve_prefix() {
        let client = ContentClient::with_client(
            reqwest::Client::new(),
            Url::parse("https://example.com/api/").unwrap(),
        );
        assert_eq!(
            client.url("social-links/").unwrap().as_str(),
            "https://example.com/api/social-links/"
        );
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let body = "é".repeat(150);
        assert!(preview(&body).len() <= 200);
    }
}
