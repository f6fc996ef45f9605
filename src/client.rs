//! HTTP transport and response classification.
//!
//! [`Client`] issues one signed JSON POST per call — no retries, no
//! middleware — and classifies the outcome into the crate's error taxonomy:
//!
//! 1. transport failures (timeout, refused connection) become
//!    [`Error::Connection`];
//! 2. HTTP 200 bodies are parsed as a [`GatewayResponse`] and the gateway's
//!    own `status` code decides between success and [`Error::Api`];
//! 3. HTTP 400/401/404 and everything else map to
//!    [`Error::Validation`]/[`Error::Configuration`]/[`Error::Connection`].
//!
//! One carve-out: the transaction-query endpoint reports "no records found"
//! as `status == 2`, which is classified as success on that path only.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use std::time::Duration;
use url::Url;

use crate::endpoints;
use crate::errors::Error;

#[cfg(feature = "telemetry")]
use tracing::instrument;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(25);

/// Parsed gateway response envelope.
///
/// `status == 0` means success. `msg` carries the gateway's human-readable
/// summary. Channel-specific payload fields (trade id, bank codes, redirect
/// payment URL, ...) are kept in `fields` and passed through unmodified.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GatewayResponse {
    pub status: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}

impl GatewayResponse {
    /// Rebuilds the full response body, envelope fields included.
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("status".to_string(), Value::from(self.status));
        map.insert("msg".to_string(), Value::from(self.msg.clone()));
        for (key, value) in &self.fields {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

/// HTTP client for the gateway. One POST per call; never retries.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the timeout applied to each request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends a signed JSON POST and classifies the response.
    ///
    /// The partner key travels in the `x-api-key` header; a missing key is
    /// sent as an empty header and left for the gateway to reject (the
    /// explicit gate is [`Configuration::validate`](crate::config::Configuration::validate)).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "tappay.client.post", skip(self, partner_key, body), fields(url = %url))
    )]
    pub async fn post<T>(
        &self,
        url: &Url,
        partner_key: Option<&str>,
        body: &T,
    ) -> Result<GatewayResponse, Error>
    where
        T: Serialize + ?Sized,
    {
        let result = self.post_inner(url, partner_key, body).await;
        record_outcome(&result);
        result
    }

    async fn post_inner<T>(
        &self,
        url: &Url,
        partner_key: Option<&str>,
        body: &T,
    ) -> Result<GatewayResponse, Error>
    where
        T: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(url.clone())
            .header("x-api-key", partner_key.unwrap_or_default())
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Connection(format!("HTTP Request failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::OK {
            let text = response
                .text()
                .await
                .map_err(|e| Error::Connection(format!("HTTP Request failed: {e}")))?;
            let parsed: GatewayResponse = serde_json::from_str(&text)
                .map_err(|_| Error::Connection("Invalid JSON response".to_string()))?;
            classify_gateway_status(url, parsed)
        } else if status == StatusCode::BAD_REQUEST {
            let text = response.text().await.unwrap_or_default();
            Err(Error::Validation(format!("Invalid request: {text}")))
        } else if status == StatusCode::UNAUTHORIZED {
            Err(Error::Configuration(
                "Authentication failed. Check your partner_key.".to_string(),
            ))
        } else if status == StatusCode::NOT_FOUND {
            Err(Error::Connection(format!("API endpoint not found: {url}")))
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(Error::Connection(format!(
                "HTTP Request failed with code {}: {}",
                status.as_u16(),
                text
            )))
        }
    }
}

fn classify_gateway_status(url: &Url, parsed: GatewayResponse) -> Result<GatewayResponse, Error> {
    match parsed.status {
        0 => Ok(parsed),
        2 if url.path() == endpoints::TRANSACTION_QUERY_PATH => Ok(parsed),
        code => Err(Error::Api {
            code,
            message: parsed.msg.clone(),
            body: parsed.to_value(),
        }),
    }
}

/// Records a failed outcome on the current span.
#[cfg(feature = "telemetry")]
fn record_outcome<R, E: Display>(result: &Result<R, E>) {
    if let Err(err) = result {
        tracing::event!(tracing::Level::ERROR, error = %err, "Gateway request failed");
    }
}

/// Noop if telemetry is off.
#[cfg(not(feature = "telemetry"))]
fn record_outcome<R, E: Display>(_result: &Result<R, E>) {}
