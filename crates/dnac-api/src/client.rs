// DNA Center HTTP client
//
// Wraps `reqwest::Client` with token authentication, `{ response: ... }`
// envelope unwrapping, and a single re-auth-and-replay on token expiry.
// All endpoint modules (sites, devices, etc.) are implemented as inherent
// methods via separate files to keep this module focused on transport
// mechanics.

use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the DNA Center northbound REST API.
///
/// Exchanges username/password for a session token on first use, attaches
/// `X-Auth-Token` to every request, and transparently re-authenticates
/// exactly once when the controller answers 401. There is no further
/// retry, backoff, or circuit breaking.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: SecretString,
    token: RwLock<Option<String>>,
}

/// Token exchange response: `{ "Token": "<jwt>" }`.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(rename = "Token")]
    token: String,
}

/// Most v1 endpoints wrap their payload: `{ "response": ... }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope<T> {
    pub response: T,
}

impl ApiClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the controller root, e.g. `https://192.168.100.1`.
    /// No network traffic happens here; the token is fetched lazily on
    /// the first request (or eagerly via [`authenticate`](Self::authenticate)).
    pub fn new(
        base_url: Url,
        username: String,
        password: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            username,
            password,
            token: RwLock::new(None),
        })
    }

    /// Create a client with a pre-built `reqwest::Client` (tests).
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        username: String,
        password: SecretString,
    ) -> Self {
        Self {
            http,
            base_url,
            username,
            password,
            token: RwLock::new(None),
        }
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Authentication ───────────────────────────────────────────────

    /// Exchange username/password for a session token.
    ///
    /// `POST /api/system/v1/auth/token` with HTTP Basic credentials. The
    /// token is stored and attached to all subsequent requests.
    pub async fn authenticate(&self) -> Result<(), Error> {
        let url = self.api_url("/api/system/v1/auth/token")?;
        debug!("requesting auth token at {}", url);

        let resp = self
            .http
            .post(url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("token request failed (HTTP {status}): {body}"),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body,
            })?;

        *self.token.write().await = Some(parsed.token);
        debug!("authentication successful");
        Ok(())
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join an API path (with optional query string) onto the base URL.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        self.base_url.join(path).map_err(Error::InvalidUrl)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request, returning the raw decoded JSON.
    pub(crate) async fn get(&self, path: &str) -> Result<Value, Error> {
        self.request(Method::GET, path, None).await
    }

    /// Send a POST request with a JSON body.
    pub(crate) async fn post(&self, path: &str, body: &Value) -> Result<Value, Error> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Send a POST request with no body (path-only operations such as
    /// profile/site assignment).
    pub(crate) async fn post_empty(&self, path: &str) -> Result<Value, Error> {
        self.request(Method::POST, path, None).await
    }

    /// Send a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<Value, Error> {
        self.request(Method::DELETE, path, None).await
    }

    /// Send a GET request and unwrap the `{ response: ... }` envelope
    /// into `T`.
    pub(crate) async fn get_enveloped<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let value = self.get(path).await?;
        decode::<ResponseEnvelope<T>>(value).map(|e| e.response)
    }

    /// Send a GET request and decode the bare (un-enveloped) payload.
    ///
    /// The template-programmer endpoints return raw arrays/objects
    /// without the usual envelope.
    pub(crate) async fn get_bare<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let value = self.get(path).await?;
        decode(value)
    }

    /// Issue a request with the auth token attached, re-authenticating
    /// and replaying exactly once if the controller answers 401.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        let url = self.api_url(path)?;
        debug!("{} {}", method, url);

        let resp = self.send(method.clone(), url.clone(), body).await?;
        let resp = if resp.status() == StatusCode::UNAUTHORIZED {
            debug!("token rejected, re-authenticating");
            self.authenticate().await?;
            let retried = self.send(method, url, body).await?;
            if retried.status() == StatusCode::UNAUTHORIZED {
                return Err(Error::Authentication {
                    message: "token rejected after re-authentication".into(),
                });
            }
            retried
        } else {
            resp
        };

        let status = resp.status();
        let text = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: text,
        })
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, Error> {
        // First request of the process: no token yet, fetch one.
        if self.token.read().await.is_none() {
            self.authenticate().await?;
        }
        let token = self
            .token
            .read()
            .await
            .clone()
            .unwrap_or_default();

        let mut req = self.http.request(method, url).header("X-Auth-Token", token);
        if let Some(body) = body {
            req = req.json(body);
        }
        req.send().await.map_err(Error::Transport)
    }
}

/// Decode a JSON value into `T`, keeping the original text in the error.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    let body = value.to_string();
    serde_json::from_value(value).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body,
    })
}
