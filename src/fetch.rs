//! HTTP GET + JSON parsing with failures folded into `None`.
//!
//! Every failure (connection error, non-success status, body that is not
//! JSON) is logged and reported to the caller as `None`. Callers branch on
//! emptiness instead of handling errors.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config;
use crate::error::Result;

/// Source of JSON documents addressed by URL.
///
/// [`HttpFetcher`] is the production implementation. Hosts and tests may
/// substitute their own.
pub trait Fetcher {
    /// Fetch `url` and parse the response body as JSON.
    ///
    /// Returns `None` on any failure; implementations must not panic.
    fn get_json(&self, url: &str) -> Option<Value>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn get_json(&self, url: &str) -> Option<Value> {
        (**self).get_json(url)
    }
}

// ---------------------------------------------------------------------------
// HttpFetcherBuilder
// ---------------------------------------------------------------------------

/// Builder for [`HttpFetcher`].
pub struct HttpFetcherBuilder {
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for HttpFetcherBuilder {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: config::USER_AGENT.to_string(),
        }
    }
}

impl HttpFetcherBuilder {
    /// Set the request timeout. If unset, reqwest's default applies.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<HttpFetcher> {
        let mut builder = Client::builder()
            .user_agent(self.user_agent)
            .redirect(reqwest::redirect::Policy::limited(10));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(HttpFetcher {
            client: builder.build()?,
        })
    }
}

// ---------------------------------------------------------------------------
// HttpFetcher
// ---------------------------------------------------------------------------

/// Blocking HTTP fetcher backed by [`reqwest::blocking::Client`].
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn builder() -> HttpFetcherBuilder {
        HttpFetcherBuilder::default()
    }
}

impl Fetcher for HttpFetcher {
    fn get_json(&self, url: &str) -> Option<Value> {
        log::info!("GET {}", url);

        let resp = match self.client.get(url).send() {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("Error fetching data: {}", e);
                return None;
            }
        };

        let status = resp.status();
        if !status.is_success() {
            // YGOPRODeck explains most rejections in an `{"error": "..."}` body.
            let detail = resp
                .json::<Value>()
                .ok()
                .and_then(|body| body.get("error").and_then(Value::as_str).map(String::from));
            match detail {
                Some(detail) => log::warn!(
                    "Error fetching data: HTTP status {} for url ({}): {}",
                    status,
                    url,
                    detail
                ),
                None => log::warn!("Error fetching data: HTTP status {} for url ({})", status, url),
            }
            return None;
        }

        let body = match resp.text() {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Error fetching data: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&body) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Error: Invalid JSON response. ({})", e);
                None
            }
        }
    }
}
