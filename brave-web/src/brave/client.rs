use super::types::WebSearchRequest;
use brave_common::{Result, SearchError};
use brave_http::{Auth, HttpClient, RequestOpts};
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::Value;
use std::time::Instant;

pub const BRAVE_API_BASE: &str = "https://api.search.brave.com";
pub const WEB_SEARCH_PATH: &str = "res/v1/web/search";

const SUBSCRIPTION_TOKEN: &str = "x-subscription-token";

/// Minimal client for Brave Search API (web vertical).
#[derive(Clone, Debug)]
pub struct BraveApi {
    http: HttpClient,
    token: HeaderValue,
}

impl BraveApi {
    /// Client for the public Brave endpoint.
    pub fn new(subscription_token: &str) -> Result<Self> {
        Self::with_base_url(subscription_token, BRAVE_API_BASE)
    }

    /// Client for an alternate base URL (useful for testing).
    pub fn with_base_url(subscription_token: &str, base: &str) -> Result<Self> {
        let http = HttpClient::new(base)?;
        let mut token = HeaderValue::from_str(subscription_token).map_err(|e| {
            SearchError::Config(format!("invalid BRAVE_SEARCH_API_KEY: {e}"))
        })?;
        token.set_sensitive(true);
        Ok(Self { http, token })
    }

    /// One GET against the web search endpoint, returning the upstream body
    /// untouched. No retries.
    pub async fn web_search(&self, req: &WebSearchRequest) -> Result<Value> {
        let started = Instant::now();
        tracing::info!(
            target: "web.brave",
            query = %req.query,
            count = req.count,
            offset = req.offset,
            "brave.web_search.start"
        );

        let resp: Value = match self
            .http
            .get_json(
                WEB_SEARCH_PATH,
                RequestOpts {
                    auth: Some(Auth::Header {
                        name: HeaderName::from_static(SUBSCRIPTION_TOKEN),
                        value: self.token.clone(),
                    }),
                    query: Some(req.query_pairs()),
                    ..Default::default()
                },
            )
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(
                    target: "web.brave",
                    query = %req.query,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %err,
                    "brave.web_search.error"
                );
                return Err(err.into());
            }
        };

        let hit_count = resp
            .pointer("/web/results")
            .and_then(Value::as_array)
            .map(Vec::len);
        tracing::info!(
            target: "web.brave",
            query = %req.query,
            ?hit_count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "brave.web_search.done"
        );
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brave_common::ErrorKind;

    #[test]
    fn key_with_newline_is_a_config_error() {
        let err = BraveApi::new("abc\ndef").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().starts_with("invalid BRAVE_SEARCH_API_KEY"));
    }

    #[test]
    fn token_is_marked_sensitive() {
        let api = BraveApi::new("tok").unwrap();
        assert!(api.token.is_sensitive());
        assert!(!format!("{api:?}").contains("tok\""));
    }
}
