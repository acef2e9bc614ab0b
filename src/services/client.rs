//! Thin upstream HTTP client.
//!
//! Every read-only dashboard call is a bearer-authenticated GET against the
//! brokerage API; this wrapper only builds URLs, attaches headers, and turns
//! non-2xx statuses into typed errors. One attempt per call — retrying and
//! caching are deliberately not done here. Normalization of the returned
//! payloads lives in the sibling serializer modules.

use std::time::Duration;

use isahc::{prelude::*, HttpClient};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, Result};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Bearer token plus optional session cookie, passed explicitly into the
/// client instead of living in ambient state.
#[derive(Debug, Clone)]
pub struct AccessToken {
    bearer: String,
    session_cookie: Option<String>,
}

impl AccessToken {
    pub fn new(bearer: impl Into<String>) -> Self {
        AccessToken {
            bearer: bearer.into(),
            session_cookie: None,
        }
    }

    pub fn with_session(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    fn authorization_header(&self) -> String {
        format!("Bearer {}", self.bearer)
    }
}

/// Result of the refresh-token exchange. The upstream sometimes omits the
/// expiry; it defaults to 300 seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_expiry_secs")]
    pub expires_in: u64,
}

fn default_expiry_secs() -> u64 {
    300
}

pub struct DashboardClient {
    client: HttpClient,
    base_url: String,
    token: AccessToken,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>, token: AccessToken) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(DashboardClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    pub async fn company_profile(&self, symbol: &str) -> Result<Value> {
        self.get_json(&format!("company/{}/profile", symbol.to_uppercase()))
            .await
    }

    pub async fn quote(&self, symbol: &str) -> Result<Value> {
        self.get_json(&format!("quote/{}", symbol.to_uppercase())).await
    }

    /// Financial statements; the useful content arrives as an HTML table
    /// embedded in the JSON body.
    pub async fn financial_statements(&self, symbol: &str, statement: &str) -> Result<Value> {
        self.get_json(&format!(
            "financial/{}/statements?statement={}",
            symbol.to_uppercase(),
            statement
        ))
        .await
    }

    pub async fn key_stats(&self, symbol: &str) -> Result<Value> {
        self.get_json(&format!("keystats/ratio/{}", symbol.to_uppercase()))
            .await
    }

    pub async fn price_performance(&self, symbol: &str) -> Result<Value> {
        self.get_json(&format!("company/{}/price-performance", symbol.to_uppercase()))
            .await
    }

    pub async fn broker_activity(&self, broker: &str, from: &str, to: &str) -> Result<Value> {
        self.get_json(&format!(
            "broker/{}/activity?from={}&to={}",
            broker.to_uppercase(),
            from,
            to
        ))
        .await
    }

    pub async fn insider_activity(&self, symbol: &str) -> Result<Value> {
        self.get_json(&format!("insider/{}/activity", symbol.to_uppercase()))
            .await
    }

    pub async fn watchlists(&self) -> Result<Value> {
        self.get_json("watchlist").await
    }

    /// Fetch one watchlist by id. The upstream paginates; a single page of
    /// 500 covers any personal watchlist.
    pub async fn watchlist_detail(&self, id: u64) -> Result<Value> {
        self.get_json(&format!("watchlist/{}/items?page=1&limit=500", id))
            .await
    }

    pub async fn search(&self, keyword: &str) -> Result<Value> {
        self.get_json(&format!("search?keyword={}", keyword)).await
    }

    pub async fn stream(&self, symbol: &str) -> Result<Value> {
        self.get_json(&format!("stream/{}?page=1", symbol.to_uppercase()))
            .await
    }

    async fn get_json(&self, path_and_query: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path_and_query);
        tracing::debug!("GET {}", url);

        let mut builder = isahc::Request::builder()
            .uri(&url)
            .method("GET")
            .header("Accept", "application/json, text/plain, */*")
            .header("Authorization", self.token.authorization_header());
        if let Some(cookie) = &self.token.session_cookie {
            builder = builder.header("Cookie", cookie.as_str());
        }
        let request = builder
            .body(())
            .map_err(|e| AppError::Network(e.to_string()))?;

        let mut response = self.client.send_async(request).await?;
        let status = response.status();

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(AppError::Auth(format!(
                "upstream rejected the access token ({})",
                status.canonical_reason().unwrap_or("Unauthorized")
            )));
        }
        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| AppError::Parse(e.to_string()))
    }
}

/// Exchange a refresh token for a fresh access/refresh token pair. Single
/// attempt, no backoff.
pub async fn refresh_access_token(base_url: &str, refresh_token: &str) -> Result<TokenPair> {
    let client = HttpClient::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let url = format!("{}/auth/refresh", base_url.trim_end_matches('/'));
    tracing::debug!("POST {}", url);

    let payload = serde_json::json!({ "refresh_token": refresh_token });
    let request = isahc::Request::builder()
        .uri(&url)
        .method("POST")
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .body(serde_json::to_string(&payload)?)
        .map_err(|e| AppError::Network(e.to_string()))?;

    let mut response = client.send_async(request).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Auth(format!(
            "token refresh failed ({}): {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    let body: Value = serde_json::from_str(&response.text().await?)?;
    let data = body.get("data").unwrap_or(&body);
    serde_json::from_value(data.clone()).map_err(|e| AppError::Parse(e.to_string()))
}
