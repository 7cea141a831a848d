//! HTTP client for the quote provider's chart and quote-summary endpoints.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{ChartQuery, Query, SummaryQuery},
    types::{ApiError, ChartResponse, ChartResult, QuoteSummaryResponse, QuoteSummaryResult},
    user_agent::get_user_agent,
    Error,
};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_SESSION_URL: &str = "https://fc.yahoo.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const REFERER: &str = "https://finance.yahoo.com/";
const MAX_CRUMB_LEN: usize = 100;

/// HTTP client for the quote provider.
///
/// Each call builds a fresh `reqwest::Client` with a randomized browser user
/// agent, the configured timeout and its own cookie jar. Nothing is cached
/// between calls, including the session.
///
/// The quote-summary endpoint needs a session: a cookie set by the session
/// host plus a crumb from `/v1/test/getcrumb`, sent as the `crumb` query
/// parameter. A crumb rejected with HTTP 401 is refreshed once.
pub struct Client {
    /// Base URL for the API. Defaults to `https://query1.finance.yahoo.com`.
    base_api_url: String,
    /// Page visited to receive the session cookie. Defaults to `https://fc.yahoo.com`.
    session_url: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production provider.
    pub fn new() -> Self {
        Self {
            base_api_url: DEFAULT_BASE_URL.to_string(),
            session_url: DEFAULT_SESSION_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    ///
    /// The session cookie is requested from the same host.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Self {
            session_url: base.clone(),
            base_api_url: base,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn endpoint_url<I>(&self, segments: I) -> Result<Url, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::InvalidUrl(format!("{}: {}", self.base_api_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_api_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_url(&self, query: &impl Query) -> Result<Url, Error> {
        let url = self.endpoint_url(query.path_segments())?;
        Ok(query.add_to_url(&url))
    }

    fn http_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(self.timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        http: &reqwest::Client,
        url: Url,
        symbol: &str,
    ) -> Result<T, Error> {
        tracing::debug!("GET {}", url);

        let resp = http
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9")
            .header("referer", REFERER)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Rate limited while fetching {}", symbol);
            return Err(Error::RateLimited);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Session rejected while fetching {}", symbol);
            return Err(Error::Unauthorized(truncate_body(&body)));
        }

        if status == StatusCode::NOT_FOUND {
            // The 404 body is normally a regular envelope carrying the error
            // object; hand it to the caller so the description survives.
            if let Ok(parsed) = serde_json::from_str::<T>(&body) {
                return Ok(parsed);
            }
            tracing::error!("Symbol {} not found", symbol);
            return Err(Error::SymbolNotFound {
                symbol: symbol.to_string(),
                description: truncate_body(&body),
            });
        }

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Parse(e.to_string())
        })?;

        Ok(parsed)
    }

    /// Opens a session on `http`: collects the cookie, then asks for a crumb.
    ///
    /// The session host answers with an error status on success, so only
    /// transport failures on that first request count.
    async fn fetch_crumb(&self, http: &reqwest::Client) -> Result<String, Error> {
        http.get(&self.session_url)
            .header("referer", REFERER)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach session host {}: {}", self.session_url, e);
                Error::RequestFailed(e.to_string())
            })?;

        let url = self.endpoint_url(["v1", "test", "getcrumb"])?;
        let resp = http
            .get(url)
            .header("referer", REFERER)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to request crumb: {}", e);
                Error::RequestFailed(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::RequestFailed(e.to_string()))?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Rate limited while requesting crumb");
            return Err(Error::RateLimited);
        }
        if !status.is_success() {
            tracing::error!("Crumb request failed with status {}", status);
            return Err(Error::Session(format!(
                "crumb request returned {}: {}",
                status.as_u16(),
                truncate_body(&body)
            )));
        }

        let crumb = body.trim();
        if !is_plausible_crumb(crumb) {
            tracing::error!("Crumb response was not a crumb: {}", truncate_body(crumb));
            return Err(Error::Session(format!(
                "unexpected crumb response: {}",
                truncate_body(crumb)
            )));
        }
        tracing::debug!("Obtained session crumb");
        Ok(crumb.to_string())
    }

    async fn summary_with_crumb(
        &self,
        http: &reqwest::Client,
        query: &SummaryQuery,
        crumb: &str,
    ) -> Result<QuoteSummaryResponse, Error> {
        let mut url = self.get_url(query)?;
        url.query_pairs_mut().append_pair("crumb", crumb);
        self.send(http, url, query.symbol()).await
    }

    /// Fetches price history for the symbol and range in `query`.
    pub async fn get_chart(&self, query: &ChartQuery) -> Result<ChartResult, Error> {
        let http = self.http_client()?;
        let url = self.get_url(query)?;
        let resp = self.send::<ChartResponse>(&http, url, query.symbol()).await?;
        first_result(query.symbol(), resp.chart.result, resp.chart.error)
    }

    /// Fetches the descriptive and financial snapshot for the symbol in `query`.
    pub async fn get_quote_summary(
        &self,
        query: &SummaryQuery,
    ) -> Result<QuoteSummaryResult, Error> {
        let http = self.http_client()?;
        let crumb = self.fetch_crumb(&http).await?;

        let resp = match self.summary_with_crumb(&http, query, &crumb).await {
            Err(Error::Unauthorized(body)) => {
                tracing::warn!(
                    "Crumb rejected for {}, refreshing session: {}",
                    query.symbol(),
                    body
                );
                let crumb = self.fetch_crumb(&http).await?;
                self.summary_with_crumb(&http, query, &crumb).await?
            }
            other => other?,
        };

        first_result(
            query.symbol(),
            resp.quote_summary.result,
            resp.quote_summary.error,
        )
    }
}

/// A crumb is a short opaque token; error pages and prose are not.
fn is_plausible_crumb(body: &str) -> bool {
    !body.is_empty()
        && body.len() < MAX_CRUMB_LEN
        && !body.contains(char::is_whitespace)
        && !body.contains('<')
}

/// Unwraps a `{"result": [...], "error": ...}` envelope into its first result.
fn first_result<T>(
    symbol: &str,
    result: Option<Vec<T>>,
    error: Option<ApiError>,
) -> Result<T, Error> {
    if let Some(err) = error {
        tracing::error!("Provider error for {}: {} - {}", symbol, err.code, err.description);
        return Err(if err.is_not_found() {
            Error::SymbolNotFound {
                symbol: symbol.to_string(),
                description: err.description,
            }
        } else {
            Error::Provider {
                code: err.code,
                description: err.description,
            }
        });
    }
    result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| Error::SymbolNotFound {
            symbol: symbol.to_string(),
            description: "provider returned no result".to_string(),
        })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
