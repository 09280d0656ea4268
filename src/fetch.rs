//! HTTP collaborator that retrieves a Prometheus scrape body.

use reqwest::Url;

use crate::config::FetchConfig;

/// Errors produced while fetching a metrics payload.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The URL could not be parsed or uses an unsupported scheme.
    #[error("invalid metrics URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request could not be sent or timed out.
    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: Url, status: u16 },

    /// The response body could not be read.
    #[error("reading response body from {url} failed: {source}")]
    Body {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

/// Fetches exposition payloads over HTTP(S).
#[derive(Debug, Clone)]
pub struct MetricsFetcher {
    client: reqwest::Client,
}

impl MetricsFetcher {
    /// Build a fetcher with the configured timeouts and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self { client })
    }

    /// GET `url` and return the full response body.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] naming which stage failed: URL validation,
    /// transport, HTTP status, or body read.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = parse_url(url)?;
        tracing::debug!(%url, "fetching metrics");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status: status.as_u16() });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Body { url: url.clone(), source })?;

        tracing::info!(%url, status = status.as_u16(), bytes = body.len(), "fetched metrics");
        Ok(body.to_vec())
    }
}

fn parse_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|error| FetchError::InvalidUrl {
        url: raw.to_owned(),
        reason: error.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl {
            url: raw.to_owned(),
            reason: format!("unsupported scheme '{other}' (expected 'http' or 'https')"),
        }),
    }
}

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;
