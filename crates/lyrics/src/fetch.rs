//! Fetching lyrics pages over HTTP.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use tracing::{info, warn};

use crate::{LyricsError, Result};

/// Options for [`Fetcher`]
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header, reqwest's default when `None`
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

/// Parse a page URL. It must be absolute and use http or https.
pub fn parse_url(input: &str) -> Result<Url> {
    let url = Url::parse(input).map_err(|e| LyricsError::InvalidUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(LyricsError::InvalidUrl {
            url: input.to_string(),
            reason: format!("unsupported scheme `{}`", scheme),
        }),
    }
}

/// HTTP client for lyrics pages
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher from options
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let mut builder = Client::builder().timeout(options.timeout);
        if let Some(user_agent) = &options.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// GET a page and return its body. Any status other than 200 is an error.
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        info!(%url, "fetching page");
        let resp = self.client.get(url.clone()).send().await?;

        let status = resp.status();
        if status != StatusCode::OK {
            warn!(%url, %status, "page request failed");
            return Err(LyricsError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(resp.text().await?)
    }
}
