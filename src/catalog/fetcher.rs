//! Remote fetching
//!
//! A failed fetch is never an error at this level: the failure is reported
//! and the caller receives `None`, meaning "unavailable for this run".
//! There are no retries.

use std::time::Duration;

use crate::config::SyncConfig;
use crate::{Result, ScoutError};

/// Source of remote text documents
pub trait Fetch {
    /// Body of `url` on success, `None` after reporting any failure
    fn fetch_text(&self, url: &str) -> Option<String>;
}

/// Blocking HTTPS fetcher
///
/// Certificates are checked against the webpki roots bundled with rustls.
/// Verification is only disabled on explicit request.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, insecure: bool) -> Result<Self> {
        if insecure {
            tracing::warn!("TLS certificate verification is disabled");
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("pattern-scout/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .danger_accept_invalid_certs(insecure)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &SyncConfig) -> Result<Self> {
        Self::new(config.timeout(), config.insecure)
    }

    /// GET `url`, treating any non-2xx status as an error
    pub fn get(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text()?)
    }
}

impl Fetch for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Option<String> {
        match self.get(url) {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!("Fetch failed for {}: {}", url, e);
                println!("  ❌ {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds() {
        assert!(HttpFetcher::new(Duration::from_secs(30), false).is_ok());
        assert!(HttpFetcher::new(Duration::from_secs(30), true).is_ok());
        assert!(HttpFetcher::from_config(&SyncConfig::default()).is_ok());
    }

    #[test]
    fn test_unreachable_host_is_unavailable() {
        let fetcher = HttpFetcher::new(Duration::from_secs(2), false).unwrap();
        assert!(fetcher.fetch_text("http://127.0.0.1:9/manifest.json").is_none());
        assert!(matches!(
            fetcher.get("http://127.0.0.1:9/manifest.json"),
            Err(ScoutError::Transport(_))
        ));
    }

    #[test]
    fn test_status_error_message() {
        let err = ScoutError::HttpStatus {
            status: 404,
            url: "https://example.com/x.json".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP Error 404: https://example.com/x.json");
    }
}
