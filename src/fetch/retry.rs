//! GET with bounded retries over a shared reqwest client

use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use url::Url;

use super::policy::FetchPolicy;
use crate::error::BindError;

/// Result of a fetch that completed without a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response body as UTF-8 text
    Body(String),
    /// Exhausted 404 absorbed by the skip-on-not-found policy
    Skipped,
}

/// Stateless retry wrapper around a single GET operation.
///
/// The client is cheap to clone (internally reference-counted) and is shared
/// between content fetches and style-import fetches within one run.
#[derive(Debug, Clone)]
pub struct RetryingFetcher {
    client: Client,
}

impl RetryingFetcher {
    /// Build a fetcher. TLS verification is disabled when `verify_tls` is
    /// false, accepting self-signed or otherwise invalid certificates.
    pub fn new(verify_tls: bool) -> Result<Self, BindError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!verify_tls)
            .build()
            .map_err(BindError::Client)?;

        Ok(Self { client })
    }

    /// Fetch `url`, retrying per `policy`.
    ///
    /// Retries fire on transport errors and non-2xx statuses alike, with the
    /// policy's constant delay between attempts. An exhausted 404 becomes
    /// `FetchOutcome::Skipped` when `policy.skip_not_found` is set; every
    /// other exhausted failure is a `BindError::Fetch`.
    pub async fn fetch(&self, url: &str, policy: &FetchPolicy) -> Result<FetchOutcome, BindError> {
        let parsed = Url::parse(url).map_err(|source| BindError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let attempts = policy.attempts();
        let mut last_status: Option<StatusCode> = None;
        let mut last_detail = String::new();

        for attempt in 1..=attempts {
            debug!("fetching {url} (attempt {attempt}/{attempts})");

            match self
                .client
                .get(parsed.clone())
                .timeout(policy.timeout)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        match response.text().await {
                            Ok(body) => return Ok(FetchOutcome::Body(body)),
                            Err(e) => {
                                last_status = None;
                                last_detail = format!("failed to read body: {e}");
                            }
                        }
                    } else {
                        last_status = Some(status);
                        last_detail = format!("server returned {status}");
                    }
                }
                Err(e) => {
                    last_status = None;
                    last_detail = e.to_string();
                }
            }

            if attempt < attempts {
                debug!("retrying {url} in {:?}: {last_detail}", policy.retry_delay);
                tokio::time::sleep(policy.retry_delay).await;
            }
        }

        if last_status == Some(StatusCode::NOT_FOUND) && policy.skip_not_found {
            info!("skipping {url}: not found");
            return Ok(FetchOutcome::Skipped);
        }

        warn!("giving up on {url} after {attempts} attempts: {last_detail}");
        Err(BindError::Fetch {
            url: url.to_string(),
            status: last_status.map(|s| s.as_u16()),
            detail: last_detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_unparseable_urls_before_any_attempt() {
        let fetcher = RetryingFetcher::new(true).expect("client should build");
        let err = fetcher
            .fetch("not a url", &FetchPolicy::default())
            .await
            .unwrap_err();

        assert!(matches!(err, BindError::InvalidUrl { .. }));
    }

    #[test]
    fn attempts_counts_the_first_try() {
        let policy = FetchPolicy {
            max_retries: 3,
            ..FetchPolicy::default()
        };
        assert_eq!(policy.attempts(), 4);
        assert_eq!(FetchPolicy::default().attempts(), 1);
    }
}
