//! Core configuration type for one assembly run

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fetch::FetchPolicy;

pub(crate) const DEFAULT_CONCURRENCY: usize = 1;
pub(crate) const DEFAULT_RETRIES: u32 = 0;
pub(crate) const DEFAULT_RETRY_DELAY_MS: u64 = 100;
pub(crate) const DEFAULT_HTML_TIMEOUT_SECS: u64 = 5;
pub(crate) const DEFAULT_CSS_TIMEOUT_SECS: u64 = 50;

/// Configuration recognized by the assembly pipeline.
///
/// Retries and the retry delay are shared by content and style-import
/// fetches; the skip-on-404 flags and timeouts are independent per kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyConfig {
    pub(crate) concurrency: usize,
    pub(crate) retries: u32,
    pub(crate) retry_delay_ms: u64,
    pub(crate) skip_url_not_found: bool,
    pub(crate) skip_css_not_found: bool,
    pub(crate) verify_tls: bool,
    pub(crate) resolve_css_imports: bool,
    pub(crate) html_timeout_secs: u64,
    pub(crate) css_timeout_secs: u64,

    /// Style passed through unchanged when no css formatter is installed
    pub(crate) base_css: Option<String>,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            retries: DEFAULT_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            skip_url_not_found: false,
            skip_css_not_found: false,
            verify_tls: true,
            resolve_css_imports: false,
            html_timeout_secs: DEFAULT_HTML_TIMEOUT_SECS,
            css_timeout_secs: DEFAULT_CSS_TIMEOUT_SECS,
            base_css: None,
        }
    }
}

impl AssemblyConfig {
    /// Start building a configuration
    #[must_use]
    pub fn builder() -> super::AssemblyConfigBuilder {
        super::AssemblyConfigBuilder::new()
    }

    /// Maximum number of in-flight fetches per phase
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    #[must_use]
    pub fn retries(&self) -> u32 {
        self.retries
    }

    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    #[must_use]
    pub fn skip_url_not_found(&self) -> bool {
        self.skip_url_not_found
    }

    #[must_use]
    pub fn skip_css_not_found(&self) -> bool {
        self.skip_css_not_found
    }

    #[must_use]
    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    #[must_use]
    pub fn resolve_css_imports(&self) -> bool {
        self.resolve_css_imports
    }

    #[must_use]
    pub fn base_css(&self) -> Option<&str> {
        self.base_css.as_deref()
    }

    /// Policy applied to content-page fetches
    pub(crate) fn content_fetch_policy(&self) -> FetchPolicy {
        FetchPolicy {
            max_retries: self.retries,
            retry_delay: self.retry_delay(),
            skip_not_found: self.skip_url_not_found,
            verify_tls: self.verify_tls,
            timeout: Duration::from_secs(self.html_timeout_secs),
        }
    }

    /// Policy applied to style-import fetches
    pub(crate) fn style_fetch_policy(&self) -> FetchPolicy {
        FetchPolicy {
            max_retries: self.retries,
            retry_delay: self.retry_delay(),
            skip_not_found: self.skip_css_not_found,
            verify_tls: self.verify_tls,
            timeout: Duration::from_secs(self.css_timeout_secs),
        }
    }
}
