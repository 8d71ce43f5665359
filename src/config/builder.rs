//! Fluent builder for `AssemblyConfig`

use crate::error::BindError;

use super::types::{
    AssemblyConfig, DEFAULT_CONCURRENCY, DEFAULT_CSS_TIMEOUT_SECS, DEFAULT_HTML_TIMEOUT_SECS,
    DEFAULT_RETRIES, DEFAULT_RETRY_DELAY_MS,
};

/// Builder with defaults matching a conservative single-connection run:
/// one fetch at a time, no retries, strict TLS, no skipping, no import
/// resolution.
#[derive(Debug, Clone)]
pub struct AssemblyConfigBuilder {
    concurrency: usize,
    retries: u32,
    retry_delay_ms: u64,
    skip_url_not_found: bool,
    skip_css_not_found: bool,
    verify_tls: bool,
    resolve_css_imports: bool,
    html_timeout_secs: u64,
    css_timeout_secs: u64,
    base_css: Option<String>,
}

impl Default for AssemblyConfigBuilder {
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

impl AssemblyConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum in-flight fetches per phase; must be at least 1
    #[must_use]
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Additional attempts after a failed fetch
    #[must_use]
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Constant delay between attempts, in milliseconds
    #[must_use]
    pub fn retry_delay_ms(mut self, retry_delay_ms: u64) -> Self {
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    /// Drop URL declarations whose fetch exhausts on HTTP 404
    #[must_use]
    pub fn skip_url_not_found(mut self, skip: bool) -> Self {
        self.skip_url_not_found = skip;
        self
    }

    /// Omit style imports whose fetch exhausts on HTTP 404
    #[must_use]
    pub fn skip_css_not_found(mut self, skip: bool) -> Self {
        self.skip_css_not_found = skip;
        self
    }

    /// Verify TLS certificates; `false` accepts self-signed endpoints
    #[must_use]
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Walk `@import url(...)` directives one level deep during style
    /// resolution
    #[must_use]
    pub fn resolve_css_imports(mut self, resolve: bool) -> Self {
        self.resolve_css_imports = resolve;
        self
    }

    /// Per-request timeout for content-page fetches, in seconds
    #[must_use]
    pub fn html_timeout_secs(mut self, secs: u64) -> Self {
        self.html_timeout_secs = secs;
        self
    }

    /// Per-request timeout for style-import fetches, in seconds
    #[must_use]
    pub fn css_timeout_secs(mut self, secs: u64) -> Self {
        self.css_timeout_secs = secs;
        self
    }

    /// Style handed to the packager unchanged when no css formatter is set
    #[must_use]
    pub fn base_css(mut self, css: impl Into<String>) -> Self {
        self.base_css = Some(css.into());
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<AssemblyConfig, BindError> {
        if self.concurrency == 0 {
            return Err(BindError::Config(
                "concurrency must be at least 1".to_string(),
            ));
        }

        Ok(AssemblyConfig {
            concurrency: self.concurrency,
            retries: self.retries,
            retry_delay_ms: self.retry_delay_ms,
            skip_url_not_found: self.skip_url_not_found,
            skip_css_not_found: self.skip_css_not_found,
            verify_tls: self.verify_tls,
            resolve_css_imports: self.resolve_css_imports,
            html_timeout_secs: self.html_timeout_secs,
            css_timeout_secs: self.css_timeout_secs,
            base_css: self.base_css,
        })
    }
}
