//! One-level resolution of `@import url(...)` directives

use std::sync::LazyLock;

use log::info;
use regex::Regex;

use crate::error::BindError;
use crate::fetch::{FetchOutcome, FetchPolicy, RetryingFetcher};

// Matches bare, single-quoted, and double-quoted targets.
static IMPORT_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)@import\s+url\(\s*(?:"([^"]*)"|'([^']*)'|([^'")\s]+))\s*\)\s*;"#)
        .expect("BUG: hardcoded import-directive regex is invalid")
});

/// Import targets referenced by `css`, in document order
#[must_use]
pub fn find_import_targets(css: &str) -> Vec<String> {
    IMPORT_DIRECTIVE
        .captures_iter(css)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}

/// Fetch every import target in `css` and prepend the bodies, directive
/// order, ahead of the local style text.
///
/// Fetched bodies are not scanned for their own imports; only one level is
/// walked. A 404 under the style skip policy omits that import silently; any
/// other exhausted failure aborts the run.
pub async fn inline_imports(
    css: &str,
    fetcher: &RetryingFetcher,
    policy: &FetchPolicy,
) -> Result<String, BindError> {
    let mut imported = String::new();

    for target in find_import_targets(css) {
        info!("resolving style import {target}");
        match fetcher.fetch(&target, policy).await? {
            FetchOutcome::Body(body) => {
                imported.push('\n');
                imported.push_str(&body);
            }
            FetchOutcome::Skipped => {}
        }
    }

    Ok(format!("{imported}{css}"))
}
