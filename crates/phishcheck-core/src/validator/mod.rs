//! URL validation: format check, suspicious-pattern scan, reachability GET,
//! and the verdict that combines them.
//!
//! Nothing in here returns an error. Parse failures and network failures
//! only lower fields of the [`ValidationReport`].

mod report;

pub use report::ValidationReport;

use crate::fetch::{self, FetchError, FetchOptions, FetchOutcome};
use crate::patterns;
use crate::url_model;

/// Validates `url` with a live GET using `opts`.
///
/// Returns the overall verdict together with the report it was derived from.
/// Blocks for at most the fetch timeout.
pub fn validate(url: &str, opts: &FetchOptions) -> (bool, ValidationReport) {
    validate_with(url, |u| fetch::get(u, opts))
}

/// Like [`validate`] but with the fetch step supplied by the caller.
///
/// `get` is called at most once, and never when the format check fails.
pub fn validate_with<F>(url: &str, get: F) -> (bool, ValidationReport)
where
    F: FnOnce(&str) -> Result<FetchOutcome, FetchError>,
{
    let mut report = ValidationReport::default();

    let Some(parts) = url_model::check_format(url) else {
        tracing::debug!("format check failed for url={:?}", url);
        return (false, report);
    };
    report.valid_format = true;
    tracing::debug!("url={} scheme={} host={}", url, parts.scheme, parts.host);

    report.suspicious_patterns = patterns::scan(url);
    if !report.suspicious_patterns.is_empty() {
        tracing::debug!(
            "suspicious patterns for url={}: {:?}",
            url,
            report.suspicious_patterns
        );
    }

    match get(url) {
        Ok(outcome) => {
            tracing::debug!(
                "fetched url={} status={} redirects={} final={}",
                url,
                outcome.status,
                outcome.redirect_count,
                outcome.effective_url.as_deref().unwrap_or("-")
            );
            report.accessible = outcome.status == 200;
            report.redirect_count = outcome.redirect_count;
            report.status_code = Some(outcome.status);
        }
        Err(e) => {
            tracing::warn!(
                "fetch failed for url={} ({}): {}",
                url,
                fetch::classify(&e),
                e
            );
        }
    }

    report.ssl_cert = url.starts_with("https");

    (report.is_valid(), report)
}
