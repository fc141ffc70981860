//! Reachability GET.
//!
//! Uses the curl crate (libcurl) to issue a single GET that follows
//! redirects, then reports the final status code and how many redirect
//! hops were taken. The response body is read and discarded.

mod error;

pub use error::{classify, FailureKind, FetchError};

use std::time::Duration;

/// Knobs for the reachability GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Total time allowed for the request, redirects included.
    pub timeout: Duration,
    /// Redirect hops followed before curl gives up.
    pub max_redirects: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            max_redirects: 30,
        }
    }
}

/// What the server answered once redirects were followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Status code of the final response.
    pub status: u32,
    /// Number of redirect responses followed before the final one.
    pub redirect_count: u32,
    /// URL of the final response, if curl reports one.
    pub effective_url: Option<String>,
}

/// Performs a GET and returns the final status and redirect count.
///
/// Any status code counts as a completed fetch; only transport-level
/// problems (DNS, connect, TLS, timeout, redirect limit) are errors.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn get(url: &str, opts: &FetchOptions) -> Result<FetchOutcome, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirects)?;
    easy.timeout(opts.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| Ok(data.len()))?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    let redirect_count = easy.redirect_count()?;
    let effective_url = easy.effective_url()?.map(str::to_string);

    Ok(FetchOutcome {
        status,
        redirect_count,
        effective_url,
    })
}
