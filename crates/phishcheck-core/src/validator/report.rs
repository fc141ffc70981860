//! The structured result of one validation.

use serde::Serialize;

use crate::patterns::SuspiciousPattern;

/// Diagnostic detail for one URL. A fresh report starts with every field
/// at its zero value; fields are only raised by checks that actually ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// URL parsed with a non-empty scheme and host.
    pub valid_format: bool,
    /// The GET completed with status 200 after redirects.
    pub accessible: bool,
    /// The URL text starts with `https`. Textual only; no certificate is inspected.
    pub ssl_cert: bool,
    /// Heuristics that matched, in evaluation order.
    pub suspicious_patterns: Vec<SuspiciousPattern>,
    /// Redirect hops followed by the GET.
    pub redirect_count: u32,
    /// Final status code, when the GET completed.
    pub status_code: Option<u32>,
}

impl ValidationReport {
    /// Overall verdict: well-formed, reachable, and no heuristic matched.
    /// `ssl_cert` does not take part.
    pub fn is_valid(&self) -> bool {
        self.valid_format && self.accessible && self.suspicious_patterns.is_empty()
    }
}
