//! Fixed suspicious-pattern heuristics.
//!
//! Every pattern is evaluated anchored at the start of the URL string (a
//! prefix match, not a search), and `.` never crosses a newline. Patterns
//! that begin with `.*` therefore behave like "somewhere on the first line",
//! while the brand pattern only fires on strings that literally start with
//! the brand name.

mod brand;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static HYPHENATED_COM: Lazy<Regex> = Lazy::new(|| anchored(HYPHENATED_COM_EXPR));
static AT_SIGN: Lazy<Regex> = Lazy::new(|| anchored(AT_SIGN_EXPR));
static LONG_DIGIT_RUN: Lazy<Regex> = Lazy::new(|| anchored(LONG_DIGIT_RUN_EXPR));

const BRAND_EXPR: &str = r"paypal.*\.com(?!\.paypal\.com)";
const HYPHENATED_COM_EXPR: &str = r".*\.com-[A-Za-z0-9]";
const AT_SIGN_EXPR: &str = r".*@.*";
const LONG_DIGIT_RUN_EXPR: &str = r".*[0-9]{10,}.*";

fn anchored(expr: &str) -> Regex {
    Regex::new(&format!("^(?:{})", expr)).expect("built-in pattern must compile")
}

/// One of the fixed heuristics, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuspiciousPattern {
    /// Starts with `paypal` and has a `.com` that is not followed by `.paypal.com`.
    BrandImpersonation,
    /// A `something.com-x` lookalike segment.
    HyphenatedComDomain,
    /// An `@` (credential embedding / host confusion).
    AtSign,
    /// Ten or more consecutive ASCII digits.
    LongDigitRun,
}

impl SuspiciousPattern {
    /// All patterns in evaluation order.
    pub const ALL: [SuspiciousPattern; 4] = [
        SuspiciousPattern::BrandImpersonation,
        SuspiciousPattern::HyphenatedComDomain,
        SuspiciousPattern::AtSign,
        SuspiciousPattern::LongDigitRun,
    ];

    /// Stable identifier used in reports and JSON output.
    pub fn id(self) -> &'static str {
        match self {
            SuspiciousPattern::BrandImpersonation => "brand-impersonation",
            SuspiciousPattern::HyphenatedComDomain => "hyphenated-com-domain",
            SuspiciousPattern::AtSign => "at-sign",
            SuspiciousPattern::LongDigitRun => "long-digit-run",
        }
    }

    /// The regular expression this heuristic implements.
    pub fn expression(self) -> &'static str {
        match self {
            SuspiciousPattern::BrandImpersonation => BRAND_EXPR,
            SuspiciousPattern::HyphenatedComDomain => HYPHENATED_COM_EXPR,
            SuspiciousPattern::AtSign => AT_SIGN_EXPR,
            SuspiciousPattern::LongDigitRun => LONG_DIGIT_RUN_EXPR,
        }
    }

    /// Prefix-anchored match of this pattern against `url`.
    pub fn matches(self, url: &str) -> bool {
        match self {
            SuspiciousPattern::BrandImpersonation => brand::matches(url),
            SuspiciousPattern::HyphenatedComDomain => HYPHENATED_COM.is_match(url),
            SuspiciousPattern::AtSign => AT_SIGN.is_match(url),
            SuspiciousPattern::LongDigitRun => LONG_DIGIT_RUN.is_match(url),
        }
    }
}

impl fmt::Display for SuspiciousPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Runs every pattern against `url` and returns the ones that matched, in order.
pub fn scan(url: &str) -> Vec<SuspiciousPattern> {
    SuspiciousPattern::ALL
        .into_iter()
        .filter(|p| p.matches(url))
        .collect()
}
