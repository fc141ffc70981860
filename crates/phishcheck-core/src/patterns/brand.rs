//! Brand-impersonation heuristic: `paypal.*\.com(?!\.paypal\.com)`, prefix-anchored.
//!
//! The regex engine has no lookaround, so the exception is checked by hand:
//! any `.com` after the brand prefix (on the same line) that is not
//! immediately followed by `.paypal.com` is enough for a match.

const BRAND: &str = "paypal";
const COM: &str = ".com";
const OWN_DOMAIN: &str = ".paypal.com";

pub(super) fn matches(url: &str) -> bool {
    let Some(rest) = url.strip_prefix(BRAND) else {
        return false;
    };
    let line_end = rest.find('\n').unwrap_or(rest.len());
    rest[..line_end]
        .match_indices(COM)
        .any(|(i, _)| !rest[i + COM.len()..].starts_with(OWN_DOMAIN))
}
