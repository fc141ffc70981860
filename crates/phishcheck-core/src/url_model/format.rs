//! Decompose a URL and require scheme + host.

use url::Url;

/// Components of a URL that passed the format check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub host: String,
}

/// Parses `url` and returns its parts if both scheme and host are present.
///
/// Returns `None` for anything that fails to parse, and for URLs without a
/// written network location. The parser fills in a host for special schemes
/// even when the text has none (`http:example.com`, `https:\\evil.com`), so
/// the raw text must also carry `scheme://` followed by a non-empty authority.
pub fn check_format(url: &str) -> Option<UrlParts> {
    if !has_authority(url) {
        return None;
    }
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str().filter(|h| !h.is_empty())?;
    if parsed.scheme().is_empty() {
        return None;
    }
    Some(UrlParts {
        scheme: parsed.scheme().to_string(),
        host: host.to_string(),
    })
}

/// True if the text after `scheme:` starts with `//` and the authority up to
/// the next `/`, `?` or `#` is non-empty.
fn has_authority(url: &str) -> bool {
    let trimmed = url.trim_start_matches(|c: char| c <= ' ');
    let Some((_, rest)) = trimmed.split_once(':') else {
        return false;
    };
    let Some(after) = rest.strip_prefix("//") else {
        return false;
    };
    let end = after.find(|c| matches!(c, '/' | '?' | '#')).unwrap_or(after.len());
    end > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_and_https_pass() {
        let parts = check_format("https://example.com/login?x=1").unwrap();
        assert_eq!(parts.scheme, "https");
        assert_eq!(parts.host, "example.com");

        let parts = check_format("http://example.com:8080").unwrap();
        assert_eq!(parts.host, "example.com");
    }

    #[test]
    fn userinfo_does_not_hide_host() {
        let parts = check_format("http://user@example.com").unwrap();
        assert_eq!(parts.host, "example.com");
    }

    #[test]
    fn missing_scheme_fails() {
        assert_eq!(check_format("example.com"), None);
        assert_eq!(check_format("//example.com/path"), None);
    }

    #[test]
    fn missing_host_fails() {
        assert_eq!(check_format("http://"), None);
        assert_eq!(check_format("mailto:someone@example.com"), None);
        assert_eq!(check_format("file:///etc/passwd"), None);
    }

    #[test]
    fn host_invented_by_parser_fails() {
        assert_eq!(check_format("http:example.com"), None);
        assert_eq!(check_format("http:/example.com"), None);
        assert_eq!(check_format("http:///example.com"), None);
        assert_eq!(check_format("https:\\\\evil.com"), None);
        assert_eq!(check_format("http://?q=1"), None);
    }

    #[test]
    fn garbage_fails_without_panicking() {
        assert_eq!(check_format(""), None);
        assert_eq!(check_format("   "), None);
        assert_eq!(check_format("\u{0}\u{1}\u{fffd}"), None);
        assert_eq!(check_format("http://exa mple.com"), None);
    }
}
