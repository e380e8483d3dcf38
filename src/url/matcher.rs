/// Checks if a domain matches a wildcard pattern
///
/// This function supports two types of patterns:
/// 1. Exact match: "example.com" matches only "example.com"
/// 2. Wildcard match: "*.example.com" matches the bare domain and any
///    subdomain, e.g. "blog.example.com" or "api.v2.example.com"
///
/// Both sides are compared case-insensitively. A port suffix on the candidate
/// (`example.com:8080`) is ignored.
///
/// # Examples
///
/// ```
/// use grawt::url::matches_wildcard;
///
/// assert!(matches_wildcard("example.com", "example.com"));
/// assert!(!matches_wildcard("example.com", "other.com"));
///
/// assert!(matches_wildcard("*.example.com", "example.com"));
/// assert!(matches_wildcard("*.example.com", "blog.example.com"));
/// assert!(!matches_wildcard("*.example.com", "notexample.com"));
/// ```
pub fn matches_wildcard(pattern: &str, candidate: &str) -> bool {
    let pattern = pattern.to_lowercase();
    let candidate = strip_port(candidate).to_lowercase();

    if let Some(base) = pattern.strip_prefix("*.") {
        candidate == base || candidate.ends_with(&format!(".{}", base))
    } else {
        candidate == pattern
    }
}

/// Case-insensitive substring containment of `needle` within `domain`
///
/// "example" matches `www.example.com`,
/// `example.co.uk` and `notexample.org` alike.
pub fn contains_ignore_case(needle: &str, domain: &str) -> bool {
    domain.to_lowercase().contains(&needle.to_lowercase())
}

/// Drops a trailing `:port` from a host:port string
pub(crate) fn strip_port(netloc: &str) -> &str {
    match netloc.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => netloc,
    }
}
