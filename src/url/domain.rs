use url::Url;

/// Extracts the network location (host and explicit port) from a URL
///
/// The host is lowercased by the URL parser. Default ports are omitted by
/// `Url::port`, so `https://example.com:443/` yields `example.com`.
///
/// # Returns
///
/// * `Some(String)` - `host` or `host:port`
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use grawt::url::extract_netloc;
///
/// let url = Url::parse("https://Example.COM/path").unwrap();
/// assert_eq!(extract_netloc(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(extract_netloc(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn extract_netloc(url: &Url) -> Option<String> {
    let host = url.host_str().filter(|h| !h.is_empty())?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Returns the raw network location of `href`, if it has a non-empty one
///
/// This is the generic RFC 3986 split rather than WHATWG parsing: an optional
/// `scheme:` prefix is dropped, then the reference must continue with `//`
/// and the authority runs up to the next `/`, `?` or `#`. The text is
/// returned exactly as written, so case and explicit default ports survive.
/// Shorthands such as `http:x.com/a` or `https:/x.com/a` have no network
/// location.
///
/// # Examples
///
/// ```
/// use grawt::url::network_location;
///
/// assert_eq!(network_location("http://LocalHost:80/a"), Some("LocalHost:80"));
/// assert_eq!(network_location("//cdn.x.com/lib.js"), Some("cdn.x.com"));
/// assert_eq!(network_location("http:x.com/a"), None);
/// ```
pub fn network_location(href: &str) -> Option<&str> {
    let href = href.trim_start_matches(|c: char| c <= ' ');
    let rest = strip_scheme(href).strip_prefix("//")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end]).filter(|netloc| !netloc.is_empty())
}

/// Returns true if `href` carries a non-empty network location
///
/// Absolute URLs (`https://x.com/a`) and scheme-relative references
/// (`//x.com/a`) qualify. Relative paths, fragments, and host-less schemes
/// such as `mailto:` do not.
///
/// # Examples
///
/// ```
/// use grawt::url::has_network_location;
///
/// assert!(has_network_location("https://x.com/a"));
/// assert!(has_network_location("//cdn.x.com/lib.js"));
/// assert!(!has_network_location("/relative"));
/// assert!(!has_network_location("#frag"));
/// ```
pub fn has_network_location(href: &str) -> bool {
    network_location(href).is_some()
}

/// Drops a leading `scheme:` (`[A-Za-z][A-Za-z0-9+.-]*:`) if present
fn strip_scheme(href: &str) -> &str {
    let Some((scheme, rest)) = href.split_once(':') else {
        return href;
    };

    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'));

    if valid {
        rest
    } else {
        href
    }
}
