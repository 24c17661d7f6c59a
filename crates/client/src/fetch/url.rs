//! URL invariants for catalogue entries.
//!
//! Entity construction never fails on odd inputs, so everything here is
//! infallible and degrades instead of erroring.

/// Append a trailing separator unless one is already present.
pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') { url.to_string() } else { format!("{url}/") }
}

/// Root of the site hosting `url` (`scheme://host/`).
///
/// Falls back to slicing the first three `/`-separated segments when the
/// input does not parse as an absolute URL.
pub fn site_root(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url)
        && let Some(host) = parsed.host_str()
    {
        return match parsed.port() {
            Some(port) => format!("{}://{}:{}/", parsed.scheme(), host, port),
            None => format!("{}://{}/", parsed.scheme(), host),
        };
    }

    let prefix: Vec<&str> = url.split('/').take(3).collect();
    format!("{}/", prefix.join("/"))
}

/// Last path segment of a catalogue URL, used as the default display name.
pub fn url_slug(url: &str) -> String {
    ensure_trailing_slash(url)
        .split('/')
        .rev()
        .nth(1)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_appended() {
        assert_eq!(ensure_trailing_slash("https://example.com/catalogue/naruto"), "https://example.com/catalogue/naruto/");
    }

    #[test]
    fn test_trailing_slash_preserved() {
        assert_eq!(ensure_trailing_slash("https://example.com/catalogue/naruto/"), "https://example.com/catalogue/naruto/");
    }

    #[test]
    fn test_site_root_basic() {
        assert_eq!(site_root("https://example.com/catalogue/naruto/"), "https://example.com/");
    }

    #[test]
    fn test_site_root_with_port() {
        assert_eq!(site_root("http://localhost:8080/catalogue/naruto/"), "http://localhost:8080/");
    }

    #[test]
    fn test_site_root_unparseable_falls_back() {
        assert_eq!(site_root("not a url/with/segments/deeper"), "not a url/with/segments/");
    }

    #[test]
    fn test_url_slug() {
        assert_eq!(url_slug("https://example.com/catalogue/one-piece/"), "one-piece");
        assert_eq!(url_slug("https://example.com/catalogue/one-piece"), "one-piece");
    }

    #[test]
    fn test_url_slug_empty() {
        assert_eq!(url_slug(""), "");
    }
}
