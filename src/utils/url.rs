use crate::constants::{DEFAULT_SCHEME, SUPPORTED_SCHEMES};

/// Normalize URL by adding `http://` when no scheme is given
pub fn normalize_url(url_str: &str) -> String {
    let trimmed_url = url_str.trim();
    if SUPPORTED_SCHEMES
        .iter()
        .any(|scheme| trimmed_url.starts_with(scheme))
    {
        return trimmed_url.to_string();
    }

    format!("{}{}", DEFAULT_SCHEME, trimmed_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_with_scheme() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_url_without_scheme() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
        assert_eq!(
            normalize_url("example.com:8443/login"),
            "http://example.com:8443/login"
        );
    }

    #[test]
    fn test_normalize_url_trims_whitespace() {
        assert_eq!(normalize_url("  example.com \n"), "http://example.com");
    }
}
