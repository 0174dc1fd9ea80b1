use reqwest::header::HeaderMap;

use crate::constants::REQUIRED_HEADERS;

/// Presence of each required security header on one response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceMap {
    present: [bool; REQUIRED_HEADERS.len()],
}

impl PresenceMap {
    /// `(header, present)` pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        REQUIRED_HEADERS.into_iter().zip(self.present)
    }

    pub fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter()
            .filter_map(|(header, present)| (!present).then_some(header))
    }

    /// Whether `header` was present. Names outside the required list are never present.
    pub fn is_present(&self, header: &str) -> bool {
        self.iter()
            .any(|(name, present)| present && name.eq_ignore_ascii_case(header))
    }
}

/// A checked URL, as the user supplied it, with its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlReport {
    pub url: String,
    pub presence: PresenceMap,
}

/// Check which required headers appear in a response header map
pub fn check_headers(headers: &HeaderMap) -> PresenceMap {
    // HeaderMap lookups by &str are case-insensitive.
    PresenceMap {
        present: REQUIRED_HEADERS.map(|header| headers.contains_key(header)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_check_headers_always_reports_every_header() {
        let presence = check_headers(&HeaderMap::new());
        let names: Vec<_> = presence.iter().map(|(name, _)| name).collect();
        assert_eq!(names, REQUIRED_HEADERS);
        assert_eq!(presence.missing().count(), REQUIRED_HEADERS.len());
    }

    #[test]
    fn test_check_headers_partial() {
        let headers = header_map(&[
            ("Content-Security-Policy", "default-src 'self'"),
            ("X-Frame-Options", "DENY"),
            ("Server", "nginx"),
        ]);
        let presence = check_headers(&headers);
        assert!(presence.is_present("Content-Security-Policy"));
        assert!(presence.is_present("X-Frame-Options"));
        assert_eq!(
            presence.missing().collect::<Vec<_>>(),
            vec![
                "Strict-Transport-Security",
                "X-Content-Type-Options",
                "Referrer-Policy",
                "Permissions-Policy",
            ]
        );
    }

    #[test]
    fn test_check_headers_case_insensitive() {
        let headers = header_map(&[("strict-transport-security", "max-age=63072000")]);
        let presence = check_headers(&headers);
        assert!(presence.is_present("Strict-Transport-Security"));
        assert!(presence.is_present("strict-transport-security"));
    }

    #[test]
    fn test_check_headers_ignores_values() {
        let headers = header_map(&[
            ("Referrer-Policy", ""),
            ("Permissions-Policy", "camera=()"),
            ("Permissions-Policy", "geolocation=()"),
        ]);
        let presence = check_headers(&headers);
        assert!(presence.is_present("Referrer-Policy"));
        assert!(presence.is_present("Permissions-Policy"));
    }

    #[test]
    fn test_is_present_unknown_header() {
        let headers = header_map(&[("Server", "nginx"), ("X-Frame-Options", "DENY")]);
        let presence = check_headers(&headers);
        assert!(!presence.is_present("Server"));
        assert!(!presence.is_present("Referrer-Policy"));
        assert!(presence.is_present("x-frame-options"));
    }
}
