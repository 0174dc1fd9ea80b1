/// Security headers checked on every response, in report order
pub const REQUIRED_HEADERS: [&str; 6] = [
    "Content-Security-Policy",
    "Strict-Transport-Security",
    "X-Frame-Options",
    "X-Content-Type-Options",
    "Referrer-Policy",
    "Permissions-Policy",
];

/// Report labels
pub const PRESENT_LABEL: &str = "Present";
pub const MISSING_LABEL: &str = "Missing";

/// URL constants
pub const DEFAULT_SCHEME: &str = "http://";
pub const SUPPORTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// CSV constants
pub const CSV_URL_COLUMN: &str = "URL";

pub const USAGE: &str = "Usage: secheaders [--missing] [--skip-ssl] [--input=<file>] [--output=<file.csv>] <URL1> <URL2> ...";
