pub mod client;
pub mod headers;
pub mod request;

pub use client::build_http_client;
pub use headers::{PresenceMap, UrlReport, check_headers};
pub use request::fetch_headers;
